use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), PlatformError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(PlatformError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if actor_id != &self.owner_id {
            return Err(PlatformError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_revenue_source(&self, source_id: &AccountId) -> Result<(), PlatformError> {
        if !self.revenue_sources.contains(source_id) {
            return Err(PlatformError::unauthorized_source(source_id));
        }
        Ok(())
    }
}
