use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        token_id: AccountId,
        platform_fee_bps: Option<u16>,
        fee_recipient: Option<AccountId>,
    ) -> Self {
        let platform_fee_bps = platform_fee_bps.unwrap_or(DEFAULT_PLATFORM_FEE_BPS);
        assert!(
            platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
            "Platform fee cannot exceed {} bps",
            MAX_PLATFORM_FEE_BPS
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fee_recipient: fee_recipient.unwrap_or_else(|| owner_id.clone()),
            owner_id,
            token_id,
            platform_fee_bps,
            next_track_id: 1,
            tracks_by_id: IterableMap::new(StorageKey::TracksById),
            tracks_per_owner: LookupMap::new(StorageKey::TracksPerOwner),
            artist_keys: LookupMap::new(StorageKey::ArtistKeys),
            artist_minters: LookupMap::new(StorageKey::ArtistMinters),
            revenue_sources: IterableSet::new(StorageKey::RevenueSources),
            pending_withdrawals: LookupMap::new(StorageKey::PendingWithdrawals),
            total_pending: 0,
            subscription_plan: SubscriptionPlan::default(),
            subscriptions: LookupMap::new(StorageKey::Subscriptions),
            stream_credits: LookupMap::new(StorageKey::StreamCredits),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(PlatformError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_fee_recipient(&mut self, fee_recipient: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_recipient = self.fee_recipient.clone();
        self.fee_recipient = fee_recipient;
        events::emit_fee_recipient_changed(&self.owner_id, &old_recipient, &self.fee_recipient);
        Ok(())
    }

    /// Update the platform fee. Applies to future distributions only; a raise
    /// can push an existing track's fee + royalty past 100%, in which case
    /// distribution for that track fails until the fee is lowered.
    #[payable]
    #[handle_result]
    pub fn set_platform_fee_bps(&mut self, platform_fee_bps: u16) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if platform_fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(PlatformError::InvalidInput(format!(
                "Platform fee cannot exceed {} bps",
                MAX_PLATFORM_FEE_BPS
            )));
        }
        let old_bps = self.platform_fee_bps;
        self.platform_fee_bps = platform_fee_bps;
        events::emit_platform_fee_updated(&self.owner_id, old_bps, platform_fee_bps);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn add_revenue_source(&mut self, source_id: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.revenue_sources.contains(&source_id) {
            return Err(PlatformError::InvalidInput(
                "Revenue source already exists".into(),
            ));
        }
        if self.revenue_sources.len() >= MAX_REVENUE_SOURCES {
            return Err(PlatformError::InvalidInput(format!(
                "Too many revenue sources (max {})",
                MAX_REVENUE_SOURCES
            )));
        }
        self.revenue_sources.insert(source_id.clone());
        events::emit_revenue_source_added(&self.owner_id, &source_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn remove_revenue_source(&mut self, source_id: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.revenue_sources.remove(&source_id) {
            return Err(PlatformError::NotFound("Revenue source not found".into()));
        }
        events::emit_revenue_source_removed(&self.owner_id, &source_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_subscription_plan(
        &mut self,
        price: U128,
        duration_ns: Option<u64>,
    ) -> Result<(), PlatformError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let duration_ns = duration_ns.unwrap_or(DEFAULT_SUBSCRIPTION_PERIOD_NS);
        if duration_ns == 0 {
            return Err(PlatformError::InvalidInput(
                "Subscription period must be positive".into(),
            ));
        }
        self.subscription_plan = SubscriptionPlan { price, duration_ns };
        events::emit_subscription_plan_updated(&self.owner_id, price.0, duration_ns);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_fee_recipient(&self) -> &AccountId {
        &self.fee_recipient
    }

    pub fn get_platform_fee_bps(&self) -> u16 {
        self.platform_fee_bps
    }

    pub fn get_revenue_sources(&self) -> Vec<&AccountId> {
        self.revenue_sources.iter().collect()
    }

    pub fn get_subscription_plan(&self) -> SubscriptionPlan {
        self.subscription_plan.clone()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    /// Deploys new contract code. Owner only.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, PlatformError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .ok_or_else(|| PlatformError::InvalidInput("No code provided".into()))?
            .to_vec();
        events::emit_contract_upgrade(&self.owner_id);
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .as_return())
    }
}
