use crate::guards::check_one_yocto;
use crate::*;
use near_sdk::PublicKey;

#[near]
impl Contract {
    /// Register an ed25519 signing key for the calling artist. Only
    /// registered keys validate signed mint authorizations.
    #[payable]
    #[handle_result]
    pub fn register_artist_key(&mut self, public_key: PublicKey) -> Result<(), PlatformError> {
        check_one_yocto()?;
        let artist_id = env::predecessor_account_id();

        let mut keys = self.artist_keys.get(&artist_id).cloned().unwrap_or_default();
        if keys.contains(&public_key) {
            return Err(PlatformError::InvalidInput(
                "Key is already registered".into(),
            ));
        }
        if keys.len() >= MAX_ARTIST_KEYS {
            return Err(PlatformError::InvalidInput(format!(
                "Too many registered keys (max {})",
                MAX_ARTIST_KEYS
            )));
        }
        keys.push(public_key.clone());
        self.artist_keys.insert(artist_id.clone(), keys);

        events::emit_artist_key_added(&artist_id, &public_key);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn remove_artist_key(&mut self, public_key: PublicKey) -> Result<(), PlatformError> {
        check_one_yocto()?;
        let artist_id = env::predecessor_account_id();

        let mut keys = self.artist_keys.get(&artist_id).cloned().unwrap_or_default();
        let pos = keys
            .iter()
            .position(|k| k == &public_key)
            .ok_or_else(|| PlatformError::NotFound("Key is not registered".into()))?;
        keys.remove(pos);
        if keys.is_empty() {
            self.artist_keys.remove(&artist_id);
        } else {
            self.artist_keys.insert(artist_id.clone(), keys);
        }

        events::emit_artist_key_removed(&artist_id, &public_key);
        Ok(())
    }

    /// Allow `minter_id` to submit direct mints on the calling artist's
    /// behalf (the contract-signer scheme: authorization by account identity
    /// instead of a raw-key signature).
    #[payable]
    #[handle_result]
    pub fn authorize_minter(&mut self, minter_id: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        let artist_id = env::predecessor_account_id();
        if minter_id == artist_id {
            return Err(PlatformError::InvalidInput(
                "Artist is always allowed to mint".into(),
            ));
        }

        let mut minters = self
            .artist_minters
            .get(&artist_id)
            .cloned()
            .unwrap_or_default();
        if minters.contains(&minter_id) {
            return Err(PlatformError::InvalidInput(
                "Minter is already authorized".into(),
            ));
        }
        if minters.len() >= MAX_ARTIST_MINTERS {
            return Err(PlatformError::InvalidInput(format!(
                "Too many authorized minters (max {})",
                MAX_ARTIST_MINTERS
            )));
        }
        minters.push(minter_id.clone());
        self.artist_minters.insert(artist_id.clone(), minters);

        events::emit_minter_authorized(&artist_id, &minter_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn revoke_minter(&mut self, minter_id: AccountId) -> Result<(), PlatformError> {
        check_one_yocto()?;
        let artist_id = env::predecessor_account_id();

        let mut minters = self
            .artist_minters
            .get(&artist_id)
            .cloned()
            .unwrap_or_default();
        let pos = minters
            .iter()
            .position(|m| m == &minter_id)
            .ok_or_else(|| PlatformError::NotFound("Minter is not authorized".into()))?;
        minters.remove(pos);
        if minters.is_empty() {
            self.artist_minters.remove(&artist_id);
        } else {
            self.artist_minters.insert(artist_id.clone(), minters);
        }

        events::emit_minter_revoked(&artist_id, &minter_id);
        Ok(())
    }

    pub fn artist_keys_of(&self, artist_id: AccountId) -> Vec<PublicKey> {
        self.artist_keys.get(&artist_id).cloned().unwrap_or_default()
    }

    pub fn minters_of(&self, artist_id: AccountId) -> Vec<AccountId> {
        self.artist_minters
            .get(&artist_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Contract {
    pub(crate) fn is_authorized_minter(&self, artist_id: &AccountId, caller: &AccountId) -> bool {
        self.artist_minters
            .get(artist_id)
            .map(|minters| minters.contains(caller))
            .unwrap_or(false)
    }
}
