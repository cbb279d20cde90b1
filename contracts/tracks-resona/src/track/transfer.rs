use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Transfer a track to another account. Owner only.
    #[payable]
    #[handle_result]
    pub fn track_transfer(
        &mut self,
        receiver_id: AccountId,
        track_id: u64,
        memo: Option<String>,
    ) -> Result<(), PlatformError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        let mut track = self
            .tracks_by_id
            .get(&track_id)
            .ok_or_else(|| PlatformError::track_not_found(track_id))?
            .clone();

        if sender_id != track.owner_id {
            return Err(PlatformError::only_owner("the track owner"));
        }
        if receiver_id == track.owner_id {
            return Err(PlatformError::InvalidInput(
                "Receiver must differ from current owner".into(),
            ));
        }

        let old_owner_id = track.owner_id.clone();
        self.remove_track_from_owner(&old_owner_id, track_id);
        track.owner_id = receiver_id.clone();
        self.add_track_to_owner(&receiver_id, track_id);
        self.tracks_by_id.insert(track_id, track);

        events::emit_track_transfer(&old_owner_id, &receiver_id, track_id, memo.as_deref());
        Ok(())
    }
}

impl Contract {
    pub(crate) fn add_track_to_owner(&mut self, owner_id: &AccountId, track_id: u64) {
        if !self.tracks_per_owner.contains_key(owner_id) {
            self.tracks_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TracksPerOwnerInner {
                    account_id_hash: env::sha256(owner_id.as_bytes()),
                }),
            );
        }
        self.tracks_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(track_id);
    }

    pub(crate) fn remove_track_from_owner(&mut self, owner_id: &AccountId, track_id: u64) {
        if let Some(owned) = self.tracks_per_owner.get_mut(owner_id) {
            owned.remove(&track_id);
        }
    }
}
