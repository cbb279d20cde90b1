use crate::*;

#[near]
impl Contract {
    pub fn track_info(&self, track_id: u64) -> Option<TrackView> {
        self.tracks_by_id.get(&track_id).map(|track| TrackView {
            track_id,
            owner_id: track.owner_id.clone(),
            artist_id: track.artist_id.clone(),
            metadata: track.metadata.clone(),
            royalty: track.royalty.clone(),
            stream_price: track.stream_price,
            minted_at: track.minted_at,
        })
    }

    pub fn track_metadata(&self, track_id: u64) -> Option<TrackMetadata> {
        self.tracks_by_id
            .get(&track_id)
            .map(|track| track.metadata.clone())
    }

    /// Royalty owed for a sale of `track_id` at `sale_price`.
    /// `amount = sale_price * bps / 10000`; integer division rounds down in
    /// the seller's favor by design.
    #[handle_result]
    pub fn track_payout(
        &self,
        track_id: u64,
        sale_price: U128,
    ) -> Result<RoyaltyPayout, PlatformError> {
        let track = self
            .tracks_by_id
            .get(&track_id)
            .ok_or_else(|| PlatformError::track_not_found(track_id))?;

        match &track.royalty {
            Some(royalty) => Ok(RoyaltyPayout {
                recipient: Some(royalty.recipient.clone()),
                amount: U128(bps_share(sale_price.0, royalty.bps)),
            }),
            None => Ok(RoyaltyPayout {
                recipient: None,
                amount: U128(0),
            }),
        }
    }

    pub fn track_supply(&self) -> u64 {
        self.tracks_by_id.len() as u64
    }

    pub fn tracks_of(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<TrackView> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50) as usize;

        match self.tracks_per_owner.get(&account_id) {
            Some(owned) => owned
                .iter()
                .skip(from)
                .take(limit)
                .filter_map(|track_id| self.track_info(*track_id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Last consumed mint nonce for `artist_id`; the next valid nonce is
    /// this value plus one.
    pub fn mint_nonce_of(&self, artist_id: AccountId) -> u64 {
        resona_auth::nonce::read_nonce(MINT_NONCE_PREFIX, &artist_id)
    }
}

// The basis-point product can exceed u128 for extreme amounts; the quotient
// never does, so the intermediate goes through U256.
pub(crate) fn bps_share(amount: u128, bps: u16) -> u128 {
    (primitive_types::U256::from(amount) * primitive_types::U256::from(bps)
        / primitive_types::U256::from(BASIS_POINTS))
    .as_u128()
}
