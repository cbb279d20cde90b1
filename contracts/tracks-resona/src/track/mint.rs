use crate::*;
use near_sdk::serde_json;
use resona_auth::MintAuthorization;

#[near]
impl Contract {
    /// Mint a track authorized by its artist.
    ///
    /// `Direct` auth requires the predecessor to be the artist or one of the
    /// artist's authorized minters. `SignedPayload` auth verifies an ed25519
    /// signature over the domain-separated mint payload against one of the
    /// artist's registered keys and consumes the artist's next mint nonce.
    #[payable]
    #[handle_result]
    pub fn mint_track(&mut self, args: MintArgs, auth: MintAuth) -> Result<u64, PlatformError> {
        guards::check_one_yocto()?;
        validation::validate_metadata(&args.metadata)?;
        if let Some(royalty) = &args.royalty {
            validation::validate_royalty(royalty, self.platform_fee_bps)?;
        }

        let artist_id = args.artist_id.clone();
        let receiver_id = args.receiver_id.clone();

        let auth_type = match &auth {
            MintAuth::Direct => {
                let caller = env::predecessor_account_id();
                if caller != artist_id && !self.is_authorized_minter(&artist_id, &caller) {
                    return Err(PlatformError::Unauthorized(
                        "Caller is neither the artist nor an authorized minter".into(),
                    ));
                }
                "direct"
            }
            MintAuth::SignedPayload {
                public_key,
                nonce,
                signature,
            } => {
                self.verify_mint_authorization(&args, public_key, nonce.0, &signature.0)?;
                "signed_payload"
            }
        };

        let track_id = self.internal_mint(args)?;

        // Replay protection: the nonce is consumed exactly once, after the
        // mint it authorized cannot fail anymore.
        if let MintAuth::SignedPayload { nonce, .. } = &auth {
            resona_auth::nonce::record_nonce(MINT_NONCE_PREFIX, &artist_id, nonce.0);
        }

        events::emit_track_mint(&artist_id, &receiver_id, track_id, auth_type);
        Ok(track_id)
    }
}

impl Contract {
    fn verify_mint_authorization(
        &self,
        args: &MintArgs,
        public_key: &near_sdk::PublicKey,
        nonce: u64,
        signature: &[u8],
    ) -> Result<(), PlatformError> {
        let registered = self
            .artist_keys
            .get(&args.artist_id)
            .map(|keys| keys.contains(public_key))
            .unwrap_or(false);
        if !registered {
            return Err(PlatformError::Unauthorized(
                "Public key is not registered for this artist".into(),
            ));
        }

        resona_auth::nonce::assert_next_nonce(MINT_NONCE_PREFIX, &args.artist_id, nonce)
            .map_err(|_| PlatformError::stale_nonce())?;

        let metadata_json = serde_json::to_value(&args.metadata)
            .map_err(|_| PlatformError::InternalError("Failed to serialize metadata".into()))?;
        let royalty_json = args
            .royalty
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|_| PlatformError::InternalError("Failed to serialize royalty".into()))?;

        resona_auth::verify_mint_signature(&MintAuthorization {
            artist_id: &args.artist_id,
            recipient_id: &args.receiver_id,
            public_key,
            nonce,
            signature,
            metadata: &metadata_json,
            royalty: royalty_json.as_ref(),
            stream_price: args.stream_price.map(|p| p.0),
        })
        .map_err(|e| match e {
            resona_types::AuthError::SignatureInvalid => PlatformError::invalid_signature(),
            resona_types::AuthError::NonceStale => PlatformError::stale_nonce(),
            other => PlatformError::InvalidInput(other.to_string()),
        })
    }

    pub(crate) fn internal_mint(&mut self, args: MintArgs) -> Result<u64, PlatformError> {
        let track_id = self.next_track_id;
        self.next_track_id = track_id
            .checked_add(1)
            .ok_or_else(|| PlatformError::InternalError("Track ID counter overflow".into()))?;

        let receiver_id = args.receiver_id.clone();
        let track = Track {
            owner_id: receiver_id.clone(),
            artist_id: args.artist_id,
            metadata: args.metadata,
            royalty: args.royalty,
            stream_price: args.stream_price,
            minted_at: env::block_timestamp(),
        };

        self.tracks_by_id.insert(track_id, track);
        self.add_track_to_owner(&receiver_id, track_id);

        Ok(track_id)
    }
}
