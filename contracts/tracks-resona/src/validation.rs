use crate::*;

pub(crate) fn validate_metadata(metadata: &TrackMetadata) -> Result<(), PlatformError> {
    if metadata.title.is_empty() {
        return Err(PlatformError::InvalidInput("Title cannot be empty".into()));
    }
    if metadata.title.len() > MAX_TITLE_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "Title exceeds max length of {} bytes",
            MAX_TITLE_LEN
        )));
    }
    if metadata.media.is_empty() {
        return Err(PlatformError::InvalidInput("Media cannot be empty".into()));
    }
    if metadata.media.len() > MAX_URI_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "Media exceeds max length of {} bytes",
            MAX_URI_LEN
        )));
    }
    if metadata.reference.is_empty() {
        return Err(PlatformError::InvalidInput(
            "Reference cannot be empty".into(),
        ));
    }
    if metadata.reference.len() > MAX_URI_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "Reference exceeds max length of {} bytes",
            MAX_URI_LEN
        )));
    }

    let metadata_json = near_sdk::serde_json::to_string(metadata)
        .map_err(|_| PlatformError::InternalError("Failed to serialize metadata".into()))?;
    if metadata_json.len() > MAX_METADATA_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "Metadata exceeds max length of {} bytes (got {} bytes)",
            MAX_METADATA_LEN,
            metadata_json.len()
        )));
    }
    Ok(())
}

// Fee invariant: a track whose royalty passes here can always be distributed
// at the fee configured when it was minted.
pub(crate) fn validate_royalty(
    royalty: &RoyaltyArgs,
    platform_fee_bps: u16,
) -> Result<(), PlatformError> {
    if royalty.bps == 0 {
        return Err(PlatformError::InvalidInput(
            "Royalty share must be > 0 bps".into(),
        ));
    }
    let total = royalty.bps as u32 + platform_fee_bps as u32;
    if total > BASIS_POINTS as u32 {
        return Err(PlatformError::fee_overflow(total));
    }
    Ok(())
}
