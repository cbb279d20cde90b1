//! Signing message construction for the Resona mint-authorization scheme.

use serde_json::{Value, json};

use crate::canonicalize_json_value;

/// Build the mint-authorization payload JSON with canonical key order.
/// Requires `serde_json` `preserve_order` feature for deterministic field order.
/// `nonce` and `stream_price` are serialized as strings so JavaScript signers
/// never hit 53-bit integer truncation.
pub fn build_mint_payload(
    artist: &str,
    recipient: &str,
    nonce: u64,
    metadata: &Value,
    royalty: Option<&Value>,
    stream_price: Option<&str>,
) -> Value {
    json!({
        "artist": artist,
        "recipient": recipient,
        "nonce": nonce.to_string(),
        "metadata": canonicalize_json_value(metadata),
        "royalty": royalty.map(canonicalize_json_value),
        "stream_price": stream_price,
    })
}

/// Format: `{domain_prefix}:{contract_id}\0{payload_json}`.
/// Binding the deployed contract id into the message prevents a signature
/// authorized for one deployment from replaying against another.
pub fn build_signing_message(domain_prefix: &str, contract_id: &str, payload: &Value) -> Vec<u8> {
    let payload_bytes =
        serde_json::to_vec(payload).expect("JSON serialization cannot fail for valid Value");
    let mut message = format!("{domain_prefix}:{contract_id}").into_bytes();
    message.reserve_exact(1 + payload_bytes.len());
    message.push(0);
    message.extend_from_slice(&payload_bytes);
    message
}
