//! Outbound seam for accepted addresses.

/// Failure surface of the submission pipeline. Nothing constructs these
/// yet; they are the contract the mint backend will report through.
#[derive(Debug, Clone, thiserror::Error)]
#[allow(dead_code)]
pub enum SubmitError {
    #[error("generation backend rejected the address: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Hand a validated address to the generation pipeline.
///
/// TODO: POST the address to the agent backend's mint endpoint once it
/// is deployed; until then the accepted address is only recorded on the
/// console.
pub fn submit_address(address: &str) -> Result<(), SubmitError> {
    web_sys::console::log_1(&format!("Valid Solana address submitted: {address}").into());
    Ok(())
}
