use thiserror::Error;

/// Errors raised at the binary boundary. Validation itself never fails;
/// malformed candidates are ordinary classification results.
#[derive(Debug, Error)]
pub enum ShareToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
    #[error("No ISIN candidates supplied")]
    NoCandidates,
}
