//! Error types for the correction pipeline.

/// Errors reported by correction pipeline stages.
///
/// Every variant is a precondition failure detected at stage entry; the
/// pipeline is a pure function over in-memory buffers and has no transient
/// failure modes, so errors are propagated immediately with no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionError {
    /// Malformed channel count or dimensions
    InvalidBuffer(String),
    /// Non-positive clip limit or degenerate tile grid
    InvalidConfig(String),
    /// Gamma or alpha outside its valid domain
    InvalidParameter(String),
    /// Stage-to-stage buffer size mismatch
    DimensionMismatch(String),
}

impl std::fmt::Display for CorrectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectionError::InvalidBuffer(e) => write!(f, "Invalid buffer: {}", e),
            CorrectionError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            CorrectionError::InvalidParameter(e) => write!(f, "Invalid parameter: {}", e),
            CorrectionError::DimensionMismatch(e) => write!(f, "Dimension mismatch: {}", e),
        }
    }
}

impl std::error::Error for CorrectionError {}
