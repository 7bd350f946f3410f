use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskProfileError {
    /// No signature has been simulated for this asset yet.
    NotFound { asset_address: String },
}

impl fmt::Display for RiskProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskProfileError::NotFound { asset_address } => {
                write!(f, "no risk signature found for {asset_address}")
            }
        }
    }
}

impl std::error::Error for RiskProfileError {}
