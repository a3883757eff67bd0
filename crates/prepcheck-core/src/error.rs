use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown disaster type: {0}")]
    UnknownDisaster(String),

    #[error("checklist response is empty")]
    EmptyChecklist,

    #[error("household size must be at least 1, got {0}")]
    InvalidHouseholdSize(u32),
}
