//! Error type for the ev-cli binary.

/// Wraps errors from the backend crates and the I/O and serialization
/// layers into one interface for the command handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Property error: {0}")]
    Property(#[from] ev_properties::PropertyError),

    #[error("Train error: {0}")]
    Train(#[from] ev_train::TrainError),

    #[error("Crystallization error: {0}")]
    Crystal(#[from] ev_crystal::CrystalError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] ev_analysis::AnalysisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario file error: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type for ev-cli operations.
pub type AppResult<T> = Result<T, AppError>;
