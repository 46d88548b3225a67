use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stocks_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] stocks_core::FetchError),

    #[error(transparent)]
    Store(#[from] stocks_store::StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Store(_) => 3,
            Self::Fetch(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
