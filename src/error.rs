use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettleError {
    #[error("Action error: {0}")]
    ActionError(String),

    #[error("Hook error: {0}")]
    HookError(String),
}

pub type SettleResult<T> = std::result::Result<T, SettleError>;
