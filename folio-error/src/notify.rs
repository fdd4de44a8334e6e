use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("mail build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("notifier is closed")]
    Closed,
}
