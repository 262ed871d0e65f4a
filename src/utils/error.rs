use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    /// Browser process or CDP failure (launch, navigation, tab handling).
    #[error("browser session error: {0}")]
    Session(anyhow::Error),

    /// The portal page does not have the expected shape. Bad portal
    /// credentials also end up here: the post panel never appears.
    #[error("portal element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Checkpoint file contents are not a decimal post ID.
    #[error("invalid checkpoint contents: {0}")]
    Parse(#[from] std::num::ParseIntError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SMTP connect, authentication, or delivery failure.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("email message error: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("email address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}

// headless_chrome surfaces anyhow errors; thiserror cannot derive a source
// from a non-std error type, so the conversion is spelled out.
impl From<anyhow::Error> for NotifierError {
    fn from(err: anyhow::Error) -> Self {
        NotifierError::Session(err)
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
