pub mod checkpoint;
pub mod runner;

pub use crate::domain::model::{Credentials, PostId, RunOutcome};
pub use crate::domain::ports::{Notifier, PortalSession};
pub use crate::utils::error::Result;
