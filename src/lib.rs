pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::mailer::SmtpNotifier;
pub use adapters::portal::PortalBrowser;
pub use config::AppConfig;
pub use core::{checkpoint::CheckpointFile, runner::Runner};
pub use domain::model::{Credentials, PostId, RunOutcome};
pub use domain::ports::{Notifier, PortalSession};
pub use utils::error::{NotifierError, Result};
