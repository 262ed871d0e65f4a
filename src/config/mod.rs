use std::env;
use std::path::{Path, PathBuf};

use crate::domain::model::Credentials;

const POST_ID_FILENAME: &str = "latest_post.log";
const LOGGING_FILENAME: &str = "spo_portal_notification.log";

/// Everything a run needs, built once at startup and passed by parameter.
/// Credentials are taken as-is from the environment; missing variables
/// become empty strings and fail later as authentication errors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub checkpoint_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // .env is optional; real deployments set the variables directly.
        dotenvy::dotenv().ok();

        let base = base_dir();
        Self {
            credentials: Credentials {
                notify_email: var_with_fallback("EMAIL_ID", "MY_LOGIN_EMAIL_ID"),
                notify_password: var_with_fallback("EMAIL_PWD", "MY_PASSWORD"),
                portal_user: env::var("PORTAL_USR").unwrap_or_default(),
                portal_password: env::var("PORTAL_PWD").unwrap_or_default(),
            },
            checkpoint_path: base.join(POST_ID_FILENAME),
            log_path: base.join(LOGGING_FILENAME),
        }
    }
}

/// Checkpoint and log files live next to the binary; fall back to the
/// working directory if the exe path is opaque.
fn base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn var_with_fallback(primary: &str, fallback: &str) -> String {
    env::var(primary)
        .or_else(|_| env::var(fallback))
        .unwrap_or_default()
}
