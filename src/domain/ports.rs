use crate::domain::model::PostId;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A logged-in view of the placement portal. Implemented against the real
/// headless browser in `adapters::portal` and by fakes in tests.
#[async_trait]
pub trait PortalSession: Send + Sync {
    /// Submit the login form with the portal credentials.
    async fn login(&self, user: &str, password: &str) -> Result<()>;

    /// Read the numeric ID of the most recent announcement post.
    async fn latest_post_id(&self) -> Result<PostId>;

    /// Release the underlying session. Called exactly once by the
    /// orchestrator on every exit path; must be idempotent.
    async fn close(&mut self) -> Result<()>;
}

/// Sends the fixed "new post" notification email.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &str, password: &str) -> Result<()>;
}
