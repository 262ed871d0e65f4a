use crate::core::checkpoint::CheckpointFile;
use crate::core::{Credentials, Notifier, PortalSession, Result, RunOutcome};

/// Drives one poll of the portal: login, fetch the latest post ID, compare
/// with the checkpoint, and notify on an increase. Owns the session and
/// releases it exactly once, whatever happens in between.
pub struct Runner<S: PortalSession, N: Notifier> {
    session: S,
    notifier: N,
    checkpoint: CheckpointFile,
    credentials: Credentials,
}

impl<S: PortalSession, N: Notifier> Runner<S, N> {
    pub fn new(
        session: S,
        notifier: N,
        checkpoint: CheckpointFile,
        credentials: Credentials,
    ) -> Self {
        Self {
            session,
            notifier,
            checkpoint,
            credentials,
        }
    }

    /// Run the whole sequence. The session is closed on every path; a close
    /// failure is logged, not propagated over the run's own result.
    pub async fn run(mut self) -> Result<RunOutcome> {
        let outcome = self.check_portal().await;

        if let Err(e) = self.session.close().await {
            tracing::warn!("failed to close browser session: {e}");
        }

        outcome
    }

    async fn check_portal(&self) -> Result<RunOutcome> {
        self.session
            .login(
                &self.credentials.portal_user,
                &self.credentials.portal_password,
            )
            .await?;
        tracing::info!("signed in");

        let current = self.session.latest_post_id().await?;
        tracing::info!("current post id: {current}");

        let stored = self.checkpoint.read()?;
        tracing::info!("previous post id: {stored}");

        if current > stored {
            // Checkpoint first: a failed send must not be retried next run.
            self.checkpoint.write(current)?;
            self.notifier
                .notify(
                    &self.credentials.notify_email,
                    &self.credentials.notify_password,
                )
                .await?;
            tracing::info!("user notified");
            Ok(RunOutcome::Notified(current))
        } else {
            Ok(RunOutcome::Skipped { current, stored })
        }
    }
}
