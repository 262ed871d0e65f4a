use spo_portal_notifier::utils::logger;
use spo_portal_notifier::{
    AppConfig, CheckpointFile, PortalBrowser, RunOutcome, Runner, SmtpNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    logger::init(&config.log_path)?;

    tracing::info!("starting placement portal check");

    // Errors past this point are logged and swallowed: the next scheduled
    // run retries the whole sequence, so the process always exits 0.
    let session = match PortalBrowser::launch() {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("could not start browser session: {e}");
            return Ok(());
        }
    };

    let runner = Runner::new(
        session,
        SmtpNotifier::new(),
        CheckpointFile::new(&config.checkpoint_path),
        config.credentials,
    );

    match runner.run().await {
        Ok(RunOutcome::Notified(id)) => tracing::info!("user notified of post {id}"),
        Ok(RunOutcome::Skipped { current, stored }) => {
            tracing::info!("no new posts (current {current}, previous {stored})");
        }
        Err(e) => tracing::error!("an error occurred: {e}"),
    }

    Ok(())
}
