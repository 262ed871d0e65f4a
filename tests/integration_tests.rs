use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use spo_portal_notifier::{
    CheckpointFile, Credentials, Notifier, NotifierError, PortalSession, PostId, Result,
    RunOutcome, Runner,
};
use tempfile::TempDir;

struct ScriptedPortal {
    post_id: u64,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl PortalSession for ScriptedPortal {
    async fn login(&self, user: &str, _password: &str) -> Result<()> {
        // An empty portal user is what a missing env var degrades to; the
        // real page rejects it by never showing the post panel.
        if user.is_empty() {
            return Err(NotifierError::ElementNotFound {
                selector: "div.panel-collapse.collapse".into(),
            });
        }
        Ok(())
    }

    async fn latest_post_id(&self) -> Result<PostId> {
        Ok(PostId(self.post_id))
    }

    async fn close(&mut self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct CountingNotifier {
    sent: Arc<AtomicUsize>,
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn notify(&self, _email: &str, _password: &str) -> Result<()> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn credentials() -> Credentials {
    Credentials {
        notify_email: "user@example.com".into(),
        notify_password: "email-pw".into(),
        portal_user: "portal-user".into(),
        portal_password: "portal-pw".into(),
    }
}

async fn run_once(
    dir: &TempDir,
    post_id: u64,
    closes: &Arc<AtomicUsize>,
    sent: &Arc<AtomicUsize>,
) -> Result<RunOutcome> {
    let runner = Runner::new(
        ScriptedPortal {
            post_id,
            closes: Arc::clone(closes),
        },
        CountingNotifier {
            sent: Arc::clone(sent),
        },
        CheckpointFile::new(dir.path().join("latest_post.log")),
        credentials(),
    );
    runner.run().await
}

#[tokio::test]
async fn notifies_once_per_new_post_across_scheduled_runs() {
    let dir = TempDir::new().unwrap();
    let closes = Arc::new(AtomicUsize::new(0));
    let sent = Arc::new(AtomicUsize::new(0));

    // First ever run: post 5 is news.
    let outcome = run_once(&dir, 5, &closes, &sent).await.unwrap();
    assert_eq!(outcome, RunOutcome::Notified(PostId(5)));
    assert_eq!(sent.load(Ordering::SeqCst), 1);

    // Nothing changed on the portal: quiet.
    let outcome = run_once(&dir, 5, &closes, &sent).await.unwrap();
    assert!(matches!(outcome, RunOutcome::Skipped { .. }));
    assert_eq!(sent.load(Ordering::SeqCst), 1);

    // A newer post appears: exactly one more email.
    let outcome = run_once(&dir, 8, &closes, &sent).await.unwrap();
    assert_eq!(outcome, RunOutcome::Notified(PostId(8)));
    assert_eq!(sent.load(Ordering::SeqCst), 2);

    // Every run released its session.
    assert_eq!(closes.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn checkpoint_never_decreases() {
    let dir = TempDir::new().unwrap();
    let closes = Arc::new(AtomicUsize::new(0));
    let sent = Arc::new(AtomicUsize::new(0));

    let mut high_water = 0u64;
    for post_id in [3u64, 7, 2, 7, 10, 4] {
        run_once(&dir, post_id, &closes, &sent).await.unwrap();
        high_water = high_water.max(post_id);

        let on_disk = fs::read_to_string(dir.path().join("latest_post.log")).unwrap();
        assert_eq!(on_disk.parse::<u64>().unwrap(), high_water);
    }
}

#[tokio::test]
async fn failed_login_leaves_no_trace_but_releases_the_session() {
    let dir = TempDir::new().unwrap();
    let closes = Arc::new(AtomicUsize::new(0));
    let sent = Arc::new(AtomicUsize::new(0));

    let runner = Runner::new(
        ScriptedPortal {
            post_id: 5,
            closes: Arc::clone(&closes),
        },
        CountingNotifier {
            sent: Arc::clone(&sent),
        },
        CheckpointFile::new(dir.path().join("latest_post.log")),
        Credentials {
            portal_user: String::new(),
            ..credentials()
        },
    );

    let err = runner.run().await.unwrap_err();
    assert!(matches!(err, NotifierError::ElementNotFound { .. }));
    assert_eq!(sent.load(Ordering::SeqCst), 0);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!dir.path().join("latest_post.log").exists());
}
