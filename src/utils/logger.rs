use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize logging: a compact stderr layer plus an append-only file layer
/// at `log_path` with `<timestamp> <message>` lines.
pub fn init(log_path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spo_portal_notifier=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_owned())),
        )
        .init();

    Ok(())
}
