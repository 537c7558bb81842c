use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const LOG_FILE: &str = "kubeview.log";

static LOG_GUARD: OnceLock<io::Result<WorkerGuard>> = OnceLock::new();

fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    let file = File::create(log_dir.join(LOG_FILE))?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .with_filter(tracing_subscriber::filter::LevelFilter::from_level(Level::INFO));

    tracing_subscriber::registry().with(file_layer).try_init().ok();

    Ok(guard)
}

/// Install the file subscriber. Only the first call does any work; later
/// calls return its outcome.
pub fn setup_logger(log_dir: impl AsRef<Path>) -> io::Result<()> {
    match LOG_GUARD.get_or_init(|| init(log_dir.as_ref())) {
        Ok(_) => Ok(()),
        Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logger_concurrent_callers() {
        let dir = std::env::temp_dir().join(format!("kubeview-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dir = dir.clone();
                std::thread::spawn(move || setup_logger(&dir))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert!(dir.join(LOG_FILE).exists());
        assert!(LOG_GUARD.get().is_some_and(|guard| guard.is_ok()));

        // Subsequent calls never touch the filesystem again.
        setup_logger(dir.join("missing")).unwrap();

        std::fs::remove_dir_all(&dir).ok();
    }
}
