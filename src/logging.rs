use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path.
pub const LOG_ENV_VAR: &str = "SENSORFLOW_LOG";

/// Initialize tracing with file output.
///
/// Logging is off unless a path is given (`--log-file`) or `SENSORFLOW_LOG`
/// is set: the TUI owns stdout/stderr. The actual file is
/// `{path}.{timestamp}.{pid}` so concurrent instances don't clobber each
/// other. Level filtering follows `RUST_LOG`, default `info`.
pub fn init_tracing(log_file: Option<&Path>) {
    let log_path = match log_file {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(path) if !path.is_empty() => path,
            _ => return,
        },
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path("/tmp/sensorflow.log");
        let pid = std::process::id().to_string();
        assert!(path.starts_with("/tmp/sensorflow.log."));
        assert!(path.ends_with(&format!(".{}", pid)));
    }
}
