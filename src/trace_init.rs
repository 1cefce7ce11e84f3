//! File-backed tracing for hosts that load the engine through the C ABI.
//!
//! With the `trace` feature, spans from `roman_core` are written as JSON lines
//! to `roman-trace.jsonl` in the given directory. `RUST_LOG` overrides the
//! default `roman_core=debug` filter. Without the feature this is a no-op.

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;
    use std::sync::OnceLock;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "roman-trace.jsonl";
    const DEFAULT_FILTER: &str = "roman_core=debug";

    // Held for the process lifetime so buffered lines are flushed by the worker.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    pub fn init_tracing(log_dir: &Path) {
        GUARD.get_or_init(|| {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, LOG_FILE));
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

            // A host may already have installed a subscriber; keep theirs.
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            guard
        });
    }
}

#[cfg(feature = "trace")]
pub use enabled::init_tracing;

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
