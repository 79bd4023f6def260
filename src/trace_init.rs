#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background log writer alive; buffered lines are flushed on drop.
#[must_use = "dropping the guard stops the file writer"]
#[derive(Debug, Default)]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber: debug-level JSON lines into `log_dir` when
/// given, info-level compact stderr output otherwise. `RUST_LOG` overrides both.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    let mut guard = TraceGuard::default();
    INIT.call_once(|| {
        let filter = |default: &str| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
        };

        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "respell-trace.jsonl");
                let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
                guard._worker = Some(worker);

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter("arpa_respell=debug"))
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(filter("arpa_respell=info"))
                    .init();
            }
        }
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) -> TraceGuard {
    TraceGuard::default()
}
