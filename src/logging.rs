use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// Install the console's tracing subscriber: daily-rolling file output,
/// non-blocking writer, no ANSI. Call once from the app shell and hold the
/// returned guard for the process lifetime so buffered lines get flushed.
pub fn init(log_dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    guard
}
