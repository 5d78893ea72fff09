use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["utcepoch", "utcepoch_calendar"];

/// Installs the stderr subscriber for the converter.
///
/// Without `-v` only warnings and conversion failures are shown. Each `-v`
/// lowers the level for our own targets one step, from info through debug
/// to trace. A valid `RUST_LOG` replaces this filter entirely. Converted
/// values go to stdout, so logs never mix with them.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
