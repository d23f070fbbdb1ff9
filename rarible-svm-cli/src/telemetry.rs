use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Log to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `verbose`.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let stderr_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter);

        // Keeps any subscriber already installed.
        let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
    });
}
