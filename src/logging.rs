use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. For hosts that do not bring their own;
/// embedding orchestrators with a subscriber already set should skip this.
pub fn init() {
    init_with_filter("porter=info");
}

/// Same as [`init`] but with an explicit fallback filter directive when
/// `RUST_LOG` is unset.
pub fn init_with_filter(fallback: &str) {
    let fmt_layer = fmt::layer().json();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
