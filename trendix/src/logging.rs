use tracing::Level;

/// Installs the global fmt subscriber at INFO. Safe to call twice; the
/// second call is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .try_init();
}
