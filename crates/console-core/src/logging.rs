//! Log output for native builds
//!
//! Library code only emits `tracing` events; binaries and tests call
//! [`init`] to print them.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, or `default_filter` when unset
///
/// Does nothing if a global subscriber is already installed.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init("console_router=trace");
        init("debug");
        tracing::debug!("logging initialised");
    }
}
