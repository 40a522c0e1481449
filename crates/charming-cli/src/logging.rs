//! Tracing setup for the CLI.
//!
//! The subscriber is only installed when `CHARMING_LOG` or `RUST_LOG` is set.
//! Output goes to stderr so it never mixes with command output.
//!
//! ```bash
//! CHARMING_LOG=debug charming boundary app.py --at 3:14
//! CHARMING_LOG=charming_lib::scan=trace charming boundary -s 'f(x).' --at 0:5
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `CHARMING_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("CHARMING_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init_tracing() {
    let has_charming_log = std::env::var("CHARMING_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_charming_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
