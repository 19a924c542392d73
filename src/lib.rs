//! Headless core of a Codeforces companion app.
//!
//! Typed clients for the Codeforces REST API, the hosted identity service,
//! and the per-user document store, plus the pure logic the screens render:
//! problem filtering, difficulty-band recommendations, the recent-contest
//! window, and an immutable snapshot/update state model. A UI shell embeds
//! this crate and owns the current [`state::Snapshot`].

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod contests;
pub mod error;
pub mod filter;
pub mod recommend;
pub mod state;
pub mod store;

pub use api::{Contest, Problem, UserInfo};
pub use commands::Companion;
pub use config::AppConfig;
pub use error::CompanionError;
pub use filter::{filter_problems, FilterParams};
pub use recommend::{recommend, recommend_with, Recommendations};
pub use state::{apply, Event, Snapshot};

/// Initialise tracing for a host application. Call once at startup;
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
