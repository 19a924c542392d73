mod client;
mod session;

pub use client::{AuthClient, AuthSession};
pub use session::{SessionStore, StoredSession};
