mod client;
mod types;

pub use client::UserDocStore;
pub use types::UserDocument;
