pub mod config;
pub mod data;
pub mod store;

pub use config::ClientConfig;
pub use store::{Store, PayloadError, avatar::FALLBACK_AVATAR_URL};
