pub mod filter;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod sources;
pub mod utils;

// Re-export the main pipeline types for easier access
pub use filter::FilterCriteria;
pub use generator::SubscriptionTarget;
pub use interfaces::{list_page, transcode, SubscriptionError};
pub use models::{Proxy, ProxyCredential, ProxyType, SubscriptionOptions};
pub use parser::parse_bank;
