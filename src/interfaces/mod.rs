//! Pipeline entry points and their error surface

pub mod subscription;

use thiserror::Error;

pub use subscription::{list_page, transcode};

/// Failures the pipeline can surface to callers.
///
/// Bad input data is never an error: corrupt descriptor units are dropped
/// inside the parsers. These variants cover missing collaborator data and
/// caller mistakes only.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    /// Neither a source document nor a cached payload was available. This is
    /// distinct from an empty result after filtering.
    #[error("no proxy data available from source or cache")]
    NoData,
    #[error("bank fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("unknown target format '{0}'")]
    UnknownTarget(String),
}
