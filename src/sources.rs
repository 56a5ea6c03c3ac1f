//! Source-fetch and cache collaborators
//!
//! The pipeline core takes an already-retrieved document as plain input;
//! these traits define how that document is obtained and where the
//! normalized record sequence is parked between requests. Staleness policy
//! belongs to the caller, not to this module.

use std::sync::RwLock;
use std::time::Duration;

use log::{debug, warn};

use crate::interfaces::SubscriptionError;
use crate::models::Proxy;
use crate::parser::parse_bank;

const FETCH_TIMEOUT_SECS: u64 = 15;

/// Retrieves a raw bank document.
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<String, SubscriptionError>;
}

/// Blocking HTTP fetcher for bank documents.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher, SubscriptionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(concat!("banksub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, SubscriptionError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Holds the serialized normalized record sequence between requests.
///
/// The payload is a JSON array in the bank dialect, so a cache read feeds
/// straight back into the bank parser's JSON branch.
pub trait BankCache {
    fn load(&self) -> Option<String>;
    fn store(&self, payload: &str);
}

/// Process-local cache.
#[derive(Default)]
pub struct MemoryCache {
    payload: RwLock<Option<String>>,
}

impl MemoryCache {
    pub fn new() -> MemoryCache {
        MemoryCache::default()
    }
}

impl BankCache for MemoryCache {
    fn load(&self) -> Option<String> {
        self.payload.read().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, payload: &str) {
        if let Ok(mut guard) = self.payload.write() {
            *guard = Some(payload.to_string());
        }
    }
}

/// Load records from the source URL, falling back to the cache.
///
/// A successful fetch repopulates the cache with the normalized sequence.
/// `NoData` is returned only when every avenue is exhausted; an empty bank
/// is still data.
pub fn load_proxy_list(
    fetcher: Option<&dyn SourceFetcher>,
    url: Option<&str>,
    cache: Option<&dyn BankCache>,
) -> Result<Vec<Proxy>, SubscriptionError> {
    if let (Some(fetcher), Some(url)) = (fetcher, url) {
        match fetcher.fetch(url) {
            Ok(document) => {
                let nodes = parse_bank(&document);
                if let Some(cache) = cache {
                    match serde_json::to_string(&nodes) {
                        Ok(payload) => cache.store(&payload),
                        Err(err) => warn!("failed to serialize records for cache: {}", err),
                    }
                }
                return Ok(nodes);
            }
            Err(err) => warn!("bank fetch failed, trying cache: {}", err),
        }
    }

    if let Some(cache) = cache {
        if let Some(payload) = cache.load() {
            debug!("serving proxy list from cache");
            return Ok(parse_bank(&payload));
        }
    }

    Err(SubscriptionError::NoData)
}
