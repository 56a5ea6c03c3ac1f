//! Proxy record definitions
//!
//! Contains the canonical record every pipeline stage exchanges. Records are
//! produced by the parsers, never mutated afterwards; filtering and
//! serialization only select or project.

use serde::{Deserialize, Serialize};

/// Country code emitted when a record carries none.
pub const PLACEHOLDER_COUNTRY: &str = "XX";

/// Represents the protocol of a proxy record.
/// This is the canonical enum used for protocol identification across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Vless,
    Trojan,
    Shadowsocks,
}

impl ProxyType {
    /// The wire-format tag for this protocol, as used in bank JSON entries,
    /// scheme prefixes and generated documents.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Vless => "vless",
            ProxyType::Trojan => "trojan",
            ProxyType::Shadowsocks => "ss",
        }
    }

    /// Parse a protocol tag. Unrecognized tags are rejected, not stored.
    pub fn from_str(name: &str) -> Option<ProxyType> {
        match name.to_ascii_lowercase().as_str() {
            "vless" => Some(ProxyType::Vless),
            "trojan" => Some(ProxyType::Trojan),
            "ss" | "shadowsocks" => Some(ProxyType::Shadowsocks),
            _ => None,
        }
    }
}

/// Per-protocol credential payload.
///
/// Each variant carries only the fields its protocol knows about. Credentials
/// may be absent: some bank sources list bare endpoints, and the uri
/// generator substitutes caller-supplied defaults for those.
///
/// The serde tagging matches the bank JSON dialect (`"type": "vless"` etc.),
/// so a serialized record sequence is itself a valid bank document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProxyCredential {
    Vless {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    Trojan {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
    #[serde(rename = "ss")]
    Shadowsocks {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
}

/// A canonical proxy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proxy {
    #[serde(flatten)]
    pub credential: ProxyCredential,
    pub host: String,
    pub port: u16,
    /// Two-letter code, upper-cased by the parsing stage. An empty code never
    /// survives normalization, so present always means non-empty.
    #[serde(rename = "cc", default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub tls: bool,
    /// Server name indication. Left empty by the parsers; serializers fall
    /// back to `host` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    /// Free-text annotation from bank sources that embed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Proxy {
    pub fn vless(host: impl Into<String>, port: u16, id: Option<String>) -> Proxy {
        Proxy {
            credential: ProxyCredential::Vless { id },
            host: host.into(),
            port,
            country_code: None,
            tls: false,
            sni: None,
            provider: None,
        }
    }

    /// Trojan endpoints are always TLS.
    pub fn trojan(host: impl Into<String>, port: u16, password: Option<String>) -> Proxy {
        Proxy {
            credential: ProxyCredential::Trojan { password },
            host: host.into(),
            port,
            country_code: None,
            tls: true,
            sni: None,
            provider: None,
        }
    }

    pub fn shadowsocks(
        host: impl Into<String>,
        port: u16,
        method: Option<String>,
        password: Option<String>,
    ) -> Proxy {
        Proxy {
            credential: ProxyCredential::Shadowsocks { method, password },
            host: host.into(),
            port,
            country_code: None,
            tls: false,
            sni: None,
            provider: None,
        }
    }

    pub fn proxy_type(&self) -> ProxyType {
        match self.credential {
            ProxyCredential::Vless { .. } => ProxyType::Vless,
            ProxyCredential::Trojan { .. } => ProxyType::Trojan,
            ProxyCredential::Shadowsocks { .. } => ProxyType::Shadowsocks,
        }
    }
}
