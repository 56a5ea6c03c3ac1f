//! Subscription output generation

pub mod formats;

use crate::models::{Proxy, ProxyType, SubscriptionOptions, PLACEHOLDER_COUNTRY};

/// Output format for a subscription response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTarget {
    /// One human-readable line per record.
    Raw,
    /// The structured `proxies:` configuration document.
    Clash,
    /// Scheme URIs of a single protocol with uniform credentials.
    Uri(ProxyType),
}

impl SubscriptionTarget {
    pub fn from_str(name: &str) -> Option<SubscriptionTarget> {
        match name.to_ascii_lowercase().as_str() {
            "raw" => Some(SubscriptionTarget::Raw),
            "clash" => Some(SubscriptionTarget::Clash),
            "vless" => Some(SubscriptionTarget::Uri(ProxyType::Vless)),
            "trojan" => Some(SubscriptionTarget::Uri(ProxyType::Trojan)),
            "ss" => Some(SubscriptionTarget::Uri(ProxyType::Shadowsocks)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTarget::Raw => "raw",
            SubscriptionTarget::Clash => "clash",
            SubscriptionTarget::Uri(proto) => proto.as_str(),
        }
    }
}

/// Serialize records into the requested target format.
///
/// Individual records never fail serialization; unrepresentable ones are
/// dropped from the output.
pub fn generate(
    nodes: &[Proxy],
    target: SubscriptionTarget,
    options: &SubscriptionOptions,
) -> String {
    match target {
        SubscriptionTarget::Raw => formats::raw::proxy_to_raw(nodes),
        SubscriptionTarget::Clash => formats::clash::proxy_to_clash(nodes),
        SubscriptionTarget::Uri(protocol) => {
            formats::uri::proxy_to_uri_list(nodes, protocol, &options.credentials)
        }
    }
}

/// Display name synthesized for generated documents:
/// `<cc>-<protocol>-<host>`, with a placeholder country when absent.
pub(crate) fn display_name(node: &Proxy) -> String {
    format!(
        "{}-{}-{}",
        node.country_code.as_deref().unwrap_or(PLACEHOLDER_COUNTRY),
        node.proxy_type().as_str(),
        node.host
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_names_round_trip() {
        for name in ["raw", "clash", "vless", "trojan", "ss"] {
            let target = SubscriptionTarget::from_str(name).unwrap();
            assert_eq!(target.as_str(), name);
        }
        assert_eq!(SubscriptionTarget::from_str("CLASH"), Some(SubscriptionTarget::Clash));
        assert_eq!(SubscriptionTarget::from_str("surge"), None);
    }

    #[test]
    fn test_display_name_placeholder() {
        let node = Proxy::trojan("cdn.example", 443, None);
        assert_eq!(display_name(&node), "XX-trojan-cdn.example");

        let mut node = Proxy::vless("zoom.us", 443, None);
        node.country_code = Some("ID".to_string());
        assert_eq!(display_name(&node), "ID-vless-zoom.us");
    }
}
