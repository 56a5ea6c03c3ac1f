//! Per-protocol URI re-encoding
//!
//! Re-emits records as scheme URIs of one protocol, substituting
//! caller-supplied default credentials where a record lacks its own. This
//! mode presents a uniform credential to all listed endpoints; it is not a
//! round-trip of the original credential.

use crate::generator::display_name;
use crate::models::{DefaultCredentials, Proxy, ProxyCredential, ProxyType};
use crate::utils::url::url_encode;

/// Records of other protocols, and records left without a usable credential
/// even after defaults, are dropped from the output.
pub fn proxy_to_uri_list(
    nodes: &[Proxy],
    protocol: ProxyType,
    defaults: &DefaultCredentials,
) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        if node.proxy_type() != protocol {
            continue;
        }
        if let Some(uri) = proxy_to_uri(node, defaults) {
            lines.push(uri);
        }
    }
    lines.join("\n")
}

/// Convert one record to its scheme URI.
pub fn proxy_to_uri(node: &Proxy, defaults: &DefaultCredentials) -> Option<String> {
    let label = url_encode(&display_name(node));

    match &node.credential {
        ProxyCredential::Vless { id } => {
            let id = id.as_deref().or(defaults.vless_id.as_deref())?;

            let mut params = Vec::new();
            if node.tls {
                params.push("security=tls".to_string());
            }
            params.push(format!("sni={}", node.sni.as_deref().unwrap_or(&node.host)));

            Some(format!(
                "vless://{}@{}:{}?{}#{}",
                id,
                node.host,
                node.port,
                params.join("&"),
                label
            ))
        }
        ProxyCredential::Trojan { password } => {
            let password = password.as_deref().or(defaults.trojan_password.as_deref())?;
            Some(format!(
                "trojan://{}@{}:{}?sni={}#{}",
                password,
                node.host,
                node.port,
                node.sni.as_deref().unwrap_or(&node.host),
                label
            ))
        }
        ProxyCredential::Shadowsocks { method, password } => {
            let method = method.as_deref().or(defaults.ss_method.as_deref())?;
            let password = password.as_deref().or(defaults.ss_password.as_deref())?;
            Some(format!(
                "ss://{}:{}@{}:{}#{}",
                method, password, node.host, node.port, label
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::explodes::{explode_ss, explode_trojan, explode_vless};

    fn defaults() -> DefaultCredentials {
        DefaultCredentials {
            vless_id: Some("11111111-1111-4111-8111-111111111111".to_string()),
            trojan_password: Some("shared-secret".to_string()),
            ss_method: Some("aes-256-gcm".to_string()),
            ss_password: Some("shared-pw".to_string()),
        }
    }

    #[test]
    fn test_uri_list_keeps_only_the_requested_protocol() {
        let nodes = vec![
            Proxy::vless("a.example", 443, Some("own-id".to_string())),
            Proxy::trojan("b.example", 443, Some("pw".to_string())),
        ];
        let output = proxy_to_uri_list(&nodes, ProxyType::Vless, &defaults());
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("vless://own-id@a.example:443"));
    }

    #[test]
    fn test_uri_substitutes_default_credentials() {
        // A bare endpoint from a delimited bank line has no identifier.
        let node = Proxy::vless("203.0.113.7", 2053, None);
        let uri = proxy_to_uri(&node, &defaults()).unwrap();
        assert!(uri.starts_with("vless://11111111-1111-4111-8111-111111111111@203.0.113.7:2053"));
    }

    #[test]
    fn test_uri_own_credential_wins_over_default() {
        let node = Proxy::trojan("cdn.example", 443, Some("own".to_string()));
        let uri = proxy_to_uri(&node, &defaults()).unwrap();
        assert!(uri.starts_with("trojan://own@cdn.example:443"));
    }

    #[test]
    fn test_uri_drops_records_without_any_credential() {
        let node = Proxy::vless("203.0.113.7", 2053, None);
        assert_eq!(proxy_to_uri(&node, &DefaultCredentials::default()), None);

        let half = Proxy::shadowsocks("h.example", 80, Some("aes-256-gcm".to_string()), None);
        assert_eq!(proxy_to_uri(&half, &DefaultCredentials::default()), None);
    }

    #[test]
    fn test_uri_output_round_trips_through_own_parsers() {
        let mut vless = Proxy::vless("zoom.us", 443, Some("8b1e".to_string()));
        vless.tls = true;
        vless.sni = Some("alt.example".to_string());
        let uri = proxy_to_uri(&vless, &defaults()).unwrap();
        let back = explode_vless(&uri).unwrap();
        assert_eq!(back.host, vless.host);
        assert_eq!(back.port, vless.port);
        assert_eq!(back.credential, vless.credential);
        assert!(back.tls);
        assert_eq!(back.sni.as_deref(), Some("alt.example"));

        let trojan = Proxy::trojan("cdn.example", 443, Some("pw".to_string()));
        let back = explode_trojan(&proxy_to_uri(&trojan, &defaults()).unwrap()).unwrap();
        assert_eq!(back.credential, trojan.credential);

        let ss = Proxy::shadowsocks(
            "example.com",
            8388,
            Some("aes-256-gcm".to_string()),
            Some("pw".to_string()),
        );
        let back = explode_ss(&proxy_to_uri(&ss, &defaults()).unwrap()).unwrap();
        assert_eq!(back.credential, ss.credential);
        assert_eq!(back.port, 8388);
    }

    #[test]
    fn test_uri_list_empty_input() {
        assert_eq!(proxy_to_uri_list(&[], ProxyType::Vless, &defaults()), "");
    }
}
