//! Structured `proxies:` document output
//!
//! Line-oriented: one flow mapping per record under the fixed top-level
//! `proxies` key. Flow mappings are emitted as JSON, which YAML consumers
//! read natively and which this crate's own structured parser accepts back.

use serde_json::{json, Map, Value};

use crate::generator::display_name;
use crate::models::{Proxy, ProxyCredential};

/// Render records as a structured proxy-list document.
///
/// An empty input produces the header-only document.
pub fn proxy_to_clash(nodes: &[Proxy]) -> String {
    let mut out = String::from("proxies:\n");
    for node in nodes {
        out.push_str("  - ");
        out.push_str(&clash_mapping(node).to_string());
        out.push('\n');
    }
    out
}

/// The per-record mapping, carrying the fields that protocol's client
/// expects. Missing credentials are omitted, never emitted as null.
fn clash_mapping(node: &Proxy) -> Value {
    let mut map = Map::new();
    map.insert("name".to_string(), json!(display_name(node)));
    map.insert("server".to_string(), json!(node.host));
    map.insert("port".to_string(), json!(node.port));

    match &node.credential {
        ProxyCredential::Vless { id } => {
            map.insert("type".to_string(), json!("vless"));
            if let Some(id) = id {
                map.insert("uuid".to_string(), json!(id));
            }
            map.insert("tls".to_string(), json!(node.tls));
            map.insert(
                "servername".to_string(),
                json!(node.sni.as_deref().unwrap_or(&node.host)),
            );
        }
        ProxyCredential::Trojan { password } => {
            map.insert("type".to_string(), json!("trojan"));
            if let Some(password) = password {
                map.insert("password".to_string(), json!(password));
            }
            map.insert(
                "sni".to_string(),
                json!(node.sni.as_deref().unwrap_or(&node.host)),
            );
        }
        ProxyCredential::Shadowsocks { method, password } => {
            map.insert("type".to_string(), json!("ss"));
            if let Some(method) = method {
                map.insert("cipher".to_string(), json!(method));
            }
            if let Some(password) = password {
                map.insert("password".to_string(), json!(password));
            }
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::explodes::explode_clash;

    #[test]
    fn test_proxy_to_clash_shape() {
        let mut vless = Proxy::vless("zoom.us", 443, Some("8b1e".to_string()));
        vless.country_code = Some("ID".to_string());
        vless.tls = true;

        let output = proxy_to_clash(&[vless]);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("proxies:"));
        let line = lines.next().unwrap();
        assert!(line.starts_with("  - {"));
        assert!(line.contains("\"name\":\"ID-vless-zoom.us\""));
        assert!(line.contains("\"uuid\":\"8b1e\""));
        // SNI falls back to host at serialization time.
        assert!(line.contains("\"servername\":\"zoom.us\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_proxy_to_clash_empty_is_header_only() {
        assert_eq!(proxy_to_clash(&[]), "proxies:\n");
    }

    #[test]
    fn test_proxy_to_clash_omits_missing_credentials() {
        let output = proxy_to_clash(&[Proxy::shadowsocks("example.com", 80, None, None)]);
        assert!(!output.contains("cipher"));
        assert!(!output.contains("password"));
        assert!(!output.contains("null"));
    }

    #[test]
    fn test_structured_output_round_trips() {
        let mut trojan = Proxy::trojan("cdn.example", 443, Some("pass".to_string()));
        trojan.country_code = Some("SG".to_string());
        let ss = Proxy::shadowsocks(
            "example.com",
            8388,
            Some("aes-256-gcm".to_string()),
            Some("pw".to_string()),
        );

        let output = proxy_to_clash(&[trojan.clone(), ss.clone()]);
        let back = explode_clash(&output).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].proxy_type(), trojan.proxy_type());
        assert_eq!(back[0].host, trojan.host);
        assert_eq!(back[0].port, trojan.port);
        assert_eq!(back[0].credential, trojan.credential);
        assert_eq!(back[0].country_code, trojan.country_code);
        assert_eq!(back[1].credential, ss.credential);
    }
}
