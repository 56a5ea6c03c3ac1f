//! Structured-document parsing
//!
//! Parses the `proxies:` configuration document this crate's own clash
//! generator emits (and hand-written documents of the same shape), so
//! structured banks round-trip through the pipeline.

use serde_yaml::Value;

use crate::models::Proxy;

/// Parse a structured `proxies:` document into records.
///
/// Returns `None` when the document is not YAML or carries no `proxies`
/// sequence, so the bank parser can fall through to line-oriented parsing.
pub fn explode_clash(content: &str) -> Option<Vec<Proxy>> {
    let yaml: Value = serde_yaml::from_str(content).ok()?;
    let proxies = match yaml.get("proxies") {
        Some(Value::Sequence(seq)) => seq,
        _ => return None,
    };

    let mut nodes = Vec::new();
    for entry in proxies {
        if let Some(node) = parse_clash_proxy(entry) {
            nodes.push(node);
        }
    }
    Some(nodes)
}

/// Parse a single proxy mapping. Entries of unknown type or missing the
/// essentials are skipped, never raised.
fn parse_clash_proxy(entry: &Value) -> Option<Proxy> {
    let proxy_type = entry.get("type")?.as_str()?.to_lowercase();
    let server = entry.get("server").and_then(Value::as_str).unwrap_or("");
    let port = entry.get("port").and_then(Value::as_u64).unwrap_or(0);
    if server.is_empty() || port == 0 || port > u16::MAX as u64 {
        return None;
    }
    let port = port as u16;

    let mut node = match proxy_type.as_str() {
        "vless" => {
            let mut node = Proxy::vless(server, port, get_str(entry, "uuid"));
            node.tls = entry.get("tls").and_then(Value::as_bool).unwrap_or(false);
            node.sni = get_str(entry, "servername");
            node
        }
        "trojan" => {
            let mut node = Proxy::trojan(server, port, get_str(entry, "password"));
            node.sni = get_str(entry, "sni");
            node
        }
        "ss" | "shadowsocks" => Proxy::shadowsocks(
            server,
            port,
            get_str(entry, "cipher"),
            get_str(entry, "password"),
        ),
        _ => return None,
    };

    if let Some(name) = entry.get("name").and_then(Value::as_str) {
        node.country_code = country_from_name(name);
    }
    Some(node)
}

fn get_str(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Recover the country tag from a `<cc>-<protocol>-<host>` display name.
fn country_from_name(name: &str) -> Option<String> {
    let prefix = name.split('-').next()?;
    if prefix.len() == 2
        && prefix.bytes().all(|b| b.is_ascii_uppercase())
        && prefix != crate::models::PLACEHOLDER_COUNTRY
    {
        Some(prefix.to_string())
    } else {
        None
    }
}
