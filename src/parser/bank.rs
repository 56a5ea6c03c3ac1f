//! Bank document parsing
//!
//! A bank is the raw source document holding zero or more descriptor units.
//! Corrupt units are dropped one by one, never aborting the batch; drop
//! counts are logged at debug/info level.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};
use serde_json::Value;

use super::explodes::{self, LinkError};
use crate::models::{Proxy, ProxyType};

/// Parse one bank document into an ordered sequence of canonical records.
///
/// Tries, in order: a whole-document JSON array, a structured `proxies:`
/// document, a base64-wrapped line list, and finally newline-separated
/// descriptor units (scheme links, with a delimited-text fallback).
pub fn parse_bank(text: &str) -> Vec<Proxy> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(text) {
        return normalize_entries(&entries);
    }

    if text.contains("proxies:") {
        if let Some(nodes) = explodes::explode_clash(text) {
            return nodes;
        }
    }

    // Subscription endpoints commonly wrap the whole line list in base64.
    let decoded;
    let text = match STANDARD.decode(text) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(plain) => {
                decoded = plain;
                decoded.as_str()
            }
            Err(_) => text,
        },
        Err(_) => text,
    };

    parse_lines(text)
}

fn parse_lines(text: &str) -> Vec<Proxy> {
    let mut nodes = Vec::new();
    let mut units = 0usize;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        units += 1;

        let parsed = explodes::explode(line).or_else(|err| match err {
            LinkError::UnrecognizedScheme => explodes::explode_delimited(line),
            other => Err(other),
        });
        match parsed {
            Ok(node) => nodes.push(node),
            Err(err) => debug!("dropping descriptor unit: {}", err),
        }
    }
    if nodes.len() < units {
        info!("parsed {} of {} descriptor units", nodes.len(), units);
    }
    nodes
}

fn normalize_entries(entries: &[Value]) -> Vec<Proxy> {
    let mut nodes = Vec::new();
    for entry in entries {
        match normalize_entry(entry) {
            Ok(node) => nodes.push(node),
            Err(err) => debug!("dropping bank entry: {}", err),
        }
    }
    if nodes.len() < entries.len() {
        info!("normalized {} of {} bank entries", nodes.len(), entries.len());
    }
    nodes
}

/// Field-by-field coercion of one JSON bank entry into a record.
///
/// Ports arrive as numbers or numeric strings, tls as any truthy spelling;
/// country codes are upper-cased with empty collapsing to absent.
fn normalize_entry(entry: &Value) -> Result<Proxy, LinkError> {
    let proxy_type = entry
        .get("type")
        .and_then(Value::as_str)
        .and_then(ProxyType::from_str)
        .ok_or(LinkError::UnknownProtocol)?;
    let host = entry.get("host").and_then(Value::as_str).unwrap_or("");
    if host.is_empty() {
        return Err(LinkError::EmptyHost);
    }
    let port = coerce_port(entry.get("port"))?;

    let mut node = match proxy_type {
        ProxyType::Vless => Proxy::vless(host, port, field(entry, "id")),
        ProxyType::Trojan => Proxy::trojan(host, port, field(entry, "password")),
        ProxyType::Shadowsocks => {
            Proxy::shadowsocks(host, port, field(entry, "method"), field(entry, "password"))
        }
    };
    if proxy_type != ProxyType::Trojan {
        node.tls = coerce_bool(entry.get("tls"));
    }
    node.country_code = entry
        .get("cc")
        .and_then(Value::as_str)
        .and_then(|cc| explodes::normalize_country(cc));
    node.sni = field(entry, "sni");
    node.provider = field(entry, "provider");
    Ok(node)
}

fn field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn coerce_port(value: Option<&Value>) -> Result<u16, LinkError> {
    let port = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .filter(|p| (1..=u16::MAX as u64).contains(p))
            .map(|p| p as u16),
        Some(Value::String(s)) => s.trim().parse::<u16>().ok().filter(|p| *p != 0),
        _ => None,
    };
    port.ok_or(LinkError::InvalidPort)
}

fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().map_or(false, |v| v != 0.0),
        _ => false,
    }
}
