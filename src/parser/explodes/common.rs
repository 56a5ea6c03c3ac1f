//! Scheme dispatch and shared link-parsing helpers

use thiserror::Error;

use crate::models::Proxy;

/// Why one descriptor unit was rejected.
///
/// The bank parser drops failed units silently; the explicit reason exists so
/// callers can count and log what was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("no recognized scheme prefix")]
    UnrecognizedScheme,
    #[error("unrecognized protocol tag")]
    UnknownProtocol,
    #[error("missing '@' between credential and endpoint")]
    MissingCredentialSeparator,
    #[error("missing ':' between host and port")]
    MissingPortSeparator,
    #[error("port is not a number in 1-65535")]
    InvalidPort,
    #[error("empty host")]
    EmptyHost,
    #[error("unsupported {0} variant")]
    UnsupportedVariant(&'static str),
    #[error("fewer than four delimited columns")]
    TooFewColumns,
}

/// Parse one descriptor unit by its scheme prefix.
pub fn explode(link: &str) -> Result<Proxy, LinkError> {
    let link = link.trim();
    if link.starts_with("vless://") {
        super::vless::explode_vless(link)
    } else if link.starts_with("trojan://") {
        super::trojan::explode_trojan(link)
    } else if link.starts_with("ss://") {
        super::ss::explode_ss(link)
    } else {
        Err(LinkError::UnrecognizedScheme)
    }
}

/// Parse one delimited bank line: `host,port,country,provider[,...]`.
///
/// Commas past the fourth column fold back into the provider label. Bare
/// endpoints like these carry no credential of their own; they are tagged
/// vless and the uri generator substitutes a default identifier.
pub fn explode_delimited(line: &str) -> Result<Proxy, LinkError> {
    let columns: Vec<&str> = line.splitn(4, ',').collect();
    if columns.len() < 4 {
        return Err(LinkError::TooFewColumns);
    }
    let host = columns[0].trim();
    if host.is_empty() {
        return Err(LinkError::EmptyHost);
    }
    let port = parse_port(columns[1])?;

    let mut node = Proxy::vless(host, port, None);
    node.country_code = normalize_country(columns[2]);
    node.provider = some_nonempty(columns[3].trim());
    Ok(node)
}

/// Parse a port segment, rejecting zero and anything outside u16 range.
pub(crate) fn parse_port(raw: &str) -> Result<u16, LinkError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(LinkError::InvalidPort),
        Ok(port) => Ok(port),
    }
}

/// Cut the display-label fragment off a link body.
pub(crate) fn strip_fragment(body: &str) -> &str {
    match body.find('#') {
        Some(pos) => &body[..pos],
        None => body,
    }
}

pub(crate) fn some_nonempty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Upper-case a country code; empty codes normalize to absent.
pub(crate) fn normalize_country(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}
