//! Shadowsocks link parsing

use super::common::{parse_port, some_nonempty, strip_fragment, LinkError};
use crate::models::Proxy;

/// Parse a Shadowsocks link into a Proxy record.
///
/// Only the plain form `ss://<method>:<password>@<host>:<port>[#fragment]`
/// is supported. The single base64 blob variant (no `@`) is a known gap and
/// is rejected as unsupported rather than guessed at.
pub fn explode_ss(link: &str) -> Result<Proxy, LinkError> {
    let body = link
        .strip_prefix("ss://")
        .ok_or(LinkError::UnrecognizedScheme)?;
    let body = strip_fragment(body);

    let (secret, endpoint) = body
        .split_once('@')
        .ok_or(LinkError::UnsupportedVariant("base64 shadowsocks"))?;
    let (method, password) = secret
        .split_once(':')
        .ok_or(LinkError::MissingCredentialSeparator)?;
    let (host, port) = endpoint
        .split_once(':')
        .ok_or(LinkError::MissingPortSeparator)?;
    if host.is_empty() {
        return Err(LinkError::EmptyHost);
    }
    let port = parse_port(port)?;

    Ok(Proxy::shadowsocks(
        host,
        port,
        some_nonempty(method),
        some_nonempty(password),
    ))
}
