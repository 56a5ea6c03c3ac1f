//! Trojan link parsing

use super::common::{parse_port, some_nonempty, strip_fragment, LinkError};
use crate::models::Proxy;

/// Parse a Trojan link into a Proxy record.
///
/// Shape: `trojan://<password>@<host>:<port>?<query>#<fragment>`, the same
/// split as vless. TLS is implied by the protocol; only `sni` is read from
/// the query.
pub fn explode_trojan(link: &str) -> Result<Proxy, LinkError> {
    let body = link
        .strip_prefix("trojan://")
        .ok_or(LinkError::UnrecognizedScheme)?;
    let body = strip_fragment(body);
    let (body, query) = match body.split_once('?') {
        Some((body, query)) => (body, Some(query)),
        None => (body, None),
    };

    let (password, endpoint) = body
        .split_once('@')
        .ok_or(LinkError::MissingCredentialSeparator)?;
    let (host, port) = endpoint
        .rsplit_once(':')
        .ok_or(LinkError::MissingPortSeparator)?;
    if host.is_empty() {
        return Err(LinkError::EmptyHost);
    }
    let port = parse_port(port)?;

    let mut node = Proxy::trojan(host, port, some_nonempty(password));
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == "sni" {
                node.sni = some_nonempty(&value);
            }
        }
    }
    Ok(node)
}
