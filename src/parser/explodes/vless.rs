//! VLESS link parsing

use super::common::{parse_port, some_nonempty, strip_fragment, LinkError};
use crate::models::Proxy;

/// Parse a VLESS link into a Proxy record.
///
/// Shape: `vless://<id>@<host>:<port>?<query>#<fragment>`. The fragment is a
/// display label and is ignored. `security=tls` in the query (any case)
/// turns TLS on; `sni` sets the server name indication.
pub fn explode_vless(link: &str) -> Result<Proxy, LinkError> {
    let body = link
        .strip_prefix("vless://")
        .ok_or(LinkError::UnrecognizedScheme)?;
    let body = strip_fragment(body);
    let (body, query) = match body.split_once('?') {
        Some((body, query)) => (body, Some(query)),
        None => (body, None),
    };

    let (id, endpoint) = body
        .split_once('@')
        .ok_or(LinkError::MissingCredentialSeparator)?;
    let (host, port) = endpoint
        .rsplit_once(':')
        .ok_or(LinkError::MissingPortSeparator)?;
    if host.is_empty() {
        return Err(LinkError::EmptyHost);
    }
    let port = parse_port(port)?;

    let mut node = Proxy::vless(host, port, some_nonempty(id));
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "security" => node.tls = value.eq_ignore_ascii_case("tls"),
                "sni" => node.sni = some_nonempty(&value),
                _ => {}
            }
        }
    }
    Ok(node)
}
