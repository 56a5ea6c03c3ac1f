//! Raw line output

use crate::models::{Proxy, PLACEHOLDER_COUNTRY};

/// One line per record: `<protocol> <host>:<port> <cc>`.
pub fn proxy_to_raw(nodes: &[Proxy]) -> String {
    nodes
        .iter()
        .map(|node| {
            format!(
                "{} {}:{} {}",
                node.proxy_type().as_str(),
                node.host,
                node.port,
                node.country_code.as_deref().unwrap_or(PLACEHOLDER_COUNTRY)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_to_raw() {
        let mut vless = Proxy::vless("zoom.us", 443, Some("8b1e".to_string()));
        vless.country_code = Some("ID".to_string());
        let ss = Proxy::shadowsocks("example.com", 80, None, None);

        let output = proxy_to_raw(&[vless, ss]);
        assert_eq!(output, "vless zoom.us:443 ID\nss example.com:80 XX");
    }

    #[test]
    fn test_proxy_to_raw_empty() {
        assert_eq!(proxy_to_raw(&[]), "");
    }
}
