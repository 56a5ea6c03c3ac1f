//! The transcoding pipeline: bank text in, subscription document out.
//!
//! These entry points tie the stages together in a fixed order: parse →
//! filter → serialize (or page). Request-scoped defaults come in through
//! [`SubscriptionOptions`]; nothing here reads ambient state.

use log::debug;

use crate::filter::{apply_filters, paginate, FilterCriteria};
use crate::generator::{generate, SubscriptionTarget};
use crate::models::{Proxy, SubscriptionOptions};
use crate::parser::parse_bank;

/// Fold the request-scoped default country into criteria that supply none.
fn with_default_country(criteria: &FilterCriteria, options: &SubscriptionOptions) -> FilterCriteria {
    let mut criteria = criteria.clone();
    if criteria.countries.is_empty() {
        if let Some(country) = &options.default_country {
            criteria.countries.push(country.clone());
        }
    }
    criteria
}

/// Parse, filter and serialize one bank document.
pub fn transcode(
    document: &str,
    criteria: &FilterCriteria,
    target: SubscriptionTarget,
    options: &SubscriptionOptions,
) -> String {
    let nodes = parse_bank(document);
    let mut criteria = with_default_country(criteria, options);
    if criteria.limit.is_none() {
        criteria.limit = options.default_limit;
    }
    let selected = apply_filters(&nodes, &criteria);
    debug!(
        "transcoding {} of {} records to {}",
        selected.len(),
        nodes.len(),
        target.as_str()
    );
    generate(&selected, target, options)
}

/// Parse and filter one bank document, returning a fixed-size page window.
///
/// The default result cap does not apply here; a listing pages through the
/// whole filtered sequence.
pub fn list_page(
    document: &str,
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
    options: &SubscriptionOptions,
) -> Vec<Proxy> {
    let nodes = parse_bank(document);
    let criteria = with_default_country(criteria, options);
    let selected = apply_filters(&nodes, &criteria);
    paginate(&selected, page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = "\
vless://8b1e@zoom.us:443?security=tls\n\
trojan://pass@cdn.example:443\n\
ss://aes-256-gcm:p@example.com:80\n";

    #[test]
    fn test_transcode_applies_default_limit_only_when_unset() {
        let options = SubscriptionOptions {
            default_limit: Some(1),
            ..Default::default()
        };
        let output = transcode(
            BANK,
            &FilterCriteria::default(),
            SubscriptionTarget::Raw,
            &options,
        );
        assert_eq!(output.lines().count(), 1);

        let criteria = FilterCriteria {
            limit: Some(2),
            ..Default::default()
        };
        let output = transcode(BANK, &criteria, SubscriptionTarget::Raw, &options);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_transcode_applies_default_country_only_when_unset() {
        let doc = r#"[
            {"type":"vless","host":"a.example","port":443,"cc":"ID"},
            {"type":"vless","host":"b.example","port":443,"cc":"SG"}
        ]"#;
        let options = SubscriptionOptions {
            default_country: Some("SG".to_string()),
            ..Default::default()
        };
        let output = transcode(
            doc,
            &FilterCriteria::default(),
            SubscriptionTarget::Raw,
            &options,
        );
        assert_eq!(output, "vless b.example:443 SG");

        let criteria = FilterCriteria {
            countries: vec!["ID".to_string()],
            ..Default::default()
        };
        let output = transcode(doc, &criteria, SubscriptionTarget::Raw, &options);
        assert_eq!(output, "vless a.example:443 ID");
    }

    #[test]
    fn test_list_page_windows_the_filtered_sequence() {
        let nodes = list_page(
            BANK,
            &FilterCriteria::default(),
            2,
            2,
            &SubscriptionOptions::default(),
        );
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].host, "example.com");
    }

    #[test]
    fn test_transcode_empty_document_never_fails() {
        let options = SubscriptionOptions::default();
        for target in [
            SubscriptionTarget::Raw,
            SubscriptionTarget::Clash,
            SubscriptionTarget::from_str("vless").unwrap(),
        ] {
            let output = transcode("", &FilterCriteria::default(), target, &options);
            assert!(output.is_empty() || output == "proxies:\n");
        }
    }
}
