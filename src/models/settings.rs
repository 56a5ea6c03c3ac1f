//! Request-scoped pipeline settings
//!
//! One explicit configuration value carried through the pipeline entry
//! points. Nothing in the library reads ambient process state; binaries load
//! these from a TOML file and pass them in.

use serde::Deserialize;

/// Defaults applied to a single pipeline run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionOptions {
    /// Country filter used when the request supplies none.
    pub default_country: Option<String>,
    /// Result-size cap used when the request supplies none.
    pub default_limit: Option<usize>,
    /// Credentials substituted by the uri generator for records that carry
    /// none of their own.
    pub credentials: DefaultCredentials,
}

/// Uniform credentials for re-encoded subscription output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultCredentials {
    pub vless_id: Option<String>,
    pub trojan_password: Option<String>,
    pub ss_method: Option<String>,
    pub ss_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_toml() {
        let toml_content = r#"
default_country = "ID"
default_limit = 20

[credentials]
vless_id = "11111111-1111-4111-8111-111111111111"
trojan_password = "secret"
"#;
        let options: SubscriptionOptions = toml::from_str(toml_content).unwrap();
        assert_eq!(options.default_country.as_deref(), Some("ID"));
        assert_eq!(options.default_limit, Some(20));
        assert_eq!(
            options.credentials.vless_id.as_deref(),
            Some("11111111-1111-4111-8111-111111111111")
        );
        assert_eq!(options.credentials.ss_method, None);
    }

    #[test]
    fn test_options_default_is_empty() {
        let options = SubscriptionOptions::default();
        assert!(options.default_country.is_none());
        assert!(options.default_limit.is_none());
        assert!(options.credentials.vless_id.is_none());
    }
}
