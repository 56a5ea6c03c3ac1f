//! URL encoding utilities

/// Percent-encode a string for use in a URI fragment or query value.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
