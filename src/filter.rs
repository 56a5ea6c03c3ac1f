//! Record filtering and paging
//!
//! Simple list operations over the parser's output. Criteria are conjunctive
//! and order-preserving; nothing here mutates a record.

use crate::models::{Proxy, ProxyType};

/// Declarative filter criteria. An omitted criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Country-code membership, matched case-insensitively.
    pub countries: Vec<String>,
    /// Protocol membership.
    pub protocols: Vec<ProxyType>,
    /// Port membership.
    pub ports: Vec<u16>,
    /// Host substring containment.
    pub host_contains: Option<String>,
    /// Result-size cap, applied last: the first N matches in input order.
    pub limit: Option<usize>,
}

impl FilterCriteria {
    pub fn matches(&self, node: &Proxy) -> bool {
        if !self.countries.is_empty() {
            let code = match &node.country_code {
                Some(code) => code,
                None => return false,
            };
            if !self.countries.iter().any(|c| c.eq_ignore_ascii_case(code)) {
                return false;
            }
        }
        if !self.protocols.is_empty() && !self.protocols.contains(&node.proxy_type()) {
            return false;
        }
        if !self.ports.is_empty() && !self.ports.contains(&node.port) {
            return false;
        }
        if let Some(needle) = &self.host_contains {
            if !node.host.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Select the ordered subsequence matching all criteria.
pub fn apply_filters(nodes: &[Proxy], criteria: &FilterCriteria) -> Vec<Proxy> {
    let mut selected: Vec<Proxy> = nodes
        .iter()
        .filter(|node| criteria.matches(node))
        .cloned()
        .collect();
    if let Some(limit) = criteria.limit {
        selected.truncate(limit);
    }
    selected
}

/// Slice a fixed-size page window out of a sequence. Pages are 1-based;
/// anything past the end is an empty page.
pub fn paginate(nodes: &[Proxy], page: usize, page_size: usize) -> Vec<Proxy> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= nodes.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(nodes.len());
    nodes[start..end].to_vec()
}
