//! Entity state records and domain grouping
//!
//! One [`EntityState`] is one element of the `/api/states` response: an
//! `entity_id` of the form `<domain>.<object_id>`, the reported state
//! string, and a free-form attribute map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display name used when an entity has no `friendly_name` attribute.
pub const NAME_FALLBACK: &str = "N/A";

/// A snapshot of one entity's state as reported by the hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityState {
    /// Identifier of the form `<domain>.<object_id>`.
    pub entity_id: String,

    /// Current reported state value, hub-defined and free-form.
    pub state: String,

    /// Arbitrary attribute map; may contain `friendly_name`.
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl EntityState {
    /// The domain prefix of the entity id (text before the first `.`).
    pub fn domain(&self) -> &str {
        self.entity_id
            .split('.')
            .next()
            .unwrap_or(&self.entity_id)
    }

    /// The `friendly_name` attribute, or [`NAME_FALLBACK`] if absent.
    pub fn display_name(&self) -> &str {
        self.attributes
            .get("friendly_name")
            .and_then(|v| v.as_str())
            .unwrap_or(NAME_FALLBACK)
    }

    /// Whether the entity id carries a domain separator. Records without
    /// one are malformed input and get skipped during fetch.
    pub fn has_domain(&self) -> bool {
        self.entity_id.contains('.')
    }
}

/// Retain only entities in `domain`, or all of them when no filter is given.
///
/// The match is against the dot-delimited prefix: domain `light` matches
/// `light.kitchen` but not `lighting.foo`. Input order is preserved.
pub fn filter_by_domain(entities: Vec<EntityState>, domain: Option<&str>) -> Vec<EntityState> {
    match domain {
        Some(domain) => {
            let prefix = format!("{domain}.");
            entities
                .into_iter()
                .filter(|e| e.entity_id.starts_with(&prefix))
                .collect()
        }
        None => entities,
    }
}

/// Count entities per domain prefix, keyed in ascending domain order.
pub fn domain_summary(entities: &[EntityState]) -> BTreeMap<String, usize> {
    let mut domains = BTreeMap::new();
    for entity in entities {
        *domains.entry(entity.domain().to_string()).or_insert(0) += 1;
    }
    domains
}
