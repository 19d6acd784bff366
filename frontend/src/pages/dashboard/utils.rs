use std::collections::{BTreeMap, BTreeSet};

use crate::api::Property;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyStats {
    pub total: usize,
    pub average_price: f64,
    pub locations: usize,
    /// Property type counts, most frequent first, ties alphabetical.
    pub by_type: Vec<(String, usize)>,
}

pub fn property_stats(properties: &[Property]) -> PropertyStats {
    if properties.is_empty() {
        return PropertyStats::default();
    }
    let total = properties.len();
    let average_price = properties.iter().map(|p| p.price).sum::<f64>() / total as f64;
    let locations = properties
        .iter()
        .map(|p| p.location.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for property in properties {
        *counts.entry(property.property_type.as_str()).or_default() += 1;
    }
    let mut by_type: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), count))
        .collect();
    by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    PropertyStats {
        total,
        average_price,
        locations,
        by_type,
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.0}", price)
}

/// The backend returns properties in insertion order; the most recently
/// created ones are at the end.
pub fn latest_properties(properties: &[Property], limit: usize) -> Vec<Property> {
    properties.iter().rev().take(limit).cloned().collect()
}
