//! Sub-builders for the node content tables.
//!
//! Each builder is a pure transform from a form-friendly row shape into
//! the storage-friendly shape held by [`NodeContent`](crate::NodeContent).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content::ItemRef;

/// One row of the ordered item table as submitted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRow {
    #[serde(default)]
    pub reference_id: String,
    #[serde(default)]
    pub weight: i64,
}

/// One row of the per-bundle view-mode table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewModeRow {
    #[serde(default)]
    pub enabled: bool,
    /// Empty string means "use the default view mode".
    #[serde(default)]
    pub view_mode: String,
}

/// Build the ordered item list from unordered form rows.
///
/// Rows with a blank reference are dropped, then the remainder is sorted
/// ascending by weight. The sort is stable: equal weights keep their input
/// order.
pub fn build_item_list(rows: &[ItemRow]) -> Vec<ItemRef> {
    let mut items: Vec<ItemRef> = rows
        .iter()
        .filter(|row| !row.reference_id.trim().is_empty())
        .map(|row| ItemRef {
            id: row.reference_id.trim().to_string(),
            weight: row.weight,
        })
        .collect();
    items.sort_by_key(|item| item.weight);
    items
}

/// Build the bundle to view-mode map from the per-bundle table.
///
/// Only bundles the editor enabled are retained; the override may be empty,
/// which the renderer treats as the default view mode.
pub fn build_view_mode_map(rows: &BTreeMap<String, ViewModeRow>) -> BTreeMap<String, String> {
    rows.iter()
        .filter(|(_, row)| row.enabled)
        .map(|(bundle, row)| (bundle.clone(), row.view_mode.trim().to_string()))
        .collect()
}

#[cfg(test)]
#[path = "builders_tests.rs"]
mod tests;
