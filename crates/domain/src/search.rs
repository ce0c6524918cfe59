//! Search box filtering over an already-fetched snapshot.

use crate::entities::InventoryItem;

/// Items whose name contains `query`, ignoring case, in their original order.
///
/// An empty query returns the whole list unchanged. This never touches the
/// remote store; it only narrows whatever the last resync produced.
pub fn filter_items(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.name.matches_query(query))
        .cloned()
        .collect()
}
