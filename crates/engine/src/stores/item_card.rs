//! Display data for one item in the list.

use stockroom_domain::InventoryItem;
use stockroom_shared::ItemCardData;

/// What an item card shows, plus the raw name its buttons act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub name: String,
    pub title: String,
    pub quantity: i64,
    pub quantity_label: String,
}

impl ItemCard {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.as_str().to_string(),
            title: item.display_name(),
            quantity: item.quantity.value(),
            quantity_label: item.quantity_label(),
        }
    }
}

impl From<ItemCard> for ItemCardData {
    fn from(card: ItemCard) -> Self {
        Self {
            name: card.name,
            title: card.title,
            quantity: card.quantity,
            quantity_label: card.quantity_label,
        }
    }
}
