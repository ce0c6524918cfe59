//! Local inventory cache for one operator session.
//!
//! Holds the snapshot produced by the last resync along with the search box
//! state. Every mutation goes to the remote collection first and is then
//! followed by a full resync; the snapshot is never patched in place.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use stockroom_domain::{filter_items, InventoryItem, ItemName, Quantity};

use crate::infrastructure::ports::ClockPort;
use crate::use_cases::inventory::{
    AddOutcome, DecrementOutcome, DeleteOutcome, IncrementOutcome, InventoryError,
    InventoryUseCases, RenameOutcome,
};

use super::item_card::ItemCard;
use super::item_dialog::DialogCommand;

pub struct InventorySession {
    use_cases: Arc<InventoryUseCases>,
    clock: Arc<dyn ClockPort>,
    items: Vec<InventoryItem>,
    query: String,
    filtered: Vec<InventoryItem>,
    last_synced_at: Option<DateTime<Utc>>,
}

impl InventorySession {
    /// Empty session; call [`resync`](Self::resync) to load the collection.
    pub fn new(use_cases: Arc<InventoryUseCases>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases,
            clock,
            items: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            last_synced_at: None,
        }
    }

    /// Full snapshot from the last resync.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Items currently shown.
    pub fn filtered(&self) -> &[InventoryItem] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Snapshot entry with exactly this name.
    pub fn find(&self, name: &ItemName) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.name == name)
    }

    pub fn cards(&self) -> Vec<ItemCard> {
        self.items.iter().map(ItemCard::from_item).collect()
    }

    pub fn filtered_cards(&self) -> Vec<ItemCard> {
        self.filtered.iter().map(ItemCard::from_item).collect()
    }

    /// Replace the snapshot with the collection's current contents.
    ///
    /// The filtered view is reset to the full list; the query text is kept.
    pub async fn resync(&mut self) -> Result<(), InventoryError> {
        let items = self.use_cases.list.execute().await?;
        self.filtered = items.clone();
        self.items = items;
        self.last_synced_at = Some(self.clock.now());
        tracing::debug!(count = self.items.len(), "Resynced inventory");
        Ok(())
    }

    /// Narrow the shown items to names containing `query`, ignoring case.
    ///
    /// Works on the current snapshot only.
    pub fn search(&mut self, query: impl Into<String>) -> &[InventoryItem] {
        self.query = query.into();
        self.filtered = filter_items(&self.items, &self.query);
        &self.filtered
    }

    pub async fn add(
        &mut self,
        name: &ItemName,
        quantity: Quantity,
    ) -> Result<AddOutcome, InventoryError> {
        let outcome = self.use_cases.add.execute(name, quantity).await?;
        self.resync().await?;
        Ok(outcome)
    }

    /// Add from raw text input. An empty name writes nothing but still resyncs.
    pub async fn add_named(
        &mut self,
        name: &str,
        quantity: Quantity,
    ) -> Result<Option<AddOutcome>, InventoryError> {
        if name.is_empty() {
            tracing::debug!("Add skipped, empty name");
            self.resync().await?;
            return Ok(None);
        }
        let name = ItemName::new(name)?;
        self.add(&name, quantity).await.map(Some)
    }

    pub async fn increment(&mut self, name: &ItemName) -> Result<IncrementOutcome, InventoryError> {
        let outcome = self.use_cases.increment.execute(name).await?;
        self.resync().await?;
        Ok(outcome)
    }

    pub async fn decrement(&mut self, name: &ItemName) -> Result<DecrementOutcome, InventoryError> {
        let outcome = self.use_cases.decrement.execute(name).await?;
        self.resync().await?;
        Ok(outcome)
    }

    pub async fn rename(
        &mut self,
        old_name: &ItemName,
        new_name: &ItemName,
        quantity: Option<Quantity>,
    ) -> Result<RenameOutcome, InventoryError> {
        let outcome = self
            .use_cases
            .rename
            .execute(old_name, new_name, quantity)
            .await?;
        self.resync().await?;
        Ok(outcome)
    }

    pub async fn delete(&mut self, name: &ItemName) -> Result<DeleteOutcome, InventoryError> {
        let outcome = self.use_cases.delete.execute(name).await?;
        self.resync().await?;
        Ok(outcome)
    }

    /// Run whatever a dialog submission asked for.
    pub async fn apply(&mut self, command: DialogCommand) -> Result<(), InventoryError> {
        match command {
            DialogCommand::Add { name, quantity } => {
                self.add(&name, quantity).await?;
            }
            DialogCommand::Update {
                old_name,
                new_name,
                quantity,
            } => {
                self.rename(&old_name, &new_name, quantity).await?;
            }
            DialogCommand::Skip => self.resync().await?,
        }
        Ok(())
    }
}
