//! Add/edit item dialog state.
//!
//! Holds the text the operator typed and turns it into a store command on
//! submit. The dialog never talks to the store itself.

use stockroom_domain::{DomainError, InventoryItem, ItemName, Quantity};

/// What the dialog was opened for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    /// Editing the record currently stored under `original`
    Edit { original: ItemName },
}

/// What submitting the dialog asks the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCommand {
    Add {
        name: ItemName,
        quantity: Quantity,
    },
    Update {
        old_name: ItemName,
        new_name: ItemName,
        /// `None` keeps the stored quantity
        quantity: Option<Quantity>,
    },
    /// Nothing to write (empty name)
    Skip,
}

#[derive(Debug, Clone)]
pub struct ItemDialog {
    mode: DialogMode,
    open: bool,
    name: String,
    quantity: String,
}

impl Default for ItemDialog {
    fn default() -> Self {
        Self {
            mode: DialogMode::Add,
            open: false,
            name: String::new(),
            quantity: String::new(),
        }
    }
}

impl ItemDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with empty fields for a new item.
    pub fn open_for_add(&mut self) {
        self.mode = DialogMode::Add;
        self.name.clear();
        self.quantity.clear();
        self.open = true;
    }

    /// Open prefilled with an existing item.
    pub fn open_for_edit(&mut self, item: &InventoryItem) {
        self.mode = DialogMode::Edit {
            original: item.name.clone(),
        };
        self.name = item.name.as_str().to_string();
        self.quantity = item.quantity.to_string();
        self.open = true;
    }

    /// Dismiss without submitting.
    pub fn close(&mut self) {
        self.mode = DialogMode::Add;
        self.open = false;
        self.name.clear();
        self.quantity.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add Item",
            DialogMode::Edit { .. } => "Edit Item",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add",
            DialogMode::Edit { .. } => "Update",
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_text(&self) -> &str {
        &self.quantity
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    /// Turn the current fields into a command and close the dialog.
    ///
    /// On a validation error the dialog stays open with its fields intact.
    pub fn submit(&mut self) -> Result<DialogCommand, DomainError> {
        let command = self.command()?;
        self.close();
        Ok(command)
    }

    fn command(&self) -> Result<DialogCommand, DomainError> {
        if self.name.is_empty() {
            return Ok(DialogCommand::Skip);
        }
        let name = ItemName::new(self.name.as_str())?;
        let quantity = Quantity::parse_input(&self.quantity)?;

        Ok(match &self.mode {
            DialogMode::Add => DialogCommand::Add {
                name,
                quantity: quantity.unwrap_or(Quantity::ONE),
            },
            DialogMode::Edit { original } => DialogCommand::Update {
                old_name: original.clone(),
                new_name: name,
                quantity,
            },
        })
    }
}
