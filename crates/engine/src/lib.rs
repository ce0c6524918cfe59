//! Stockroom Engine library.
//!
//! Server-side code for the Stockroom inventory manager.
//!
//! ## Structure
//!
//! - `use_cases/` - One struct per inventory operation against the remote collection
//! - `stores/` - Session snapshot, search state and the add/edit dialog
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
