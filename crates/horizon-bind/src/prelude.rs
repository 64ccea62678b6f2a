//! Prelude module for Horizon Bind.
//!
//! ```
//! use horizon_bind::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signals and observable lists (`Signal`, `ObservableList`, `ListChange`)
//! - The binding layer (`ListController`, `ItemView`, `ListWidget`)
//! - Date patterns (`DateFormat`, `FormatError`)
//! - Settings (`BindSettings`)

// ============================================================================
// Core
// ============================================================================

pub use crate::collection::{ListChange, ObservableList};
pub use crate::signal::{ConnectionId, Signal};
pub use crate::CollectionError;

// ============================================================================
// Binding
// ============================================================================

pub use crate::model::{
    ItemLabel, ItemView, ListController, ListWidget, SelectionMode, SyncState, ViewSelection,
};

// ============================================================================
// Formatting and Settings
// ============================================================================

pub use crate::config::BindSettings;
pub use crate::format::{DateFormat, DateLength, FormatError, LOGGING_PATTERN};
