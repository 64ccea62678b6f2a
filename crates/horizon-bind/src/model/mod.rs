//! Model/View binding for Horizon Bind.
//!
//! This module connects observable data to item views:
//!
//! - `ItemView`: the contract a list-like widget exposes to the binding layer
//! - `ViewSelection`: a view's native selection, with change notification
//! - `SelectionMode`: whether a view selection holds one row or many
//! - `ListWidget`: a headless `ItemView` implementation
//! - `ItemLabel` / `LabelFn`: how items become child labels
//! - `ListController`: keeps model, view and selection synchronized
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────┐ ListChange ┌────────────────┐  children   ┌────────────┐
//! │ ObservableList │───────────>│ ListController │────────────>│  ItemView  │
//! │    (model)     │            │                │<───────────>│ (selection)│
//! └────────────────┘            └────────────────┘  selection  └────────────┘
//!                                       │
//!                                       v
//!                               ┌────────────────┐
//!                               │ ObservableList │
//!                               │  (selection)   │
//!                               └────────────────┘
//! ```

mod controller;
mod label;
mod view;

pub use controller::{ListController, SyncState};
pub use label::{ItemLabel, LabelFn, default_label, label_from_display};
pub use view::{ItemView, ListWidget, SelectionMode, ViewSelection};
