//! Horizon Bind - data binding between observable lists and item views.
//!
//! This is the main umbrella crate. It re-exports the core primitives and
//! adds the binding layer on top of them:
//!
//! - [`model`]: the [`ListController`](model::ListController) that mirrors an
//!   [`ObservableList`] into an [`ItemView`](model::ItemView) and binds the
//!   selection both ways
//! - [`format`]: pattern-driven date formatting and parsing used for item
//!   labels and date inputs
//! - [`config`]: TOML-loadable settings
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_bind::prelude::*;
//!
//! let fruits = Arc::new(ObservableList::new(vec!["apple", "pear"]));
//! let view = Arc::new(ListWidget::new());
//! let controller = ListController::new(Some(fruits.clone()), view.clone());
//!
//! fruits.push("plum");
//! assert_eq!(view.child_labels(), vec!["apple", "pear", "plum"]);
//!
//! view.select_rows(&[2]);
//! assert_eq!(controller.selection().to_vec(), vec!["plum"]);
//! ```

pub use horizon_bind_core::*;

pub mod config;
pub mod format;
pub mod model;
pub mod prelude;
