//! Core systems for Horizon Bind.
//!
//! This crate provides the primitives the data-binding layer is built on:
//!
//! - **Signal/Slot System**: synchronous, re-entrancy safe notifications
//! - **Observable Collections**: [`ObservableList<T>`], an ordered sequence that
//!   reports every structural edit as one [`ListChange`]
//! - **Logging**: fixed `tracing` targets and a span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_bind_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Observable List Example
//!
//! ```
//! use horizon_bind_core::ObservableList;
//!
//! let list = ObservableList::new(vec![1, 2, 3]);
//! list.changed().connect(|change| {
//!     assert_eq!(change.start, 3);
//!     assert_eq!(change.added, vec![4]);
//! });
//! list.push(4);
//! ```

pub mod collection;
mod error;
pub mod logging;
pub mod signal;

pub use collection::{ListChange, ObservableList};
pub use error::{CollectionError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
