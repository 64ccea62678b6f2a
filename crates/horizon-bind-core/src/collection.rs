//! Observable ordered collection.
//!
//! [`ObservableList<T>`] is an index-addressed sequence that reports every
//! structural mutation through its [`changed`](ObservableList::changed)
//! signal. Each mutator emits exactly one [`ListChange`] describing the edit
//! as a splice: the start index, the items that were removed (in their
//! original order) and the items that were added (in their final order).
//! A call that leaves the list untouched emits nothing.
//!
//! # Example
//!
//! ```
//! use horizon_bind_core::ObservableList;
//!
//! let list = ObservableList::new(vec!["a", "b", "c"]);
//! list.changed().connect(|change| {
//!     println!("at {}: -{:?} +{:?}", change.start, change.removed, change.added);
//! });
//!
//! list.splice(1, 1, ["x", "y"]).unwrap();
//! assert_eq!(list.to_vec(), vec!["a", "x", "y", "c"]);
//! ```

use parking_lot::RwLock;

use crate::error::{CollectionError, Result};
use crate::logging::targets;
use crate::signal::Signal;

/// A single structural edit applied to an [`ObservableList`].
///
/// Applying `removed.len()` removals at `start` followed by inserting
/// `added` at `start` turns the old contents into the new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChange<T> {
    /// First affected index.
    pub start: usize,
    /// Items removed from `start`, in their original order.
    pub removed: Vec<T>,
    /// Items inserted at `start`, in their final order.
    pub added: Vec<T>,
}

impl<T> ListChange<T> {
    /// Number of positions that were overwritten in place.
    pub fn replaced_count(&self) -> usize {
        self.removed.len().min(self.added.len())
    }

    /// Net change in list length caused by this edit.
    pub fn len_delta(&self) -> isize {
        self.added.len() as isize - self.removed.len() as isize
    }
}

/// An ordered, change-notifying sequence.
///
/// All operations take `&self`; the contents live behind a lock that is
/// always released before [`changed`](Self::changed) is emitted, so slots may
/// read or mutate the list again from inside the notification.
pub struct ObservableList<T> {
    items: RwLock<Vec<T>>,
    changed: Signal<ListChange<T>>,
}

impl<T: Clone + Send + Sync + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + Send + Sync + 'static> ObservableList<T> {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            changed: Signal::new(),
        }
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The structural-change signal.
    pub fn changed(&self) -> &Signal<ListChange<T>> {
        &self.changed
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        let items = self.items.read();
        items
            .get(index)
            .cloned()
            .ok_or_else(|| CollectionError::out_of_range(index, items.len()))
    }

    /// Read-only access to the backing vector.
    ///
    /// The returned guard holds the read lock; do not mutate the list while
    /// it is alive.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Copies the contents into a plain vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Replaces the item at `index`, returning the previous value.
    pub fn set(&self, index: usize, value: T) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(CollectionError::out_of_range(index, len));
        }
        let mut removed = self.splice(index, 1, [value])?;
        Ok(removed.remove(0))
    }

    /// Inserts `value` at `index`, shifting later items up.
    ///
    /// `index == len()` appends.
    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        self.splice(index, 0, [value]).map(|_| ())
    }

    /// Removes and returns the item at `index`.
    pub fn remove(&self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(CollectionError::out_of_range(index, len));
        }
        let mut removed = self.splice(index, 1, [])?;
        Ok(removed.remove(0))
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, value: T) {
        let len = self.len();
        self.apply(len, 0, vec![value]);
    }

    /// Removes and returns the last item, if any.
    pub fn pop(&self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.apply(len - 1, 1, Vec::new()).pop()
    }

    /// Removes and returns the first item, if any.
    pub fn shift(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.apply(0, 1, Vec::new()).pop()
    }

    /// Inserts an item at the front of the list.
    pub fn unshift(&self, value: T) {
        self.apply(0, 0, vec![value]);
    }

    /// Removes `delete_count` items starting at `start` and inserts `items`
    /// in their place. Returns the removed items.
    ///
    /// `delete_count` is clamped to the items available after `start`;
    /// `start` itself must not exceed `len()`.
    pub fn splice<I>(&self, start: usize, delete_count: usize, items: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len();
        if start > len {
            return Err(CollectionError::out_of_range(start, len));
        }
        Ok(self.apply(start, delete_count.min(len - start), items.into_iter().collect()))
    }

    /// Reverses the list in place.
    pub fn reverse(&self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let mut reversed = self.to_vec();
        reversed.reverse();
        self.apply(0, len, reversed);
    }

    /// Replaces the whole contents with `items` in one change.
    pub fn replace_all(&self, items: Vec<T>) {
        let len = self.len();
        self.apply(0, len, items);
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.replace_all(Vec::new());
    }

    /// Performs the splice under the write lock, then notifies.
    #[tracing::instrument(skip_all, target = "horizon_bind_core::collection", level = "trace")]
    fn apply(&self, start: usize, delete_count: usize, added: Vec<T>) -> Vec<T> {
        if delete_count == 0 && added.is_empty() {
            return Vec::new();
        }

        let removed: Vec<T> = {
            let mut items = self.items.write();
            items
                .splice(start..start + delete_count, added.iter().cloned())
                .collect()
        };

        tracing::trace!(
            target: targets::COLLECTION,
            start,
            removed = removed.len(),
            added = added.len(),
            "list changed"
        );
        self.changed.emit(ListChange {
            start,
            removed: removed.clone(),
            added,
        });
        removed
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ObservableList<T> {
    /// Position of the first item equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.read().iter().position(|item| item == value)
    }

    /// Returns `true` if some item equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Clone + Send + Sync + 'static> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &*self.items.read())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ObservableList<String>: Send, Sync);
