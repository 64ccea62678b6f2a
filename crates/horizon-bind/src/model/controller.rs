//! List controller: binds an observable model to an item view.
//!
//! [`ListController<T>`] keeps three things in step:
//!
//! - the **model**, an [`ObservableList<T>`] owned by the caller,
//! - the **target**, an [`ItemView`] showing one labelled child per item,
//! - the **selection**, an [`ObservableList<T>`] of the selected items that
//!   mirrors the target's native [`ViewSelection`](super::ViewSelection).
//!
//! # Synchronization
//!
//! Every model change is replayed on the view as an index-aligned edit
//! (replace in place, then remove or insert the excess), never as a full
//! rebuild. The selection is then pruned of values that left the model and
//! pushed back into the view, all inside the model's notification.
//!
//! The selection is bound in both directions. A single [`SyncState`] records
//! which copy is running; while one runs, notifications that would copy back
//! the other way are dropped rather than queued.
//!
//! # Duplicate values
//!
//! Items are matched by value. When the model holds equal items, each
//! selected value claims the first unclaimed position with an equal item,
//! so earlier selection entries win.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_bind::model::{ItemView, ListController, ListWidget};
//! use horizon_bind_core::ObservableList;
//!
//! let model = Arc::new(ObservableList::new(vec!["a".to_string(), "b".to_string()]));
//! let view = Arc::new(ListWidget::new());
//! let controller = ListController::new(Some(model.clone()), view.clone());
//!
//! controller.selection().push("b".to_string());
//! assert_eq!(view.selected_labels(), vec!["b"]);
//!
//! model.remove(1).unwrap();
//! assert!(controller.selection().is_empty());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::{Mutex, RwLock};

use horizon_bind_core::logging::{span_names, targets};
use horizon_bind_core::{ConnectionId, ListChange, ObservableList, PerfSpan};

use super::label::{ItemLabel, LabelFn, default_label};
use super::view::{ItemView, SelectionMode};

/// Which direction of the selection binding is currently being copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No copy in progress.
    #[default]
    Idle,
    /// Copying the selection list (or the model) into the view.
    CopyingModelToView,
    /// Copying the view's native selection into the selection list.
    CopyingViewToModel,
}

/// An active copy pass. Resets the controller to [`SyncState::Idle`] on drop.
struct SyncPass<'a> {
    state: &'a Mutex<SyncState>,
    direction: SyncState,
}

impl SyncPass<'_> {
    fn direction(&self) -> SyncState {
        self.direction
    }
}

impl Drop for SyncPass<'_> {
    fn drop(&mut self) {
        *self.state.lock() = SyncState::Idle;
    }
}

#[derive(Default)]
struct Bindings {
    model: Option<ConnectionId>,
    selection: Option<ConnectionId>,
    view_selection: Option<ConnectionId>,
}

struct Inner<T> {
    model: RwLock<Option<Arc<ObservableList<T>>>>,
    target: RwLock<Arc<dyn ItemView>>,
    selection: OnceLock<Arc<ObservableList<T>>>,
    label: LabelFn<T>,
    state: Mutex<SyncState>,
    bindings: Mutex<Bindings>,
    disposed: AtomicBool,
    weak_self: Weak<Inner<T>>,
}

/// Binds an [`ObservableList<T>`] to an [`ItemView`] and keeps a selection
/// list consistent with the view's native selection.
///
/// Dropping the controller releases every listener it registered.
pub struct ListController<T: Clone + PartialEq + Send + Sync + 'static> {
    inner: Arc<Inner<T>>,
}

impl<T> ListController<T>
where
    T: ItemLabel + Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates a controller labelling items through [`ItemLabel`].
    pub fn new(model: Option<Arc<ObservableList<T>>>, target: Arc<dyn ItemView>) -> Self {
        Self::with_label_fn(model, target, default_label())
    }
}

impl<T> ListController<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates a controller with a custom label rule.
    pub fn with_label<F>(
        model: Option<Arc<ObservableList<T>>>,
        target: Arc<dyn ItemView>,
        label: F,
    ) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::with_label_fn(model, target, Arc::new(label))
    }

    fn with_label_fn(
        model: Option<Arc<ObservableList<T>>>,
        target: Arc<dyn ItemView>,
        label: LabelFn<T>,
    ) -> Self {
        let inner = Arc::new_cyclic(|weak_self| Inner {
            model: RwLock::new(None),
            target: RwLock::new(target.clone()),
            selection: OnceLock::new(),
            label,
            state: Mutex::new(SyncState::Idle),
            bindings: Mutex::new(Bindings::default()),
            disposed: AtomicBool::new(false),
            weak_self: weak_self.clone(),
        });

        inner.connect_view_selection(target.as_ref());
        inner.set_model(model);

        Self { inner }
    }

    /// The bound model, if any.
    pub fn model(&self) -> Option<Arc<ObservableList<T>>> {
        self.inner.model()
    }

    /// Replaces the model and re-synchronizes the view and the selection.
    ///
    /// Selected values that also occur in the new model stay selected.
    pub fn set_model(&self, model: Option<Arc<ObservableList<T>>>) {
        self.inner.set_model(model);
    }

    /// The current target view.
    pub fn target(&self) -> Arc<dyn ItemView> {
        self.inner.target()
    }

    /// Moves rendering to `target`. The previous target is left empty.
    pub fn set_target(&self, target: Arc<dyn ItemView>) {
        self.inner.set_target(target);
    }

    /// The live selection list.
    ///
    /// Edits made to it are pushed into the target's native selection, and
    /// edits of the native selection are copied back into it.
    pub fn selection(&self) -> Arc<ObservableList<T>> {
        self.inner.selection()
    }

    /// The current synchronization state.
    pub fn sync_state(&self) -> SyncState {
        *self.inner.state.lock()
    }

    /// Label the controller would give `item`.
    pub fn label_for(&self, item: &T) -> String {
        (self.inner.label)(item)
    }

    /// Releases every listener on the model, the selection and the target.
    ///
    /// The controller stops reacting to changes for good, including through
    /// a selection list first requested after this call. The view keeps its
    /// children.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

impl<T> Drop for ListController<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl<T> Inner<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn model(&self) -> Option<Arc<ObservableList<T>>> {
        self.model.read().clone()
    }

    fn model_items(&self) -> Vec<T> {
        self.model().map(|model| model.to_vec()).unwrap_or_default()
    }

    fn target(&self) -> Arc<dyn ItemView> {
        self.target.read().clone()
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn selection(&self) -> Arc<ObservableList<T>> {
        self.selection
            .get_or_init(|| {
                let selection = Arc::new(ObservableList::empty());
                if self.is_disposed() {
                    return selection;
                }
                let weak = self.weak_self.clone();
                let id = selection.changed().connect(move |_: &ListChange<T>| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_selection_changed();
                    }
                });
                self.bindings.lock().selection = Some(id);
                selection
            })
            .clone()
    }

    fn selection_values(&self) -> Vec<T> {
        self.selection
            .get()
            .map(|selection| selection.to_vec())
            .unwrap_or_default()
    }

    fn try_begin(&self, direction: SyncState) -> Option<SyncPass<'_>> {
        let mut state = self.state.lock();
        if *state != SyncState::Idle {
            tracing::trace!(
                target: targets::CONTROLLER,
                active = ?*state,
                requested = ?direction,
                "dropping re-entrant selection sync"
            );
            return None;
        }
        *state = direction;
        Some(SyncPass {
            state: &self.state,
            direction,
        })
    }

    fn render_all(&self, target: &dyn ItemView, items: &[T]) {
        target.clear_children();
        for (index, item) in items.iter().enumerate() {
            target.insert_child(index, (self.label)(item));
        }
    }

    fn connect_view_selection(&self, target: &dyn ItemView) {
        let weak = self.weak_self.clone();
        let id = target.selection().changed().connect(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.on_view_selection_changed();
            }
        });
        self.bindings.lock().view_selection = Some(id);
    }

    fn set_model(&self, model: Option<Arc<ObservableList<T>>>) {
        if self.is_disposed() {
            tracing::debug!(target: targets::CONTROLLER, "ignoring model change on disposed controller");
            return;
        }
        let _perf = PerfSpan::new(span_names::RESYNC);
        let pass = self.try_begin(SyncState::CopyingModelToView);

        let old = std::mem::replace(&mut *self.model.write(), model.clone());
        let old_binding = self.bindings.lock().model.take();
        if let (Some(old), Some(id)) = (old, old_binding) {
            old.changed().disconnect(id);
        }

        let items = model.as_ref().map(|m| m.to_vec()).unwrap_or_default();
        tracing::debug!(target: targets::CONTROLLER, len = items.len(), "binding model");
        self.render_all(self.target().as_ref(), &items);

        if let Some(model) = &model {
            let weak = self.weak_self.clone();
            let id = model.changed().connect(move |change: &ListChange<T>| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_model_changed(change);
                }
            });
            self.bindings.lock().model = Some(id);
        }

        let previous = self.selection_values();
        let reseeded = claim_in_order(&items, &previous);
        if reseeded != previous {
            self.selection().replace_all(reseeded);
        }

        if let Some(pass) = &pass {
            self.copy_selection_to_view(pass);
        }
    }

    fn set_target(&self, target: Arc<dyn ItemView>) {
        if self.is_disposed() {
            tracing::debug!(target: targets::CONTROLLER, "ignoring retarget on disposed controller");
            return;
        }
        let _perf = PerfSpan::new(span_names::RESYNC);
        let pass = self.try_begin(SyncState::CopyingModelToView);

        let old = std::mem::replace(&mut *self.target.write(), target.clone());
        if let Some(id) = self.bindings.lock().view_selection.take() {
            old.selection().changed().disconnect(id);
        }
        old.clear_children();

        let items = self.model_items();
        tracing::debug!(target: targets::CONTROLLER, len = items.len(), "moving rendering to new target");
        self.render_all(target.as_ref(), &items);
        self.connect_view_selection(target.as_ref());

        if let Some(pass) = &pass {
            self.copy_selection_to_view(pass);
        }
    }

    fn on_model_changed(&self, change: &ListChange<T>) {
        if self.is_disposed() {
            return;
        }
        let _perf = PerfSpan::new(span_names::RESYNC);
        let pass = self.try_begin(SyncState::CopyingModelToView);
        let target = self.target();

        let replaced = change.replaced_count();
        for (offset, item) in change.added.iter().take(replaced).enumerate() {
            target.replace_child(change.start + offset, (self.label)(item));
        }
        for _ in replaced..change.removed.len() {
            target.remove_child(change.start + replaced);
        }
        for (offset, item) in change.added.iter().enumerate().skip(replaced) {
            target.insert_child(change.start + offset, (self.label)(item));
        }
        tracing::trace!(
            target: targets::CONTROLLER,
            start = change.start,
            removed = change.removed.len(),
            added = change.added.len(),
            "replayed model change"
        );

        self.prune_selection();

        match &pass {
            Some(pass) => self.copy_selection_to_view(pass),
            None => tracing::debug!(
                target: targets::CONTROLLER,
                "model changed during a selection copy; view selection left as is"
            ),
        }
    }

    /// Drops selection entries whose value no longer occurs in the model.
    fn prune_selection(&self) {
        let Some(selection) = self.selection.get() else {
            return;
        };
        let values = selection.to_vec();
        if values.is_empty() {
            return;
        }

        let kept = claim_by_selection(&self.model_items(), &values);
        if kept.len() != values.len() {
            tracing::debug!(
                target: targets::CONTROLLER,
                pruned = values.len() - kept.len(),
                "pruning selection entries removed from model"
            );
            selection.replace_all(kept);
        }
    }

    fn on_selection_changed(&self) {
        if self.is_disposed() {
            return;
        }
        if let Some(pass) = self.try_begin(SyncState::CopyingModelToView) {
            self.copy_selection_to_view(&pass);
        }
    }

    fn on_view_selection_changed(&self) {
        if self.is_disposed() {
            return;
        }
        if let Some(pass) = self.try_begin(SyncState::CopyingViewToModel) {
            self.copy_view_to_selection(&pass);
        }
    }

    /// Pushes the selection list into the target's native selection.
    fn copy_selection_to_view(&self, pass: &SyncPass<'_>) {
        debug_assert_eq!(pass.direction(), SyncState::CopyingModelToView);

        let items = self.model_items();
        let values = self.selection_values();
        let mut claimed = vec![false; items.len()];
        let mut rows = Vec::with_capacity(values.len());
        let mut mapped = Vec::with_capacity(values.len());

        for value in &values {
            if let Some(row) = first_unclaimed(&items, &claimed, value) {
                claimed[row] = true;
                rows.push(row);
                mapped.push(value.clone());
            }
        }

        let target = self.target();
        let native = target.selection();
        if native.mode() == SelectionMode::Single && rows.len() > 1 {
            let keep = rows.len() - 1;
            rows.drain(..keep);
            mapped.drain(..keep);
            tracing::debug!(
                target: targets::CONTROLLER,
                "single-selection view keeps only the last selected value"
            );
        }

        if mapped.len() != values.len() {
            tracing::debug!(
                target: targets::CONTROLLER,
                dropped = values.len() - mapped.len(),
                "selection trimmed to what the view can show"
            );
            self.selection().replace_all(mapped);
        }

        native.clear_raw();
        native.extend_raw(rows.iter().copied());
        match rows.last() {
            Some(&last) => {
                native.remove_row(last);
                native.push(last);
            }
            None => native.select_none(),
        }
    }

    /// Copies the target's native selection into the selection list.
    fn copy_view_to_selection(&self, pass: &SyncPass<'_>) {
        debug_assert_eq!(pass.direction(), SyncState::CopyingViewToModel);

        let items = self.model_items();
        let values: Vec<T> = self
            .target()
            .selection()
            .rows()
            .into_iter()
            .filter_map(|row| items.get(row).cloned())
            .collect();

        let selection = self.selection();
        if selection.items().as_slice() != values.as_slice() {
            selection.replace_all(values);
        }
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        let bindings = std::mem::take(&mut *self.bindings.lock());

        if let (Some(model), Some(id)) = (self.model(), bindings.model) {
            model.changed().disconnect(id);
        }
        if let (Some(selection), Some(id)) = (self.selection.get(), bindings.selection) {
            selection.changed().disconnect(id);
        }
        if let Some(id) = bindings.view_selection {
            self.target().selection().changed().disconnect(id);
        }
        tracing::debug!(target: targets::CONTROLLER, "controller disposed");
    }
}

fn first_unclaimed<T: PartialEq>(items: &[T], claimed: &[bool], value: &T) -> Option<usize> {
    items
        .iter()
        .zip(claimed)
        .position(|(item, &taken)| !taken && item == value)
}

/// Items of `items`, in their order, that match an unclaimed entry of
/// `wanted`.
fn claim_in_order<T: Clone + PartialEq>(items: &[T], wanted: &[T]) -> Vec<T> {
    let mut claimed = vec![false; wanted.len()];
    items
        .iter()
        .filter(|item| match first_unclaimed(wanted, &claimed, *item) {
            Some(slot) => {
                claimed[slot] = true;
                true
            }
            None => false,
        })
        .cloned()
        .collect()
}

/// Entries of `selected`, in their order, that still match an unclaimed
/// item of `items`.
fn claim_by_selection<T: Clone + PartialEq>(items: &[T], selected: &[T]) -> Vec<T> {
    let mut claimed = vec![false; items.len()];
    selected
        .iter()
        .filter(|value| match first_unclaimed(items, &claimed, *value) {
            Some(row) => {
                claimed[row] = true;
                true
            }
            None => false,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_in_order_follows_items() {
        let items = ["x", "b", "y", "a"];
        let wanted = ["a", "b", "c"];
        assert_eq!(claim_in_order(&items, &wanted), vec!["b", "a"]);
    }

    #[test]
    fn test_claim_in_order_counts_duplicates() {
        let items = ["a", "a", "a"];
        let wanted = ["a", "a"];
        assert_eq!(claim_in_order(&items, &wanted), vec!["a", "a"]);
    }

    #[test]
    fn test_claim_by_selection_first_entry_wins() {
        let items = ["a", "b"];
        let selected = ["b", "a", "a"];
        assert_eq!(claim_by_selection(&items, &selected), vec!["b", "a"]);
    }

    #[test]
    fn test_sync_pass_resets_state() {
        let state = Mutex::new(SyncState::CopyingViewToModel);
        {
            let pass = SyncPass {
                state: &state,
                direction: SyncState::CopyingViewToModel,
            };
            assert_eq!(pass.direction(), SyncState::CopyingViewToModel);
        }
        assert_eq!(*state.lock(), SyncState::Idle);
    }
}
