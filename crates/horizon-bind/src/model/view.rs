//! The view side of the binding layer.
//!
//! A list controller never renders anything itself. It drives an
//! [`ItemView`]: an ordered set of child display elements (one per model
//! item, each carrying a precomputed label) plus a native [`ViewSelection`].
//! Widget toolkits implement `ItemView` for their list-like widgets;
//! [`ListWidget`] is a headless implementation used by tests and tools.

use parking_lot::RwLock;

use horizon_bind_core::Signal;

/// How many rows a [`ViewSelection`] may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one row; selecting another row replaces it.
    Single,
    /// Any number of rows.
    #[default]
    Multi,
}

/// The native selection of an item view, as an ordered list of child rows.
///
/// Two kinds of edits are offered. The notifying edits ([`push`](Self::push),
/// [`remove_row`](Self::remove_row), [`replace`](Self::replace),
/// [`select_none`](Self::select_none)) emit [`changed`](Self::changed) the
/// way a user interaction would. The raw edits ([`clear_raw`](Self::clear_raw),
/// [`extend_raw`](Self::extend_raw)) rewrite the underlying rows without any
/// notification.
///
/// In [`SelectionMode::Single`] every edit keeps only the most recent row.
pub struct ViewSelection {
    rows: RwLock<Vec<usize>>,
    mode: RwLock<SelectionMode>,
    changed: Signal<()>,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSelection {
    /// Creates an empty multi-row selection.
    pub fn new() -> Self {
        Self::with_mode(SelectionMode::Multi)
    }

    /// Creates an empty selection with the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            mode: RwLock::new(mode),
            changed: Signal::new(),
        }
    }

    /// The current selection mode.
    pub fn mode(&self) -> SelectionMode {
        *self.mode.read()
    }

    /// Changes the selection mode.
    ///
    /// Switching to [`SelectionMode::Single`] keeps only the last selected
    /// row, and notifies if that dropped anything.
    pub fn set_mode(&self, mode: SelectionMode) {
        *self.mode.write() = mode;
        if mode == SelectionMode::Single {
            let trimmed = {
                let mut rows = self.rows.write();
                let before = rows.len();
                keep_last(&mut rows);
                rows.len() != before
            };
            if trimmed {
                self.changed.emit(());
            }
        }
    }

    /// Emitted after every notifying edit.
    pub fn changed(&self) -> &Signal<()> {
        &self.changed
    }

    /// Selected rows in selection order.
    pub fn rows(&self) -> Vec<usize> {
        self.rows.read().clone()
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Returns `true` if `row` is selected.
    pub fn contains(&self, row: usize) -> bool {
        self.rows.read().contains(&row)
    }

    /// Adds `row` to the end of the selection.
    ///
    /// Selecting an already selected row does nothing. In single mode the
    /// new row replaces the current one.
    pub fn push(&self, row: usize) {
        let single = self.mode() == SelectionMode::Single;
        {
            let mut rows = self.rows.write();
            if rows.contains(&row) {
                return;
            }
            if single {
                rows.clear();
            }
            rows.push(row);
        }
        self.changed.emit(());
    }

    /// Deselects `row`. Returns `true` if it was selected.
    pub fn remove_row(&self, row: usize) -> bool {
        let removed = {
            let mut rows = self.rows.write();
            let before = rows.len();
            rows.retain(|&r| r != row);
            rows.len() != before
        };
        if removed {
            self.changed.emit(());
        }
        removed
    }

    /// Bulk-replaces the selection.
    pub fn replace(&self, rows: Vec<usize>) {
        let mut deduped = Vec::with_capacity(rows.len());
        for row in rows {
            if !deduped.contains(&row) {
                deduped.push(row);
            }
        }
        if self.mode() == SelectionMode::Single {
            keep_last(&mut deduped);
        }
        *self.rows.write() = deduped;
        self.changed.emit(());
    }

    /// Clears the selection. Always notifies, even if nothing was selected.
    pub fn select_none(&self) {
        self.rows.write().clear();
        self.changed.emit(());
    }

    /// Clears the underlying rows without notifying.
    pub fn clear_raw(&self) {
        self.rows.write().clear();
    }

    /// Appends rows to the underlying storage without notifying.
    pub fn extend_raw(&self, rows: impl IntoIterator<Item = usize>) {
        let single = self.mode() == SelectionMode::Single;
        let mut current = self.rows.write();
        current.extend(rows);
        if single {
            keep_last(&mut current);
        }
    }

    /// Keeps rows aligned after a child was inserted at `index`.
    pub fn shift_for_insert(&self, index: usize) {
        for row in self.rows.write().iter_mut() {
            if *row >= index {
                *row += 1;
            }
        }
    }

    /// Keeps rows aligned after the child at `index` was removed.
    ///
    /// Notifies only if the removed child was selected.
    pub fn shift_for_remove(&self, index: usize) {
        let deselected = {
            let mut rows = self.rows.write();
            let before = rows.len();
            rows.retain(|&r| r != index);
            for row in rows.iter_mut() {
                if *row > index {
                    *row -= 1;
                }
            }
            rows.len() != before
        };
        if deselected {
            self.changed.emit(());
        }
    }
}

impl std::fmt::Debug for ViewSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSelection")
            .field("rows", &*self.rows.read())
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

fn keep_last(rows: &mut Vec<usize>) {
    if let Some(start) = rows.len().checked_sub(1) {
        rows.drain(..start);
    }
}

/// A display surface with one labelled child per model item.
///
/// Implementations use interior mutability; every method takes `&self`.
/// Child indices are 0-based and contiguous.
pub trait ItemView: Send + Sync {
    /// Number of child display elements.
    fn child_count(&self) -> usize;

    /// Label of the child at `index`, or `None` if out of range.
    fn child_label(&self, index: usize) -> Option<String>;

    /// Inserts a child displaying `label` at `index`.
    fn insert_child(&self, index: usize, label: String);

    /// Removes the child at `index`.
    fn remove_child(&self, index: usize);

    /// Replaces the label of the child at `index`.
    fn replace_child(&self, index: usize, label: String);

    /// The view's native selection.
    fn selection(&self) -> &ViewSelection;

    /// Removes every child.
    fn clear_children(&self) {
        while let Some(last) = self.child_count().checked_sub(1) {
            self.remove_child(last);
        }
    }

    /// Labels of all children, in order.
    fn child_labels(&self) -> Vec<String> {
        (0..self.child_count())
            .filter_map(|index| self.child_label(index))
            .collect()
    }

    /// Labels of the selected children, in selection order.
    fn selected_labels(&self) -> Vec<String> {
        self.selection()
            .rows()
            .into_iter()
            .filter_map(|row| self.child_label(row))
            .collect()
    }
}

/// A headless list view.
///
/// Keeps its native selection aligned with structural edits the way an
/// on-screen list does: inserting a child shifts later selected rows,
/// removing a selected child deselects it.
#[derive(Debug, Default)]
pub struct ListWidget {
    children: RwLock<Vec<String>>,
    selection: ViewSelection,
}

impl ListWidget {
    /// Creates an empty multi-selection list widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list widget with the given selection mode.
    pub fn with_selection_mode(mode: SelectionMode) -> Self {
        Self {
            children: RwLock::new(Vec::new()),
            selection: ViewSelection::with_mode(mode),
        }
    }

    /// The selection mode of the native selection.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Changes the selection mode of the native selection.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        self.selection.set_mode(mode);
    }

    /// Selects the children at `rows`, as a user click-and-extend would.
    ///
    /// A single-selection widget keeps only the last in-range row.
    pub fn select_rows(&self, rows: &[usize]) {
        let count = self.child_count();
        self.selection
            .replace(rows.iter().copied().filter(|&row| row < count).collect());
    }
}

impl ItemView for ListWidget {
    fn child_count(&self) -> usize {
        self.children.read().len()
    }

    fn child_label(&self, index: usize) -> Option<String> {
        self.children.read().get(index).cloned()
    }

    fn insert_child(&self, index: usize, label: String) {
        let index = {
            let mut children = self.children.write();
            let index = index.min(children.len());
            children.insert(index, label);
            index
        };
        self.selection.shift_for_insert(index);
    }

    fn remove_child(&self, index: usize) {
        {
            let mut children = self.children.write();
            if index >= children.len() {
                return;
            }
            children.remove(index);
        }
        self.selection.shift_for_remove(index);
    }

    fn replace_child(&self, index: usize, label: String) {
        if let Some(child) = self.children.write().get_mut(index) {
            *child = label;
        }
    }

    fn selection(&self) -> &ViewSelection {
        &self.selection
    }
}

static_assertions::assert_impl_all!(ListWidget: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn widget_with(labels: &[&str]) -> ListWidget {
        let widget = ListWidget::new();
        for (index, label) in labels.iter().enumerate() {
            widget.insert_child(index, label.to_string());
        }
        widget
    }

    fn count_changes(selection: &ViewSelection) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let recv = count.clone();
        selection.changed().connect(move |_| {
            recv.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_children_and_labels() {
        let widget = widget_with(&["a", "b", "c"]);
        widget.replace_child(1, "B".into());
        widget.remove_child(0);
        assert_eq!(widget.child_labels(), vec!["B", "c"]);
        assert_eq!(widget.child_label(5), None);
    }

    #[test]
    fn test_raw_edits_are_silent() {
        let selection = ViewSelection::new();
        let count = count_changes(&selection);

        selection.extend_raw([2, 0]);
        assert_eq!(selection.rows(), vec![2, 0]);
        selection.clear_raw();
        assert!(selection.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        selection.select_none();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_push_ignores_duplicates() {
        let selection = ViewSelection::new();
        let count = count_changes(&selection);

        selection.push(1);
        selection.push(1);
        assert_eq!(selection.rows(), vec![1]);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(selection.remove_row(1));
        assert!(!selection.remove_row(1));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_selection_follows_structural_edits() {
        let widget = widget_with(&["a", "b", "c", "d"]);
        widget.select_rows(&[3, 1]);
        let count = count_changes(widget.selection());

        widget.insert_child(0, "z".into());
        assert_eq!(widget.selection().rows(), vec![4, 2]);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        widget.remove_child(2);
        assert_eq!(widget.selection().rows(), vec![3]);
        assert_eq!(widget.selected_labels(), vec!["d"]);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_children_deselects_everything() {
        let widget = widget_with(&["a", "b"]);
        widget.select_rows(&[0, 1, 7]);
        assert_eq!(widget.selection().rows(), vec![0, 1]);

        widget.clear_children();
        assert_eq!(widget.child_count(), 0);
        assert!(widget.selection().is_empty());
    }

    #[test]
    fn test_insert_past_end_keeps_selection_aligned() {
        let widget = widget_with(&["a", "b"]);
        widget.select_rows(&[1]);

        widget.insert_child(9, "c".into());
        assert_eq!(widget.child_labels(), vec!["a", "b", "c"]);
        assert_eq!(widget.selection().rows(), vec![1]);
        assert_eq!(widget.selected_labels(), vec!["b"]);
    }

    #[test]
    fn test_single_mode_replaces_selection() {
        let widget = ListWidget::with_selection_mode(SelectionMode::Single);
        for (index, label) in ["a", "b", "c"].iter().enumerate() {
            widget.insert_child(index, label.to_string());
        }
        let count = count_changes(widget.selection());

        widget.selection().push(0);
        widget.selection().push(2);
        assert_eq!(widget.selection().rows(), vec![2]);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        widget.select_rows(&[0, 1]);
        assert_eq!(widget.selected_labels(), vec!["b"]);

        widget.selection().extend_raw([0, 2]);
        assert_eq!(widget.selection().rows(), vec![2]);
    }

    #[test]
    fn test_switching_to_single_mode_trims_selection() {
        let widget = widget_with(&["a", "b", "c"]);
        widget.select_rows(&[0, 2]);
        let count = count_changes(widget.selection());

        widget.set_selection_mode(SelectionMode::Single);
        assert_eq!(widget.selection_mode(), SelectionMode::Single);
        assert_eq!(widget.selection().rows(), vec![2]);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        widget.set_selection_mode(SelectionMode::Single);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
