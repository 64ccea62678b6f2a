//! Integration tests for ObservableList change reporting.

use std::sync::Arc;

use horizon_bind_core::{ListChange, ObservableList};
use parking_lot::Mutex;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_bind_core=trace")
        .with_test_writer()
        .try_init();
}

/// Replays a change on a plain vector the way a view would.
fn replay<T: Clone>(mirror: &mut Vec<T>, change: &ListChange<T>) {
    mirror.splice(
        change.start..change.start + change.removed.len(),
        change.added.iter().cloned(),
    );
}

#[test]
fn test_replaying_changes_reproduces_contents() {
    setup();
    let list = ObservableList::new(vec![10, 20, 30]);
    let mirror = Arc::new(Mutex::new(list.to_vec()));
    let events = Arc::new(Mutex::new(0usize));

    let recv = mirror.clone();
    let count = events.clone();
    list.changed().connect(move |change| {
        replay(&mut recv.lock(), change);
        *count.lock() += 1;
    });

    list.push(40);
    list.insert(1, 15).unwrap();
    list.set(0, 5).unwrap();
    list.remove(2).unwrap();
    list.reverse();
    list.splice(1, 2, [7, 8, 9]).unwrap();
    list.unshift(1);
    list.shift();
    list.pop();
    list.replace_all(vec![3, 2, 1]);
    list.clear();
    list.push(99);

    assert_eq!(*mirror.lock(), list.to_vec());
    assert_eq!(*events.lock(), 12);
}

#[test]
fn test_removed_items_keep_original_order() {
    setup();
    let list = ObservableList::new(vec!["a", "b", "c", "d", "e"]);
    let last = Arc::new(Mutex::new(None));

    let recv = last.clone();
    list.changed().connect(move |change: &ListChange<&str>| {
        *recv.lock() = Some(change.clone());
    });

    list.splice(1, 3, ["x"]).unwrap();

    let change = last.lock().clone().unwrap();
    assert_eq!(change.start, 1);
    assert_eq!(change.removed, vec!["b", "c", "d"]);
    assert_eq!(change.added, vec!["x"]);
}

#[test]
fn test_slot_mutating_another_list_does_not_deadlock() {
    setup();
    let source = ObservableList::new(vec![1, 2, 3]);
    let echo = Arc::new(ObservableList::<i32>::empty());

    let sink = echo.clone();
    source.changed().connect(move |change| {
        for value in &change.added {
            sink.push(*value * 10);
        }
    });

    source.push(4);
    source.splice(0, 0, [0]).unwrap();

    assert_eq!(echo.to_vec(), vec![40, 0]);
}
