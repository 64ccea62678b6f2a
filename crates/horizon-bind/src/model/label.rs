//! Item-to-label rendering rules.
//!
//! Every model item becomes exactly one view child, and that child only
//! needs a display string. [`ItemLabel`] provides the per-type default rule;
//! a [`LabelFn`] closure can replace it for types without one.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A closure turning an item into its display label.
pub type LabelFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Trait for items that know how to label themselves.
///
/// # Example
///
/// ```
/// use horizon_bind::model::ItemLabel;
///
/// struct Person {
///     name: String,
/// }
///
/// impl ItemLabel for Person {
///     fn label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait ItemLabel {
    /// Returns the display label for this item.
    fn label(&self) -> String;
}

impl ItemLabel for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl ItemLabel for &str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

impl ItemLabel for bool {
    fn label(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl ItemLabel for char {
    fn label(&self) -> String {
        self.to_string()
    }
}

macro_rules! numeric_labels {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ItemLabel for $ty {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric_labels!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Platform-style date string, e.g. `Tue Mar 02 2021`.
impl ItemLabel for NaiveDate {
    fn label(&self) -> String {
        self.format("%a %b %d %Y").to_string()
    }
}

/// Platform-style date string, e.g. `Tue Mar 02 2021 10:04:05`.
impl ItemLabel for NaiveDateTime {
    fn label(&self) -> String {
        self.format("%a %b %d %Y %H:%M:%S").to_string()
    }
}

/// Platform-style date string, e.g. `Tue Mar 02 2021 10:04:05 GMT+0100`.
impl<Tz: TimeZone> ItemLabel for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn label(&self) -> String {
        self.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
    }
}

/// Fallback rule for types that only implement [`Display`].
pub fn label_from_display<T: Display>(item: &T) -> String {
    item.to_string()
}

/// Label rule backed by [`ItemLabel`].
pub fn default_label<T: ItemLabel>() -> LabelFn<T> {
    Arc::new(|item: &T| item.label())
}
