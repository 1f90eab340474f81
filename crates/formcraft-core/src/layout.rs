//! Row packing for the preview
//!
//! Groups of a column are laid out left to right. A row holds at most
//! [`ROW_CAPACITY`] percent; a full-width group takes a whole row while two
//! half-width groups share one.

use std::sync::Arc;

use crate::model::{Group, GroupWidth};

/// Width of one row, in percent
pub const ROW_CAPACITY: u32 = 100;

/// Anything that can be packed into rows
pub trait RowItem {
    fn row_width(&self) -> GroupWidth;
}

impl RowItem for Group {
    fn row_width(&self) -> GroupWidth {
        self.width
    }
}

impl RowItem for GroupWidth {
    fn row_width(&self) -> GroupWidth {
        *self
    }
}

impl<T: RowItem + ?Sized> RowItem for Arc<T> {
    fn row_width(&self) -> GroupWidth {
        (**self).row_width()
    }
}

impl<T: RowItem + ?Sized> RowItem for &T {
    fn row_width(&self) -> GroupWidth {
        (**self).row_width()
    }
}

/// Pack `items` into rows with a single greedy pass.
///
/// An item that would overflow the current row closes it and starts the next
/// one. Input order is preserved across and within rows, and the empty input
/// yields no rows.
pub fn pack_rows<T: RowItem>(items: &[T]) -> Vec<Vec<&T>> {
    let mut rows = Vec::new();
    let mut current: Vec<&T> = Vec::new();
    let mut used = 0;

    for item in items {
        let width = item.row_width().percent();
        if used + width > ROW_CAPACITY {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            used = 0;
        }
        current.push(item);
        used += width;
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
