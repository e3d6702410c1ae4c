//! Single-writer theme cells.
//!
//! A cell holds one value and a version counter. [`theme_channel`] hands
//! out exactly one [`ThemeWriter`] (not `Clone`) and a cloneable
//! [`ThemeReader`]; whoever owns the writer decides which component may
//! write by lending it out.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub struct ThemeWriter<T: Copy> {
    slot: Rc<Cell<(T, u64)>>,
}

#[derive(Debug, Clone)]
pub struct ThemeReader<T: Copy> {
    slot: Rc<Cell<(T, u64)>>,
}

pub fn theme_channel<T: Copy + PartialEq>(initial: T) -> (ThemeWriter<T>, ThemeReader<T>) {
    let slot = Rc::new(Cell::new((initial, 0)));
    (
        ThemeWriter { slot: slot.clone() },
        ThemeReader { slot },
    )
}

impl<T: Copy + PartialEq> ThemeWriter<T> {
    /// Swap in `value`. Returns `true` (and bumps the version) only if it
    /// differs from the current value.
    pub fn set(&self, value: T) -> bool {
        let (current, version) = self.slot.get();
        if current == value {
            return false;
        }
        self.slot.set((value, version + 1));
        true
    }
}

impl<T: Copy> ThemeReader<T> {
    pub fn get(&self) -> T {
        self.slot.get().0
    }

    /// Increments on every effective change.
    pub fn version(&self) -> u64 {
        self.slot.get().1
    }
}
