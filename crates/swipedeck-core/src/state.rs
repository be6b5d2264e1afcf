//! Shared single-threaded state cells.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: RuntimeHandle,
}

/// Mutable value shared between the pieces of one widget.
///
/// Writes that change the value bump [`version`](Self::version) and ask the
/// runtime for a frame so the host redraws. Writing an equal value is a
/// no-op.
pub struct MutableState<T: Clone + PartialEq + 'static> {
    cell: Rc<StateCell<T>>,
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    /// Replace the value. Returns whether anything changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.cell.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.cell.version.set(self.cell.version.get() + 1);
        self.cell.runtime.schedule();
        true
    }

    /// Number of effective writes so far.
    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.cell.runtime.clone()
    }
}

impl<T: Clone + PartialEq + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.cell.value.borrow())
            .field("version", &self.cell.version.get())
            .finish()
    }
}
