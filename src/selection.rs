//! Which layout property is currently highlighted

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// The highlighted property. At most one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Size,
    Stride,
    Alignment,
}

impl Selection {
    pub fn label(self) -> &'static str {
        match self {
            Selection::None => "none",
            Selection::Size => "Size",
            Selection::Stride => "Stride",
            Selection::Alignment => "Alignment",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default)]
struct SelectionCell {
    value: Cell<Selection>,
    dirty: Cell<bool>,
}

/// Shared, single-threaded handle to the current [`Selection`].
///
/// Hover listeners write through their own clone and the canvas reads through
/// its clone. Every write wins; a write that changes the value marks the
/// handle dirty so the next frame repaints.
#[derive(Debug, Clone, Default)]
pub struct SelectionHandle {
    inner: Rc<SelectionCell>,
}

impl SelectionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Selection {
        self.inner.value.get()
    }

    pub fn set(&self, selection: Selection) {
        let previous = self.inner.value.replace(selection);
        if previous != selection {
            tracing::debug!(from = %previous, to = %selection, "selection changed");
            self.inner.dirty.set(true);
        }
    }

    pub fn mark_dirty(&self) {
        self.inner.dirty.set(true);
    }

    /// Return whether a repaint was requested since the last call, clearing
    /// the request.
    pub fn take_dirty(&self) -> bool {
        self.inner.dirty.replace(false)
    }
}
