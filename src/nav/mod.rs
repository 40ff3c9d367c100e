// List navigation: a focus-aware cursor over a dynamically-sized list.
//
// Each list view owns one `ListNavigator` for its lifetime and drives it
// from its keyboard handlers and focus lifecycle events. The navigator
// notifies an observer on every selection change so the view can apply
// highlight styling.

pub mod input;

use tracing::debug;

/// Change-notification callback, invoked with the new selection.
pub type ChangeCallback = Box<dyn FnMut(Option<usize>)>;

// ---------------------------------------------------------------------------
// ListNavigator
// ---------------------------------------------------------------------------

/// Selected-index cursor over a list whose size changes dynamically.
///
/// Moves are only honored while the owning view reports focus and the list
/// is non-empty. All operations are total: repeated moves at a boundary
/// clamp, and an empty list simply invalidates the selection. The invariant
/// `selected ∈ {None} ∪ [0, item_count - 1]` holds after every mutation.
pub struct ListNavigator {
    selected: Option<usize>,
    item_count: usize,
    focused: bool,
    on_change: Option<ChangeCallback>,
}

impl ListNavigator {
    /// Create an unfocused navigator with no selection.
    pub fn new(item_count: usize) -> Self {
        ListNavigator {
            selected: None,
            item_count,
            focused: false,
            on_change: None,
        }
    }

    /// Register the change-notification callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut(Option<usize>) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Current selection, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the owning view currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set the focus flag. Does not touch the selection and never fires
    /// the callback.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Update the list capacity.
    ///
    /// An empty list silently invalidates the selection (no callback); a
    /// shrink below the current selection clamps it to the new last index.
    pub fn set_item_count(&mut self, n: usize) {
        self.item_count = n;
        if n == 0 {
            self.selected = None;
        } else if let Some(idx) = self.selected {
            if idx >= n {
                self.selected = Some(n - 1);
            }
        }
    }

    /// Move the cursor down one item.
    ///
    /// No-op while unfocused or on an empty list. A fresh cursor selects
    /// the first item; at the last item the cursor stays put (no wrap).
    /// The callback fires after every non-guarded call, even when the
    /// index did not change.
    pub fn move_down(&mut self) {
        if !self.focused || self.item_count == 0 {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(idx) if idx < self.item_count - 1 => Some(idx + 1),
            Some(idx) => Some(idx),
        };
        debug!(selected = ?self.selected, "cursor moved down");
        self.notify();
    }

    /// Move the cursor up one item.
    ///
    /// No-op while unfocused or on an empty list. A fresh cursor selects
    /// the *last* item; at index 0 the cursor stays put (no wrap).
    /// Callback semantics match `move_down`.
    pub fn move_up(&mut self) {
        if !self.focused || self.item_count == 0 {
            return;
        }
        self.selected = match self.selected {
            None => Some(self.item_count - 1),
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(idx) => Some(idx),
        };
        debug!(selected = ?self.selected, "cursor moved up");
        self.notify();
    }

    /// Clear the selection and notify, regardless of focus state.
    ///
    /// Fires the callback even when the selection is already `None`, so
    /// observers see every explicit clear.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(cb) = self.on_change.as_mut() {
            cb(self.selected);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
