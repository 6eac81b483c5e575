//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering a flat list.
//! Uses a movement threshold to distinguish click from drag.
//!
//! Rows are addressed by index. A drop lands in a *slot*: slot `i` means
//! "insert before row `i`", slot `len` means "append".

use leptos::ev;
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row currently being dragged
    pub dragging: RwSignal<Option<usize>>,
    /// Slot under the pointer
    pub over_slot: RwSignal<Option<usize>>,
    /// Row pressed but not yet moved past the threshold
    pub pending: RwSignal<Option<usize>>,
    /// Pointer position at mousedown
    pub start: RwSignal<(i32, i32)>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        over_slot: RwSignal::new(None),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl DndSignals {
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging.get() == Some(index)
    }

    pub fn is_over(&self, slot: usize) -> bool {
        self.dragging.get().is_some() && self.over_slot.get() == Some(slot)
    }

    fn reset(&self) {
        self.dragging.set(None);
        self.over_slot.set(None);
        self.pending.set(None);
    }
}

/// Move `items[from]` into `slot`. Returns false when nothing moved.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, slot: usize) -> bool {
    if from >= items.len() || slot > items.len() || slot == from || slot == from + 1 {
        return false;
    }
    let item = items.remove(from);
    let to = if slot > from { slot - 1 } else { slot };
    items.insert(to, item);
    true
}

/// Mousedown handler for a draggable row
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Let form controls keep their own mouse handling
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(index));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a drop slot
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.over_slot.set(Some(slot));
        }
    }
}

/// Mouseleave handler for a drop slot
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.over_slot.set(None);
        }
    }
}

/// Window listeners installed by [`bind_global_listeners`].
pub struct GlobalListeners {
    mousemove: WindowListenerHandle,
    mouseup: WindowListenerHandle,
}

impl GlobalListeners {
    pub fn remove(self) {
        self.mousemove.remove();
        self.mouseup.remove();
    }
}

/// Bind window mousemove/mouseup. `on_drop(from, slot)` fires on a real drag.
///
/// Remove the returned listeners when the owning component unmounts.
pub fn bind_global_listeners<F>(dnd: DndSignals, on_drop: F) -> GlobalListeners
where
    F: Fn(usize, usize) + 'static,
{
    let mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending.try_get_untracked().flatten() else {
            return;
        };
        if dnd.dragging.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging.set(Some(pending));
        }
    });

    let mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging.try_get_untracked() else {
            return;
        };
        let slot = dnd.over_slot.get_untracked();
        dnd.reset();
        if let (Some(from), Some(slot)) = (dragging, slot) {
            on_drop(from, slot);
        }
    });

    GlobalListeners { mousemove, mouseup }
}

#[cfg(test)]
mod tests {
    use super::reorder;

    #[test]
    fn test_reorder_moves_down() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(reorder(&mut v, 0, 3));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_reorder_moves_up_and_appends() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(reorder(&mut v, 3, 1));
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);

        assert!(reorder(&mut v, 0, 4));
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_reorder_noop_slots() {
        let mut v = vec![1, 2, 3];
        // Slots adjacent to the dragged row leave it in place
        assert!(!reorder(&mut v, 1, 1));
        assert!(!reorder(&mut v, 1, 2));
        assert!(!reorder(&mut v, 5, 0));
        assert!(!reorder(&mut v, 0, 9));
        assert_eq!(v, vec![1, 2, 3]);
    }
}
