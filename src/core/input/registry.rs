//=========================================================================
// Device Registry
//=========================================================================
//
// Holds the live (between-tick) device records, keyed by window handle.
// Notification bindings write here as events arrive; the tick pipeline
// reads and snapshots from here once per frame.
//
// Lookups create on first touch, so a binding firing before the window's
// first tick still has a record to write into. Entries persist until
// `release` is called from the window-teardown path; a handle reused by
// the windowing layer after release starts from zeroed state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::state::{KeyboardState, PointerState};
use crate::platform::WindowHandle;

//=== DeviceRegistry ======================================================

/// Live per-window device state, mutated between ticks.
pub struct DeviceRegistry {
    keyboards: HashMap<WindowHandle, KeyboardState>,
    pointers: HashMap<WindowHandle, PointerState>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            keyboards: HashMap::new(),
            pointers: HashMap::new(),
        }
    }

    //--- Live Access ------------------------------------------------------

    /// Live keyboard record for a window, created zeroed on first touch.
    pub fn live_keyboard(&mut self, window: WindowHandle) -> &mut KeyboardState {
        self.keyboards.entry(window).or_default()
    }

    /// Live pointer record for a window, created zeroed on first touch.
    pub fn live_pointer(&mut self, window: WindowHandle) -> &mut PointerState {
        self.pointers.entry(window).or_default()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Discards all live state for a window.
    ///
    /// Call when the native window is destroyed; otherwise a recycled
    /// handle would inherit the dead window's state.
    pub fn release(&mut self, window: WindowHandle) {
        let keyboard = self.keyboards.remove(&window).is_some();
        let pointer = self.pointers.remove(&window).is_some();
        if keyboard || pointer {
            debug!(target: "input", "released device state for window {:?}", window);
        }
    }

    //--- Inspection -------------------------------------------------------

    /// Windows with a live keyboard record, in no particular order.
    pub fn tracked_keyboards(&self) -> impl Iterator<Item = WindowHandle> + '_ {
        self.keyboards.keys().copied()
    }

    /// Windows with a live pointer record, in no particular order.
    pub fn tracked_pointers(&self) -> impl Iterator<Item = WindowHandle> + '_ {
        self.pointers.keys().copied()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
