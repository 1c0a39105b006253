//=========================================================================
// Platform Subsystem
//=========================================================================
//
// The windowing-layer boundary: opaque window handles and per-window
// notification-callback registration.
//
// Architecture:
// ```text
//  Windowing layer (winit)          Input core
//  ┌───────────────────────┐    ┌───────────────────────┐
//  │  WindowEvent stream   │    │  InputSystems (tick)  │
//  │   ↓                   │    │   ├─ installs bindings│
//  │  WinitBackend         │    │   │  via WindowBackend│
//  │   ↓ dispatch()        │    │   └─ copies live →    │
//  │  CallbackRouter ──────┼───▶│      frame-visible    │
//  │   (synchronous emit)  │    │  DeviceRegistry       │
//  └───────────────────────┘    └───────────────────────┘
// ```
//
// Key design decisions:
// - **Callbacks over polling**: the core installs per-window closures
//   exactly once; the windowing layer invokes them synchronously during
//   its event pump, matching the single-threaded contract of the tick
//   loop.
// - **Opaque handles**: `WindowHandle` is equality-comparable and
//   hashable, never dereferenced. A winit `WindowId` converts into one;
//   tests build them from raw integers.
// - **Native types at the boundary**: callbacks receive winit's
//   `PhysicalKey`/`ElementState`/`MouseButton` untranslated; semantic
//   translation happens inside the installed bindings (`key_map`).
//
//=========================================================================

//=== Submodules ==========================================================

pub mod key_map;

mod router;
mod winit_backend;

pub use router::CallbackRouter;
pub use winit_backend::WinitBackend;

//=== External Crates =====================================================

use winit::event::{ElementState, MouseButton as NativeButton};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

//=== WindowHandle ========================================================

/// Opaque identifier for a native window.
///
/// Used only as a map key into the device registry and as the link
/// between a window entity and its live state; this layer never
/// dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// Builds a handle from a raw identifier.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<WindowId> for WindowHandle {
    fn from(id: WindowId) -> Self {
        Self(u64::from(id))
    }
}

//=== Callback Types ======================================================

/// Key notification: native physical key plus press/release action.
pub type KeyCallback = Box<dyn FnMut(PhysicalKey, ElementState)>;

/// Character notification: one decoded codepoint.
pub type CharCallback = Box<dyn FnMut(char)>;

/// Cursor-move notification: window-space position in pixels.
pub type CursorCallback = Box<dyn FnMut(f64, f64)>;

/// Pointer-button notification: native button plus press/release action.
pub type ButtonCallback = Box<dyn FnMut(NativeButton, ElementState)>;

//=== WindowBackend =======================================================

/// Per-window notification-callback registration.
///
/// The input core calls each `set_*` method at most once per window, at
/// the moment the window is first observed without the corresponding
/// frame-visible component. Implementations must invoke the stored
/// callbacks synchronously from their event pump, on the same logical
/// thread that runs scheduled ticks.
pub trait WindowBackend {
    /// Installs the key press/release callback for a window.
    fn set_key_callback(&mut self, window: WindowHandle, callback: KeyCallback);

    /// Installs the character-input callback for a window.
    fn set_char_callback(&mut self, window: WindowHandle, callback: CharCallback);

    /// Installs the cursor-move callback for a window.
    fn set_cursor_callback(&mut self, window: WindowHandle, callback: CursorCallback);

    /// Installs the pointer-button callback for a window.
    fn set_button_callback(&mut self, window: WindowHandle, callback: ButtonCallback);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trips_raw_id() {
        let handle = WindowHandle::from_raw(42);
        assert_eq!(handle.as_raw(), 42);
    }

    #[test]
    fn handle_is_map_key_material() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(WindowHandle::from_raw(1), "a");
        map.insert(WindowHandle::from_raw(1), "b");
        assert_eq!(map.len(), 1);
        assert_eq!(map[&WindowHandle::from_raw(1)], "b");
    }

    #[test]
    fn handle_from_winit_window_id() {
        let id = WindowId::from(7u64);
        assert_eq!(WindowHandle::from(id), WindowHandle::from_raw(7));
    }
}
