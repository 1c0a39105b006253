//=========================================================================
// Callback Router
//=========================================================================
//
// In-process implementation of `WindowBackend`: a per-window table of
// installed notification callbacks plus the `emit_*` methods that make up
// the synchronous event-pump boundary.
//
// `WinitBackend` feeds it from real `WindowEvent`s; tests and headless
// embeddings call `emit_*` directly. Either way, an emit invokes the
// installed callback inline, on the caller's thread, before returning.
// That is the delivery contract the notification bindings assume.
//
// Emitting to a window with no installed callback is a defined no-op:
// events can race ahead of the first tick that installs bindings.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, trace};
use winit::event::{ElementState, MouseButton as NativeButton};
use winit::keyboard::PhysicalKey;

//=== Internal Dependencies ===============================================

use super::{ButtonCallback, CharCallback, CursorCallback, KeyCallback};
use super::{WindowBackend, WindowHandle};

//=== CallbackRouter ======================================================

#[derive(Default)]
struct WindowCallbacks {
    key: Option<KeyCallback>,
    character: Option<CharCallback>,
    cursor: Option<CursorCallback>,
    button: Option<ButtonCallback>,
}

/// Per-window callback table with synchronous event delivery.
pub struct CallbackRouter {
    windows: HashMap<WindowHandle, WindowCallbacks>,
}

impl CallbackRouter {
    /// Creates a router with no windows tracked.
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
        }
    }

    //--- Event Pump -------------------------------------------------------

    /// Delivers a key notification to the window's installed callback.
    pub fn emit_key(&mut self, window: WindowHandle, key: PhysicalKey, state: ElementState) {
        match self.windows.get_mut(&window).and_then(|w| w.key.as_mut()) {
            Some(callback) => callback(key, state),
            None => trace!(target: "platform", "key event for unbound window {:?}", window),
        }
    }

    /// Delivers a character notification to the window's installed callback.
    pub fn emit_char(&mut self, window: WindowHandle, character: char) {
        match self
            .windows
            .get_mut(&window)
            .and_then(|w| w.character.as_mut())
        {
            Some(callback) => callback(character),
            None => trace!(target: "platform", "char event for unbound window {:?}", window),
        }
    }

    /// Delivers a cursor-move notification to the window's installed callback.
    pub fn emit_cursor(&mut self, window: WindowHandle, x: f64, y: f64) {
        match self.windows.get_mut(&window).and_then(|w| w.cursor.as_mut()) {
            Some(callback) => callback(x, y),
            None => trace!(target: "platform", "cursor event for unbound window {:?}", window),
        }
    }

    /// Delivers a pointer-button notification to the window's installed callback.
    pub fn emit_button(&mut self, window: WindowHandle, button: NativeButton, state: ElementState) {
        match self.windows.get_mut(&window).and_then(|w| w.button.as_mut()) {
            Some(callback) => callback(button, state),
            None => trace!(target: "platform", "button event for unbound window {:?}", window),
        }
    }

    //--- Inspection -------------------------------------------------------

    /// Returns `true` if the window has a key callback installed.
    pub fn has_key_callback(&self, window: WindowHandle) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.key.is_some())
            .unwrap_or(false)
    }

    /// Returns `true` if the window has a cursor callback installed.
    pub fn has_cursor_callback(&self, window: WindowHandle) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.cursor.is_some())
            .unwrap_or(false)
    }

    //--- Internal Helpers -------------------------------------------------

    fn callbacks(&mut self, window: WindowHandle) -> &mut WindowCallbacks {
        self.windows.entry(window).or_default()
    }
}

impl Default for CallbackRouter {
    fn default() -> Self {
        Self::new()
    }
}

//--- WindowBackend Implementation ----------------------------------------

impl WindowBackend for CallbackRouter {
    fn set_key_callback(&mut self, window: WindowHandle, callback: KeyCallback) {
        let slot = &mut self.callbacks(window).key;
        if slot.is_some() {
            // The core installs at most once per window; a second install
            // indicates a lifecycle bug upstream.
            debug!(target: "platform", "key callback replaced on window {:?}", window);
        }
        *slot = Some(callback);
    }

    fn set_char_callback(&mut self, window: WindowHandle, callback: CharCallback) {
        self.callbacks(window).character = Some(callback);
    }

    fn set_cursor_callback(&mut self, window: WindowHandle, callback: CursorCallback) {
        let slot = &mut self.callbacks(window).cursor;
        if slot.is_some() {
            debug!(target: "platform", "cursor callback replaced on window {:?}", window);
        }
        *slot = Some(callback);
    }

    fn set_button_callback(&mut self, window: WindowHandle, callback: ButtonCallback) {
        self.callbacks(window).button = Some(callback);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use winit::keyboard::KeyCode as NativeKey;

    fn window(id: u64) -> WindowHandle {
        WindowHandle::from_raw(id)
    }

    #[test]
    fn emit_invokes_installed_callback_synchronously() {
        let mut router = CallbackRouter::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        router.set_key_callback(
            window(1),
            Box::new(move |key, state| log.borrow_mut().push((key, state))),
        );

        router.emit_key(
            window(1),
            PhysicalKey::Code(NativeKey::KeyA),
            ElementState::Pressed,
        );

        // Delivery completed before emit returned
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn emit_to_unbound_window_is_noop() {
        let mut router = CallbackRouter::new();
        router.emit_key(
            window(9),
            PhysicalKey::Code(NativeKey::KeyA),
            ElementState::Pressed,
        );
        router.emit_char(window(9), 'x');
        router.emit_cursor(window(9), 1.0, 2.0);
        router.emit_button(window(9), NativeButton::Left, ElementState::Pressed);
    }

    #[test]
    fn callbacks_are_per_window() {
        let mut router = CallbackRouter::new();
        let chars = Rc::new(RefCell::new(String::new()));

        let sink = Rc::clone(&chars);
        router.set_char_callback(window(1), Box::new(move |c| sink.borrow_mut().push(c)));

        router.emit_char(window(2), 'a'); // different window, dropped
        router.emit_char(window(1), 'b');

        assert_eq!(*chars.borrow(), "b");
    }

    #[test]
    fn has_key_callback_reflects_installation() {
        let mut router = CallbackRouter::new();
        assert!(!router.has_key_callback(window(1)));

        router.set_key_callback(window(1), Box::new(|_, _| {}));
        assert!(router.has_key_callback(window(1)));
        assert!(!router.has_key_callback(window(2)));
    }

    #[test]
    fn cursor_emit_passes_coordinates() {
        let mut router = CallbackRouter::new();
        let position = Rc::new(RefCell::new((0.0, 0.0)));

        let sink = Rc::clone(&position);
        router.set_cursor_callback(
            window(1),
            Box::new(move |x, y| *sink.borrow_mut() = (x, y)),
        );

        router.emit_cursor(window(1), 320.0, 240.0);
        assert_eq!(*position.borrow(), (320.0, 240.0));
    }
}
