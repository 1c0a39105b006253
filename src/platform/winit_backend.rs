//=========================================================================
// Winit Backend
//=========================================================================
//
// Adapts winit's centralized `WindowEvent` stream to the per-window
// callback model of `WindowBackend`.
//
// An application's `ApplicationHandler::window_event` forwards each event
// here; `dispatch` routes the input-relevant ones to the callbacks the
// core installed for that window, synchronously, on the event-loop
// thread. winit has no separate character event, so the text payload of a
// `KeyEvent` is fanned out to the character callback, one codepoint at a
// time, on press.
//
// Everything else (resize, focus, redraw) is ignored; window lifecycle is
// the embedding application's business.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::event::WindowEvent;
use winit::window::WindowId;

//=== Internal Dependencies ===============================================

use super::{ButtonCallback, CallbackRouter, CharCallback, CursorCallback, KeyCallback};
use super::{WindowBackend, WindowHandle};

//=== WinitBackend ========================================================

/// `WindowBackend` over a winit event loop.
pub struct WinitBackend {
    router: CallbackRouter,
}

impl WinitBackend {
    /// Creates a backend with no windows tracked.
    pub fn new() -> Self {
        Self {
            router: CallbackRouter::new(),
        }
    }

    //--- Event Routing ----------------------------------------------------

    /// Routes one window event to the installed callbacks.
    ///
    /// Call from `ApplicationHandler::window_event`. Non-input events are
    /// ignored.
    pub fn dispatch(&mut self, window_id: WindowId, event: &WindowEvent) {
        let window = WindowHandle::from(window_id);

        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.router
                    .emit_key(window, key_event.physical_key, key_event.state);

                // Decoded text only accompanies presses; releases carry none.
                if key_event.state.is_pressed() {
                    if let Some(text) = &key_event.text {
                        for character in text.chars() {
                            self.router.emit_char(window, character);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.router.emit_cursor(window, position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.router.emit_button(window, *button, *state);
            }

            _ => {
                trace!(target: "platform", "ignoring non-input event for {:?}", window);
            }
        }
    }
}

impl Default for WinitBackend {
    fn default() -> Self {
        Self::new()
    }
}

//--- WindowBackend Implementation ----------------------------------------

impl WindowBackend for WinitBackend {
    fn set_key_callback(&mut self, window: WindowHandle, callback: KeyCallback) {
        self.router.set_key_callback(window, callback);
    }

    fn set_char_callback(&mut self, window: WindowHandle, callback: CharCallback) {
        self.router.set_char_callback(window, callback);
    }

    fn set_cursor_callback(&mut self, window: WindowHandle, callback: CursorCallback) {
        self.router.set_cursor_callback(window, callback);
    }

    fn set_button_callback(&mut self, window: WindowHandle, callback: ButtonCallback) {
        self.router.set_button_callback(window, callback);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
//
// `KeyEvent` and `DeviceId` cannot be constructed outside winit, so
// `dispatch` is exercised through the embedding application; these tests
// cover the registration surface.
//
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use winit::event::ElementState;
    use winit::keyboard::{KeyCode as NativeKey, PhysicalKey};

    #[test]
    fn registration_delegates_to_router() {
        let mut backend = WinitBackend::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        backend.set_key_callback(
            WindowHandle::from_raw(1),
            Box::new(move |_, _| counter.set(counter.get() + 1)),
        );

        backend.router.emit_key(
            WindowHandle::from_raw(1),
            PhysicalKey::Code(NativeKey::KeyA),
            ElementState::Pressed,
        );
        assert_eq!(hits.get(), 1);
    }
}
