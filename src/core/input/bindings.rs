//=========================================================================
// Notification Bindings
//=========================================================================
//
// Installs the per-window callbacks that translate native notifications
// and write level state into the device registry.
//
// Each closure captures two things explicitly: a shared handle to the
// registry and the window handle it serves. There is no global lookup;
// the registry's ownership stays with `InputSystems` and the bindings
// borrow it only for the duration of one notification.
//
// Behavior per event kind:
// - Key: translate; recognized codes set level state, others are dropped
// - Character: appended to the live text buffer unconditionally
// - Cursor move: overwrites live position
// - Button: translate; recognized buttons set level state, others dropped
//
// Bindings run synchronously inside the backend's event pump and never
// block; the text buffer is the only growth and is drained every tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

//=== Internal Dependencies ===============================================

use super::registry::DeviceRegistry;
use crate::platform::{key_map, WindowBackend, WindowHandle};

//=== Keyboard Bindings ===================================================

/// Installs key and character callbacks for one window.
pub(super) fn install_keyboard(
    backend: &mut dyn WindowBackend,
    window: WindowHandle,
    registry: &Rc<RefCell<DeviceRegistry>>,
) {
    let keys = Rc::clone(registry);
    backend.set_key_callback(
        window,
        Box::new(move |physical, state| match key_map::key_from_physical(physical) {
            Some(key) => {
                keys.borrow_mut()
                    .live_keyboard(window)
                    .set_key(key, state.is_pressed());
            }
            None => {
                trace!(target: "input", "dropping unmapped key {:?}", physical);
            }
        }),
    );

    let text = Rc::clone(registry);
    backend.set_char_callback(
        window,
        Box::new(move |character| {
            text.borrow_mut().live_keyboard(window).push_char(character);
        }),
    );
}

//=== Pointer Bindings ====================================================

/// Installs cursor-move and button callbacks for one window.
pub(super) fn install_pointer(
    backend: &mut dyn WindowBackend,
    window: WindowHandle,
    registry: &Rc<RefCell<DeviceRegistry>>,
) {
    let cursor = Rc::clone(registry);
    backend.set_cursor_callback(
        window,
        Box::new(move |x, y| {
            cursor
                .borrow_mut()
                .live_pointer(window)
                .set_position(x as f32, y as f32);
        }),
    );

    let buttons = Rc::clone(registry);
    backend.set_button_callback(
        window,
        Box::new(move |native, state| match key_map::button_from_native(native) {
            Some(button) => {
                buttons
                    .borrow_mut()
                    .live_pointer(window)
                    .set_button(button, state.is_pressed());
            }
            None => {
                trace!(target: "input", "dropping unmapped button {:?}", native);
            }
        }),
    );
}

//=========================================================================
// Unit Tests
//=========================================================================
