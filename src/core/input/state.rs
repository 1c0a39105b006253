//=========================================================================
// Device State & Event Types
//=========================================================================
//
// The data carried through the synchronization pipeline. The same record
// types serve two roles: as live state inside the `DeviceRegistry`,
// mutated by notification bindings between ticks, and as frame-visible
// components in the entity store, overwritten once per tick and stable
// for the rest of the frame.
//
// Mutators are `pub(crate)`: only the bindings and the tick pipeline
// write these records. Readers outside the crate get the query surface.
//
//=========================================================================

use super::keys::{Key, PointerButton};
use crate::platform::WindowHandle;

//=== WindowRef ===========================================================

/// Component linking a window entity to its native handle.
///
/// Its presence marks an entity as a window the input pipeline should
/// service; the first tick that sees it attaches the device components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef {
    pub handle: WindowHandle,
}

//=== KeyboardState =======================================================

/// Level state of every key plus the text decoded since the last tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [bool; Key::COUNT],
    text: String,
}

impl KeyboardState {
    /// All keys up, empty text buffer.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the key is held down.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    /// Iterates the keys currently held down, in discriminant order.
    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|key| self.keys[key.index()])
    }

    /// Text decoded from keystrokes, in arrival order.
    pub fn text(&self) -> &str {
        &self.text
    }

    //--- Mutators ---------------------------------------------------------

    pub(crate) fn set_key(&mut self, key: Key, down: bool) {
        self.keys[key.index()] = down;
    }

    pub(crate) fn push_char(&mut self, character: char) {
        self.text.push(character);
    }

    /// Drains the text buffer, leaving key level state untouched.
    pub(crate) fn clear_text(&mut self) {
        self.text.clear();
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            keys: [false; Key::COUNT],
            text: String::new(),
        }
    }
}

//=== PointerState ========================================================

/// Cursor position in window-space pixels plus button level state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    x: f32,
    y: f32,
    buttons: [bool; PointerButton::COUNT],
}

impl PointerState {
    /// Origin position, all buttons up.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    /// Cursor position relative to the window's top-left corner.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Returns `true` if the button is held down.
    pub fn is_button_down(&self, button: PointerButton) -> bool {
        self.buttons[button.index()]
    }

    //--- Mutators ---------------------------------------------------------

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_button(&mut self, button: PointerButton, down: bool) {
        self.buttons[button.index()] = down;
    }
}

//=== Key Transitions =====================================================

/// Direction of a key edge observed between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Pressed,
    Released,
}

/// One key edge, published as its own event entity for exactly one tick.
///
/// Carries no window association; consumers needing per-window edges
/// compare the window's `KeyboardState` across frames instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyTransition {
    pub key: Key,
    pub kind: TransitionKind,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_keyboard_is_fully_released() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.keys_down().next().is_none());
        assert!(keyboard.text().is_empty());
    }

    #[test]
    fn set_key_is_observable_and_reversible() {
        let mut keyboard = KeyboardState::new();
        keyboard.set_key(Key::KeyW, true);
        assert!(keyboard.is_key_down(Key::KeyW));
        assert_eq!(keyboard.keys_down().collect::<Vec<_>>(), vec![Key::KeyW]);

        keyboard.set_key(Key::KeyW, false);
        assert!(!keyboard.is_key_down(Key::KeyW));
    }

    #[test]
    fn clear_text_leaves_key_state() {
        let mut keyboard = KeyboardState::new();
        keyboard.set_key(Key::Space, true);
        keyboard.push_char('x');

        keyboard.clear_text();
        assert!(keyboard.text().is_empty());
        assert!(keyboard.is_key_down(Key::Space));
    }

    #[test]
    fn text_preserves_arrival_order() {
        let mut keyboard = KeyboardState::new();
        for character in "abc".chars() {
            keyboard.push_char(character);
        }
        assert_eq!(keyboard.text(), "abc");
    }

    #[test]
    fn fresh_pointer_is_at_origin() {
        let pointer = PointerState::new();
        assert_eq!(pointer.position(), (0.0, 0.0));
        for button in PointerButton::ALL {
            assert!(!pointer.is_button_down(button));
        }
    }

    #[test]
    fn pointer_tracks_position_and_buttons() {
        let mut pointer = PointerState::new();
        pointer.set_position(12.5, 34.0);
        pointer.set_button(PointerButton::Right, true);

        assert_eq!(pointer.position(), (12.5, 34.0));
        assert!(pointer.is_button_down(PointerButton::Right));
        assert!(!pointer.is_button_down(PointerButton::Left));
    }
}
