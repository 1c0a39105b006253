//=========================================================================
// Semantic Input Codes
//=========================================================================
//
// Windowing-layer-independent identifiers for keyboard keys and pointer
// buttons. The platform translation tables map native codes onto these;
// everything above the platform boundary speaks only in them.
//
// Discriminants are dense and start at zero, so a `Key` doubles as an
// index into fixed-size level-state arrays. `ALL` lists every variant in
// discriminant order for diffing and iteration.
//
//=========================================================================

//=== Key =================================================================

/// Physical keyboard key, by position rather than by produced character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    //--- Printable keys ---------------------------------------------------
    Space,
    Quote,
    Comma,
    Minus,
    Period,
    Slash,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Semicolon,
    Equal,
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    BracketLeft,
    Backslash,
    BracketRight,
    Backquote,
    World1,
    World2,

    //--- Control & navigation keys ----------------------------------------
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    //--- Function keys ----------------------------------------------------
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,

    //--- Keypad keys ------------------------------------------------------
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadDecimal,
    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadEnter,
    NumpadEqual,

    //--- Modifier keys ----------------------------------------------------
    ShiftLeft,
    ControlLeft,
    AltLeft,
    SuperLeft,
    ShiftRight,
    ControlRight,
    AltRight,
    SuperRight,
    Menu,
}

impl Key {
    /// Number of key variants; sizes the level-state arrays.
    pub const COUNT: usize = Key::Menu as usize + 1;

    /// Every key, in discriminant order.
    pub const ALL: [Key; Key::COUNT] = [
        Key::Space,
        Key::Quote,
        Key::Comma,
        Key::Minus,
        Key::Period,
        Key::Slash,
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::Semicolon,
        Key::Equal,
        Key::KeyA,
        Key::KeyB,
        Key::KeyC,
        Key::KeyD,
        Key::KeyE,
        Key::KeyF,
        Key::KeyG,
        Key::KeyH,
        Key::KeyI,
        Key::KeyJ,
        Key::KeyK,
        Key::KeyL,
        Key::KeyM,
        Key::KeyN,
        Key::KeyO,
        Key::KeyP,
        Key::KeyQ,
        Key::KeyR,
        Key::KeyS,
        Key::KeyT,
        Key::KeyU,
        Key::KeyV,
        Key::KeyW,
        Key::KeyX,
        Key::KeyY,
        Key::KeyZ,
        Key::BracketLeft,
        Key::Backslash,
        Key::BracketRight,
        Key::Backquote,
        Key::World1,
        Key::World2,
        Key::Escape,
        Key::Enter,
        Key::Tab,
        Key::Backspace,
        Key::Insert,
        Key::Delete,
        Key::ArrowRight,
        Key::ArrowLeft,
        Key::ArrowDown,
        Key::ArrowUp,
        Key::PageUp,
        Key::PageDown,
        Key::Home,
        Key::End,
        Key::CapsLock,
        Key::ScrollLock,
        Key::NumLock,
        Key::PrintScreen,
        Key::Pause,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::F13,
        Key::F14,
        Key::F15,
        Key::F16,
        Key::F17,
        Key::F18,
        Key::F19,
        Key::F20,
        Key::F21,
        Key::F22,
        Key::F23,
        Key::F24,
        Key::F25,
        Key::Numpad0,
        Key::Numpad1,
        Key::Numpad2,
        Key::Numpad3,
        Key::Numpad4,
        Key::Numpad5,
        Key::Numpad6,
        Key::Numpad7,
        Key::Numpad8,
        Key::Numpad9,
        Key::NumpadDecimal,
        Key::NumpadDivide,
        Key::NumpadMultiply,
        Key::NumpadSubtract,
        Key::NumpadAdd,
        Key::NumpadEnter,
        Key::NumpadEqual,
        Key::ShiftLeft,
        Key::ControlLeft,
        Key::AltLeft,
        Key::SuperLeft,
        Key::ShiftRight,
        Key::ControlRight,
        Key::AltRight,
        Key::SuperRight,
        Key::Menu,
    ];

    /// Index into a level-state array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

//=== PointerButton =======================================================

/// Pointer button with tracked level state. Side and extended buttons are
/// outside the table and dropped at translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl PointerButton {
    /// Number of button variants; sizes the level-state array.
    pub const COUNT: usize = PointerButton::Middle as usize + 1;

    /// Every button, in discriminant order.
    pub const ALL: [PointerButton; PointerButton::COUNT] = [
        PointerButton::Left,
        PointerButton::Right,
        PointerButton::Middle,
    ];

    /// Index into a level-state array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_are_dense_and_ordered() {
        for (position, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), position);
        }
        assert_eq!(Key::ALL.len(), Key::COUNT);
    }

    #[test]
    fn button_indices_are_dense_and_ordered() {
        for (position, button) in PointerButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), position);
        }
        assert_eq!(PointerButton::ALL.len(), PointerButton::COUNT);
    }

    #[test]
    fn boundary_discriminants() {
        assert_eq!(Key::Space.index(), 0);
        assert_eq!(Key::Menu.index(), Key::COUNT - 1);
        assert_eq!(PointerButton::Left.index(), 0);
        assert_eq!(PointerButton::Middle.index(), PointerButton::COUNT - 1);
    }
}
