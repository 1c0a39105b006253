//=========================================================================
// Native Code Translation Tables
//=========================================================================
//
// Maps winit's native key and button identifiers to the semantic codes in
// `core::input::keys`.
//
// Every function here is total, deterministic, and side-effect-free.
// Unrecognized input is not an error: it returns `None` and the caller
// drops the notification with no state change. That covers both
// `PhysicalKey::Unidentified` (code outside the valid native range) and
// codes the table deliberately omits (media keys, IME keys, F26+).
//
// `World1`/`World2` have no reliable winit equivalent and stay unmapped
// rather than guessed.
//
//=========================================================================

//=== External Crates =====================================================

use winit::event::MouseButton as NativeButton;
use winit::keyboard::{KeyCode as NativeKey, PhysicalKey};

//=== Internal Imports ====================================================

use crate::core::input::keys::{Key, PointerButton};

//=== Key Translation =====================================================

/// Translates a native physical key, or `None` if unrecognized.
pub fn key_from_physical(physical: PhysicalKey) -> Option<Key> {
    match physical {
        PhysicalKey::Code(code) => key_from_code(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Translates a native key code, or `None` if the table omits it.
pub fn key_from_code(code: NativeKey) -> Option<Key> {
    use NativeKey::*;
    let key = match code {
        //--- Printable keys -----------------------------------------------
        Space => Key::Space,
        Quote => Key::Quote,
        Comma => Key::Comma,
        Minus => Key::Minus,
        Period => Key::Period,
        Slash => Key::Slash,
        Digit0 => Key::Digit0, Digit1 => Key::Digit1,
        Digit2 => Key::Digit2, Digit3 => Key::Digit3,
        Digit4 => Key::Digit4, Digit5 => Key::Digit5,
        Digit6 => Key::Digit6, Digit7 => Key::Digit7,
        Digit8 => Key::Digit8, Digit9 => Key::Digit9,
        Semicolon => Key::Semicolon,
        Equal => Key::Equal,
        KeyA => Key::KeyA, KeyB => Key::KeyB, KeyC => Key::KeyC,
        KeyD => Key::KeyD, KeyE => Key::KeyE, KeyF => Key::KeyF,
        KeyG => Key::KeyG, KeyH => Key::KeyH, KeyI => Key::KeyI,
        KeyJ => Key::KeyJ, KeyK => Key::KeyK, KeyL => Key::KeyL,
        KeyM => Key::KeyM, KeyN => Key::KeyN, KeyO => Key::KeyO,
        KeyP => Key::KeyP, KeyQ => Key::KeyQ, KeyR => Key::KeyR,
        KeyS => Key::KeyS, KeyT => Key::KeyT, KeyU => Key::KeyU,
        KeyV => Key::KeyV, KeyW => Key::KeyW, KeyX => Key::KeyX,
        KeyY => Key::KeyY, KeyZ => Key::KeyZ,
        BracketLeft => Key::BracketLeft,
        Backslash => Key::Backslash,
        BracketRight => Key::BracketRight,
        Backquote => Key::Backquote,

        //--- Control & navigation keys ------------------------------------
        Escape => Key::Escape,
        Enter => Key::Enter,
        Tab => Key::Tab,
        Backspace => Key::Backspace,
        Insert => Key::Insert,
        Delete => Key::Delete,
        ArrowRight => Key::ArrowRight, ArrowLeft => Key::ArrowLeft,
        ArrowDown => Key::ArrowDown, ArrowUp => Key::ArrowUp,
        PageUp => Key::PageUp,
        PageDown => Key::PageDown,
        Home => Key::Home,
        End => Key::End,
        CapsLock => Key::CapsLock,
        ScrollLock => Key::ScrollLock,
        NumLock => Key::NumLock,
        PrintScreen => Key::PrintScreen,
        Pause => Key::Pause,

        //--- Function keys ------------------------------------------------
        F1 => Key::F1, F2 => Key::F2, F3 => Key::F3, F4 => Key::F4,
        F5 => Key::F5, F6 => Key::F6, F7 => Key::F7, F8 => Key::F8,
        F9 => Key::F9, F10 => Key::F10, F11 => Key::F11, F12 => Key::F12,
        F13 => Key::F13, F14 => Key::F14, F15 => Key::F15, F16 => Key::F16,
        F17 => Key::F17, F18 => Key::F18, F19 => Key::F19, F20 => Key::F20,
        F21 => Key::F21, F22 => Key::F22, F23 => Key::F23, F24 => Key::F24,
        F25 => Key::F25,

        //--- Keypad keys --------------------------------------------------
        Numpad0 => Key::Numpad0, Numpad1 => Key::Numpad1,
        Numpad2 => Key::Numpad2, Numpad3 => Key::Numpad3,
        Numpad4 => Key::Numpad4, Numpad5 => Key::Numpad5,
        Numpad6 => Key::Numpad6, Numpad7 => Key::Numpad7,
        Numpad8 => Key::Numpad8, Numpad9 => Key::Numpad9,
        NumpadDecimal => Key::NumpadDecimal,
        NumpadDivide => Key::NumpadDivide,
        NumpadMultiply => Key::NumpadMultiply,
        NumpadSubtract => Key::NumpadSubtract,
        NumpadAdd => Key::NumpadAdd,
        NumpadEnter => Key::NumpadEnter,
        NumpadEqual => Key::NumpadEqual,

        //--- Modifier keys ------------------------------------------------
        ShiftLeft => Key::ShiftLeft,
        ControlLeft => Key::ControlLeft,
        AltLeft => Key::AltLeft,
        SuperLeft => Key::SuperLeft,
        ShiftRight => Key::ShiftRight,
        ControlRight => Key::ControlRight,
        AltRight => Key::AltRight,
        SuperRight => Key::SuperRight,
        ContextMenu => Key::Menu,

        //--- Fallback -----------------------------------------------------
        _ => return None,
    };

    Some(key)
}

//=== Button Translation ==================================================

/// Translates a native pointer button, or `None` for side/other buttons.
pub fn button_from_native(button: NativeButton) -> Option<PointerButton> {
    match button {
        NativeButton::Left => Some(PointerButton::Left),
        NativeButton::Right => Some(PointerButton::Right),
        NativeButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
