//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cinder_input::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Input systems and device state
pub use crate::core::input::keys::{Key, PointerButton};
pub use crate::core::input::state::{
    KeyTransition, KeyboardState, PointerState, TransitionKind, WindowRef,
};
pub use crate::core::input::{DeviceRegistry, InputSystems};

// Entity storage and scheduling
pub use crate::core::scheduler::{Scheduler, TickHandle};
pub use crate::core::store::{Entity, EntityStore};

// Platform boundary
pub use crate::platform::{CallbackRouter, WindowBackend, WindowHandle, WinitBackend};
