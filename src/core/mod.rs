//=========================================================================
// Core Subsystems
//=========================================================================
//
// The windowing-independent half of the crate: entity/component storage,
// the tick scheduler, and the input synchronization systems built on
// both.
//
// Everything here runs on one logical thread. State crosses the
// platform boundary only through the notification bindings the input
// systems install, never through shared mutation.
//
//=========================================================================

pub mod input;
pub mod scheduler;
pub mod store;
