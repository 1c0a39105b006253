//=========================================================================
// Cinder Input -- Library Root
//
// Frame-coherent input state synchronization for windowed real-time
// applications.
//
// Responsibilities:
// - Track live keyboard and pointer state per window as notifications
//   arrive from the windowing layer
// - Publish frame-visible device components and one-tick key transition
//   events to an entity store, once per scheduled tick
// - Keep the platform boundary behind `WindowBackend`, with a winit
//   adapter provided
//
// Typical usage:
// ```no_run
// use std::cell::RefCell;
// use std::rc::Rc;
// use cinder_input::prelude::*;
//
// let store = Rc::new(RefCell::new(EntityStore::new()));
// let backend = Rc::new(RefCell::new(WinitBackend::new()));
// let scheduler = Rc::new(RefCell::new(Scheduler::new()));
//
// let erased: Rc<RefCell<dyn WindowBackend>> = Rc::clone(&backend);
// let _input = InputSystems::new(Rc::clone(&store), erased, Rc::clone(&scheduler));
//
// // per frame, after pumping window events through `backend.dispatch`:
// scheduler.borrow_mut().run_tick();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the entity store, scheduler, and input systems. `platform`
// holds the windowing boundary; it is public because embedders implement
// `WindowBackend` and feed `WinitBackend::dispatch` themselves.
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// The entry point most applications need directly.
//
pub use crate::core::input::InputSystems;
