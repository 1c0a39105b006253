//=========================================================================
// Input Synchronization Systems
//=========================================================================
//
// Reconciles two timing domains: notification callbacks that fire at
// arbitrary points between ticks (writing live state into the
// `DeviceRegistry`) and the once-per-tick read that publishes
// frame-visible components and edge events to the entity store.
//
// Tick order, per invocation:
//   1. Attach-if-missing: windows without a frame-visible keyboard
//      (resp. pointer) component gain a zeroed one and have their
//      notification bindings installed, exactly once per window.
//   2. Clear prior events: every KeyTransition entity is destroyed,
//      read or not, before any new one exists.
//   3. Keyboard sync with diffing: per-key comparison of frame-visible
//      vs. live state emits one KeyTransition per changed key, then the
//      live snapshot (including buffered text) overwrites the component
//      and the live text buffer is cleared.
//   4. Pointer sync: live state overwrites the component, no diffing.
//
// Readers observing the store between ticks therefore see either the
// previous tick's complete event set or nothing, never a mix. A key
// pressed and released between two ticks nets zero visible change and
// emits nothing; only level state is sampled.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod keys;
pub mod state;

mod bindings;
mod registry;

pub use self::registry::DeviceRegistry;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::scheduler::{Scheduler, TickHandle};
use crate::core::store::EntityStore;
use crate::platform::{WindowBackend, WindowHandle};
use self::keys::Key;
use self::state::{KeyTransition, KeyboardState, PointerState, TransitionKind, WindowRef};

//=== InputSystems ========================================================

/// Owner of the device registry and the per-tick synchronization pipeline.
///
/// Construction registers the tick with the scheduler; dropping the value
/// deregisters it. The registry outlives individual windows: entries are
/// only removed through [`DeviceRegistry::release`], which the embedding
/// application's window-teardown path must call.
pub struct InputSystems {
    registry: Rc<RefCell<DeviceRegistry>>,
    scheduler: Rc<RefCell<Scheduler>>,
    tick_handle: Option<TickHandle>,
}

impl InputSystems {
    //--- Construction -----------------------------------------------------

    /// Creates the systems and schedules the synchronization tick.
    ///
    /// The store and backend are shared with the scheduled closure; the
    /// caller keeps its own handles for spawning windows and pumping
    /// events.
    pub fn new(
        store: Rc<RefCell<EntityStore>>,
        backend: Rc<RefCell<dyn WindowBackend>>,
        scheduler: Rc<RefCell<Scheduler>>,
    ) -> Self {
        let registry = Rc::new(RefCell::new(DeviceRegistry::new()));

        let tick_registry = Rc::clone(&registry);
        let tick_handle = scheduler.borrow_mut().schedule(move || {
            let mut store = store.borrow_mut();
            let mut backend = backend.borrow_mut();
            run_tick(&tick_registry, &mut store, &mut *backend);
        });

        Self {
            registry,
            scheduler,
            tick_handle: Some(tick_handle),
        }
    }

    //--- Direct Drive -----------------------------------------------------

    /// Runs one synchronization tick immediately.
    ///
    /// For embedders that drive frames themselves instead of going
    /// through the scheduler.
    pub fn tick(&self, store: &mut EntityStore, backend: &mut dyn WindowBackend) {
        run_tick(&self.registry, store, backend);
    }

    //--- Registry Access --------------------------------------------------

    /// Shared handle to the device registry.
    ///
    /// Needed by the window-destruction path to call
    /// [`DeviceRegistry::release`].
    pub fn registry(&self) -> &Rc<RefCell<DeviceRegistry>> {
        &self.registry
    }
}

impl Drop for InputSystems {
    fn drop(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.borrow_mut().unschedule(handle);
        }
    }
}

//=== Synchronization Pipeline ============================================

fn run_tick(
    registry: &Rc<RefCell<DeviceRegistry>>,
    store: &mut EntityStore,
    backend: &mut dyn WindowBackend,
) {
    attach_missing(registry, store, backend);
    clear_transitions(store);
    sync_keyboards(registry, store);
    sync_pointers(registry, store);
}

//--- Step 1: Attach-If-Missing --------------------------------------------

fn attach_missing(
    registry: &Rc<RefCell<DeviceRegistry>>,
    store: &mut EntityStore,
    backend: &mut dyn WindowBackend,
) {
    for entity in store.entities_with_excluding::<WindowRef, KeyboardState>() {
        let Some(handle) = window_handle(store, entity) else {
            continue;
        };
        store.attach(entity, KeyboardState::new());
        bindings::install_keyboard(backend, handle, registry);
        trace!(target: "input", "keyboard bound to window {:?}", handle);
    }

    for entity in store.entities_with_excluding::<WindowRef, PointerState>() {
        let Some(handle) = window_handle(store, entity) else {
            continue;
        };
        store.attach(entity, PointerState::new());
        bindings::install_pointer(backend, handle, registry);
        trace!(target: "input", "pointer bound to window {:?}", handle);
    }
}

//--- Step 2: Clear Prior Events -------------------------------------------

fn clear_transitions(store: &mut EntityStore) {
    for entity in store.entities_with::<KeyTransition>() {
        store.despawn(entity);
    }
}

//--- Step 3: Keyboard Sync With Diffing -----------------------------------

fn sync_keyboards(registry: &Rc<RefCell<DeviceRegistry>>, store: &mut EntityStore) {
    for (entity, handle) in bound_windows::<KeyboardState>(store) {
        // Snapshot the live record, draining its text buffer; the
        // snapshot carries the pre-clear contents to the component.
        let snapshot = {
            let mut devices = registry.borrow_mut();
            let live = devices.live_keyboard(handle);
            let snapshot = live.clone();
            live.clear_text();
            snapshot
        };

        let mut changed = Vec::new();
        if let Some(visible) = store.get::<KeyboardState>(entity) {
            for key in Key::ALL {
                if visible.is_key_down(key) != snapshot.is_key_down(key) {
                    let kind = if snapshot.is_key_down(key) {
                        TransitionKind::Pressed
                    } else {
                        TransitionKind::Released
                    };
                    changed.push(KeyTransition { key, kind });
                }
            }
        }

        if !changed.is_empty() {
            debug!(
                target: "input::sync",
                "{} key transition(s) on window {:?}",
                changed.len(),
                handle
            );
        }
        for transition in changed {
            let event = store.spawn();
            store.attach(event, transition);
        }

        store.attach(entity, snapshot);
    }
}

//--- Step 4: Pointer Sync (No Diffing) ------------------------------------

fn sync_pointers(registry: &Rc<RefCell<DeviceRegistry>>, store: &mut EntityStore) {
    for (entity, handle) in bound_windows::<PointerState>(store) {
        let snapshot = *registry.borrow_mut().live_pointer(handle);
        store.attach(entity, snapshot);
    }
}

//--- Internal Helpers -----------------------------------------------------

fn window_handle(store: &EntityStore, entity: crate::core::store::Entity) -> Option<WindowHandle> {
    store.get::<WindowRef>(entity).map(|window| window.handle)
}

fn bound_windows<T: 'static>(
    store: &EntityStore,
) -> Vec<(crate::core::store::Entity, WindowHandle)> {
    store
        .entities_with::<WindowRef>()
        .into_iter()
        .filter(|entity| store.has::<T>(*entity))
        .filter_map(|entity| window_handle(store, entity).map(|handle| (entity, handle)))
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================
