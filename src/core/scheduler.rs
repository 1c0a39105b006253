//=========================================================================
// Tick Scheduler
//=========================================================================
//
// Registry of per-frame callbacks, run in registration order by the
// embedding application's frame loop.
//
// Handles are consumed by `unschedule`, so a registration can be torn
// down at most once. `run_tick` is not reentrant: scheduling or
// unscheduling from inside a running callback would alias the entry
// list, and the borrow discipline of the owning `RefCell` enforces that
// at runtime.
//
//=========================================================================

use log::debug;

//=== TickHandle ==========================================================

/// Proof of a scheduled callback; spend it to unschedule.
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle(u64);

//=== Scheduler ===========================================================

struct ScheduledTick {
    id: u64,
    callback: Box<dyn FnMut()>,
}

/// Ordered collection of per-frame callbacks.
pub struct Scheduler {
    next_id: u64,
    entries: Vec<ScheduledTick>,
}

impl Scheduler {
    /// Creates a scheduler with nothing registered.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a callback to run every tick, after those already
    /// registered.
    pub fn schedule<F: FnMut() + 'static>(&mut self, callback: F) -> TickHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ScheduledTick {
            id,
            callback: Box::new(callback),
        });
        TickHandle(id)
    }

    /// Removes a previously scheduled callback.
    pub fn unschedule(&mut self, handle: TickHandle) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != handle.0);
        if self.entries.len() == before {
            debug!(target: "scheduler", "unschedule of unknown handle {:?}", handle);
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs every registered callback once, in registration order.
    pub fn run_tick(&mut self) {
        for entry in &mut self.entries {
            (entry.callback)();
        }
    }

    //--- Inspection -------------------------------------------------------

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
