pub mod engine;
pub mod events;
pub mod journal;
pub mod logging;
pub mod metrics;
pub mod replay;

/// Step-rate target the benches report against.
pub const TARGET_STEPS_PER_SEC: u64 = 100_000;

pub fn module_ready() -> bool {
    true
}
