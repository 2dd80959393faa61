//! Metric names recorded by the Store.
//!
//! The Store records through the `metrics` facade. Nothing is exported
//! unless the host process installs a recorder; call [`describe`] once
//! after installing one so the metrics carry help text.

use ::metrics::{describe_counter, describe_histogram};

/// Actions accepted by `Store::send`
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions rejected because the store was shutting down
pub const ACTIONS_REJECTED: &str = "store.actions.rejected";

/// Effects executed, labelled by `type`
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// Time spent inside `Reducer::reduce`
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Register descriptions for every metric the Store records.
pub fn describe() {
    describe_counter!(ACTIONS_TOTAL, "Actions accepted by the store");
    describe_counter!(
        ACTIONS_REJECTED,
        "Actions rejected because the store was shutting down"
    );
    describe_counter!(EFFECTS_EXECUTED, "Effects executed by the store, by type");
    describe_histogram!(
        REDUCER_DURATION,
        ::metrics::Unit::Seconds,
        "Time spent inside the reducer per action"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_without_recorder() {
        // No recorder installed: describing is a no-op and must not panic.
        describe();
    }

    #[test]
    fn test_metric_names_are_namespaced() {
        for name in [ACTIONS_TOTAL, ACTIONS_REJECTED, EFFECTS_EXECUTED, REDUCER_DURATION] {
            assert!(name.starts_with("store."), "{name} is not under store.");
        }
    }
}
