//! Active target selection.
//!
//! # Responsibilities
//! - Map targets to base URLs through the endpoint table
//! - Advance the selection through the fixed cycle
//! - Publish the current selection to the monitor and the submitter
//!
//! # Design Decisions
//! - `select_target` and `cycle_target` are pure; the selector only stores
//! - Readers never block: the selection is swapped atomically
//! - Every switch bumps a generation counter so in-flight probes can tell
//!   they belong to a target that is no longer selected

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::endpoint::{EndpointTable, Selection, Target};

/// Build the selection for `target`.
pub fn select_target(table: &EndpointTable, target: Target) -> Selection {
    Selection {
        target,
        base_url: table.base_url(target).to_string(),
    }
}

/// Build the selection that follows `current` in the cycle.
pub fn cycle_target(table: &EndpointTable, current: &Selection) -> Selection {
    select_target(table, current.target.next())
}

/// A selection together with the number of switches that produced it.
#[derive(Debug, Clone)]
pub struct Stamped {
    pub generation: u64,
    pub selection: Arc<Selection>,
}

/// Holder of the single active selection.
#[derive(Debug)]
pub struct EndpointSelector {
    table: EndpointTable,
    current: ArcSwap<Stamped>,
}

impl EndpointSelector {
    /// Create a selector starting at `initial`.
    pub fn new(table: EndpointTable, initial: Target) -> Self {
        let selection = Arc::new(select_target(&table, initial));
        Self {
            table,
            current: ArcSwap::from_pointee(Stamped {
                generation: 0,
                selection,
            }),
        }
    }

    /// The active selection.
    pub fn current(&self) -> Arc<Selection> {
        self.current.load().selection.clone()
    }

    /// The active selection and its generation, read together.
    pub fn stamped(&self) -> Arc<Stamped> {
        self.current.load_full()
    }

    /// Number of switches made so far.
    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }

    /// Advance to the next target and return the new selection.
    pub fn cycle(&self) -> Arc<Selection> {
        let next = self.advance(|current| cycle_target(&self.table, current));
        tracing::info!(mode = %next.target, base_url = %next.base_url, "Target switched");
        next
    }

    /// Jump straight to `target`.
    pub fn select(&self, target: Target) -> Arc<Selection> {
        self.advance(|_| select_target(&self.table, target))
    }

    /// The endpoint table backing this selector.
    pub fn table(&self) -> &EndpointTable {
        &self.table
    }

    fn advance(&self, step: impl Fn(&Selection) -> Selection) -> Arc<Selection> {
        let mut next = self.current();
        self.current.rcu(|stamped| {
            next = Arc::new(step(&stamped.selection));
            Stamped {
                generation: stamped.generation + 1,
                selection: next.clone(),
            }
        });
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EndpointTable {
        EndpointTable::new(
            "http://127.0.0.1:8000",
            "",
            "https://scriptsledge-clarity-backend.hf.space",
        )
    }

    #[test]
    fn test_select_target_uses_table() {
        let table = table();
        assert_eq!(select_target(&table, Target::Local).base_url, "http://127.0.0.1:8000");
        assert_eq!(select_target(&table, Target::Docker).base_url, "");
        assert_eq!(
            select_target(&table, Target::Cloud).base_url,
            "https://scriptsledge-clarity-backend.hf.space"
        );
    }

    #[test]
    fn test_selector_cycles_and_counts() {
        let selector = EndpointSelector::new(table(), Target::Cloud);
        assert_eq!(selector.generation(), 0);

        assert_eq!(selector.cycle().target, Target::Local);
        assert_eq!(selector.cycle().target, Target::Docker);
        assert_eq!(selector.cycle().target, Target::Cloud);
        assert_eq!(selector.current().base_url, "https://scriptsledge-clarity-backend.hf.space");
        assert_eq!(selector.generation(), 3);
    }

    #[test]
    fn test_stamp_matches_selection() {
        let selector = EndpointSelector::new(table(), Target::Cloud);
        let before = selector.stamped();

        let next = selector.select(Target::Docker);
        let after = selector.stamped();

        assert_eq!(before.generation, 0);
        assert_eq!(before.selection.target, Target::Cloud);
        assert_eq!(after.generation, 1);
        assert!(Arc::ptr_eq(&after.selection, &next));
    }
}
