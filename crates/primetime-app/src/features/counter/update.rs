//! Counter feature reducer.

use crate::actions::{AppAction, CounterAction};

/// Increments or decrements the count. Saturates at the `i64` bounds.
pub fn counter_reducer(count: &mut i64, action: &AppAction) {
    match action {
        AppAction::Counter(CounterAction::IncrTapped) => *count = count.saturating_add(1),
        AppAction::Counter(CounterAction::DecrTapped) => *count = count.saturating_sub(1),
        _ => {}
    }
}
