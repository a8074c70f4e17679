//! Lifting local reducers onto a global state.
//!
//! A feature reducer is written against its own slice of state. `pullback`
//! turns it into a reducer over the whole state by reading the slice through
//! a [`Lens`], reducing it, and writing it back. Fields outside the slice are
//! never touched.

use std::marker::PhantomData;

use crate::lens::Lens;
use crate::reducer::Reducer;

/// Reducer built by [`pullback`].
pub struct Pullback<R, G, L> {
    reducer: R,
    lens: Lens<G, L>,
}

impl<R, G, L, A> Reducer<G, A> for Pullback<R, G, L>
where
    R: Reducer<L, A>,
{
    fn reduce(&self, state: &mut G, action: &A) {
        self.lens
            .modify(state, |local| self.reducer.reduce(local, action));
    }
}

/// Lifts a reducer on `L` to a reducer on `G`. The action type is shared.
pub fn pullback<R, G, L>(reducer: R, lens: Lens<G, L>) -> Pullback<R, G, L> {
    Pullback { reducer, lens }
}

/// Reducer built by [`pullback_action`].
pub struct PullbackAction<R, G, L, GA, LA, E> {
    reducer: R,
    lens: Lens<G, L>,
    extract: E,
    _actions: PhantomData<fn(&GA) -> &LA>,
}

impl<R, G, L, GA, LA, E> Reducer<G, GA> for PullbackAction<R, G, L, GA, LA, E>
where
    R: Reducer<L, LA>,
    E: Fn(&GA) -> Option<&LA>,
{
    fn reduce(&self, state: &mut G, action: &GA) {
        let Some(local_action) = (self.extract)(action) else {
            return;
        };
        self.lens
            .modify(state, |local| self.reducer.reduce(local, local_action));
    }
}

/// Lifts a reducer on `(L, LA)` to a reducer on `(G, GA)`.
///
/// `extract` narrows a global action to the local one; when it returns
/// `None` the action is not for this reducer and the state is left as is,
/// without reading the slice.
pub fn pullback_action<R, G, L, GA, LA, E>(
    reducer: R,
    lens: Lens<G, L>,
    extract: E,
) -> PullbackAction<R, G, L, GA, LA, E>
where
    E: Fn(&GA) -> Option<&LA>,
{
    PullbackAction {
        reducer,
        lens,
        extract,
        _actions: PhantomData,
    }
}
