//! Reducer contract and sequential composition.

use std::fmt::Debug;

/// Computes the next state from the current state and an action.
///
/// Reducers mutate the state they are handed in place and must be total:
/// an action a reducer does not own leaves the state untouched. Every
/// reducer in a composed tree sees every action, so the no-op arm is what
/// makes composition work.
///
/// Any `Fn(&mut S, &A)` is a reducer.
pub trait Reducer<S, A> {
    fn reduce(&self, state: &mut S, action: &A);

    /// Boxes this reducer so it can sit next to reducers of other types.
    fn boxed(self) -> BoxReducer<S, A>
    where
        Self: Sized + 'static,
        S: 'static,
        A: 'static,
    {
        Box::new(move |state: &mut S, action: &A| self.reduce(state, action))
    }
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&mut S, &A),
{
    fn reduce(&self, state: &mut S, action: &A) {
        self(state, action);
    }
}

/// Type-erased reducer. Being a boxed `Fn`, it is itself a [`Reducer`].
pub type BoxReducer<S, A> = Box<dyn Fn(&mut S, &A)>;

/// Reducer built by [`combine`].
pub struct Combine<S, A> {
    reducers: Vec<BoxReducer<S, A>>,
}

impl<S, A> Combine<S, A> {
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> Reducer<S, A> for Combine<S, A> {
    fn reduce(&self, state: &mut S, action: &A) {
        // Reducer i's output is reducer i+1's input.
        for reducer in &self.reducers {
            reducer.reduce(state, action);
        }
    }
}

/// Composes reducers into one that runs each of them, in order, against the
/// same action.
///
/// An empty list yields the identity reducer.
pub fn combine<S, A>(reducers: Vec<BoxReducer<S, A>>) -> Combine<S, A> {
    Combine { reducers }
}

/// Reducer built by [`logging`].
pub struct Logging<R> {
    inner: R,
}

impl<S, A, R> Reducer<S, A> for Logging<R>
where
    S: Debug,
    A: Debug,
    R: Reducer<S, A>,
{
    fn reduce(&self, state: &mut S, action: &A) {
        self.inner.reduce(state, action);
        tracing::debug!(?action, ?state, "action reduced");
    }
}

/// Wraps a reducer so every reduction emits a debug event carrying the
/// action and the resulting state.
pub fn logging<R>(reducer: R) -> Logging<R> {
    Logging { inner: reducer }
}
