use futures::FutureExt;
use futures::{channel::oneshot::Receiver, future::Shared};

use super::*;

/// The producing half of a deferred. There is exactly one per instance,
/// it is not cloneable, and [resolve](Resolver::resolve) consumes it, so a
/// value can be committed at most once.
pub struct Resolver<T>
where
    T: Value,
{
    state: Arc<SharedState<T>>,
    abandoned: Shared<Receiver<()>>,
}

impl<T> Drop for Resolver<T>
where
    T: Value,
{
    fn drop(&mut self) {
        self.state.settle(Err(Dropped));
    }
}

impl<T> Resolver<T>
where
    T: Value,
{
    pub(crate) fn new(state: &Arc<SharedState<T>>, abandoned: Receiver<()>) -> Self {
        Self {
            state: state.clone(),
            abandoned: abandoned.shared(),
        }
    }

    /// Completes once no observer can ever see a resolution: every consumer
    /// handle, queued continuation, and outstanding value future is gone.
    /// Producers use this to stop work nobody will receive. Deadlines stay
    /// the producer's job too: resolve with a fallback value before giving
    /// up, the deferred itself has no awareness of time.
    pub fn abandoned(&self) -> impl 'static + Future + Send + Unpin {
        self.abandoned.clone()
    }

    /// Commit the value. Every continuation registered so far runs now, on
    /// this call stack and in registration order; observers arriving later
    /// have the value replayed immediately.
    pub fn resolve(self, value: T) {
        self.state.settle(Ok(value));
    }
}
