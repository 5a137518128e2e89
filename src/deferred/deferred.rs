use super::*;
use futures::channel::oneshot;
use tokio::select;

/// The observing half of a deferred. Cloning hands out another handle to
/// the same eventual value; any number of observers may register against
/// it, before or after resolution.
pub struct Deferred<T> {
    state: Arc<SharedState<T>>,
    interest: Arc<Interest>,
}

impl<T> Deferred<T>
where
    T: Value,
{
    /// Create a resolver/observer pair.
    pub fn new() -> (Resolver<T>, Self) {
        let (sender, receiver) = oneshot::channel();
        let state = Arc::new(SharedState::new());
        let deferred = Deferred {
            state: state.clone(),
            interest: Arc::new(Interest::new(sender)),
        };
        (Resolver::new(&state, receiver), deferred)
    }

    /// Create a deferred that already holds a value. This is useful for
    /// passing "mock" deferreds into consumers.
    pub fn from_value(value: T) -> Self {
        let (resolver, deferred) = Deferred::new();
        resolver.resolve(value);
        deferred
    }

    /// A helper for spawning the task which produces the value, handing it
    /// the resolver. The task is cancelled if every observer goes away
    /// before it resolves. Must be called within a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: 'static + Send + FnOnce(Resolver<T>) -> Fut,
        Fut: Future<Output = ()> + Send,
    {
        let (resolver, deferred) = Deferred::new();
        tokio::spawn(async move {
            let abandoned = resolver.abandoned();
            select!(
                _ = abandoned => {}
                _ = f(resolver) => {}
            );
        });
        deferred
    }

    /// Register a continuation to run with the value. If the value is
    /// already committed the continuation runs now, on this call stack,
    /// before register returns. Continuations registered while the value
    /// is still pending run in registration order during the resolve call.
    /// A continuation never runs if no value is ever committed.
    pub fn register<F>(&self, continuation: F)
    where
        F: 'static + Send + FnOnce(T),
    {
        self.state.register(Box::new(continuation), &self.interest);
    }

    /// Get a future that resolves with the committed value, or with
    /// `Err(Dropped)` if the resolver went away without committing one.
    /// Each call observes independently.
    pub fn value(&self) -> ValueFuture<T> {
        ValueFuture {
            waiter: Some(self.state.clone().subscribe()),
            _interest: self.interest.clone(),
        }
    }

    /// Get the committed value, if any, without waiting.
    pub fn value_immediate(&self) -> Option<T> {
        match &*self.state.inner.lock().unwrap() {
            Inner::Settled(Ok(value)) => Some(value.clone()),
            _ => None,
        }
    }

    #[cfg(feature = "trace")]
    pub fn observer_count(&self) -> usize {
        match &*self.state.inner.lock().unwrap() {
            Inner::Pending {
                continuations,
                waiters,
            } => continuations.len() + waiters.len(),
            Inner::Settled(_) => 0,
        }
    }
}

impl<T> Clone for Deferred<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            interest: self.interest.clone(),
        }
    }
}

pub struct ValueFuture<T> {
    waiter: Option<WaiterGuard<T>>,
    _interest: Arc<Interest>,
}

impl<T> Future for ValueFuture<T>
where
    T: Value,
{
    type Output = Result<T, Dropped>;
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.waiter.as_mut().unwrap().waiter.poll_value(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(outcome) => {
                self.waiter = None;
                Poll::Ready(outcome)
            }
        }
    }
}
