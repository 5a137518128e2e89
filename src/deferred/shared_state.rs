use super::*;
use futures::channel::oneshot;
use std::{collections::HashSet, mem, sync::Mutex};

/// Keeps the resolver informed that somebody still cares. Every consumer
/// handle, queued continuation, and outstanding [ValueFuture](super::ValueFuture)
/// holds one of these; when the last is gone the wrapped sender drops and
/// the resolver's `abandoned()` future completes.
pub struct Interest {
    _observers: oneshot::Sender<()>,
}

impl Interest {
    pub fn new(observers: oneshot::Sender<()>) -> Self {
        Self {
            _observers: observers,
        }
    }
}

pub struct Entry<T> {
    pub run: Box<dyn FnOnce(T) + Send>,
    pub _interest: Arc<Interest>,
}

pub enum Inner<T> {
    Pending {
        continuations: Vec<Entry<T>>,
        waiters: HashSet<Waiter<T>>,
    },
    Settled(Result<T, Dropped>),
}

pub struct SharedState<T> {
    pub inner: Mutex<Inner<T>>,
}

impl<T> SharedState<T> {
    pub fn unsubscribe(&self, waiter: &Waiter<T>) {
        let mut lock = self.inner.lock().unwrap();
        if let Inner::Pending { waiters, .. } = &mut *lock {
            waiters.remove(waiter);
        }
    }
}

impl<T> SharedState<T>
where
    T: Value,
{
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::Pending {
                continuations: Vec::new(),
                waiters: HashSet::new(),
            }),
        }
    }

    /// The one state transition. First write wins: later attempts are
    /// no-ops, which is what makes the resolver's Drop harmless after
    /// resolve() has already consumed it.
    pub fn settle(&self, outcome: Result<T, Dropped>) {
        let (continuations, waiters) = {
            let mut lock = self.inner.lock().unwrap();
            match &mut *lock {
                Inner::Settled(_) => return,
                Inner::Pending {
                    continuations,
                    waiters,
                } => {
                    let drained = (mem::take(continuations), mem::take(waiters));
                    *lock = Inner::Settled(outcome.clone());
                    drained
                }
            }
            // The lock drops here, before dispatch, so continuations can
            // re-enter register() or create new observers.
        };
        if let Ok(value) = &outcome {
            for entry in continuations {
                (entry.run)(value.clone());
            }
        }
        for waiter in waiters {
            waiter.deliver(outcome.clone());
        }
    }

    pub fn register(&self, continuation: Box<dyn FnOnce(T) + Send>, interest: &Arc<Interest>) {
        let replay = {
            let mut lock = self.inner.lock().unwrap();
            match &mut *lock {
                Inner::Pending { continuations, .. } => {
                    continuations.push(Entry {
                        run: continuation,
                        _interest: interest.clone(),
                    });
                    None
                }
                Inner::Settled(Ok(value)) => Some((continuation, value.clone())),
                // No value will ever be committed; the continuation is
                // discarded without running.
                Inner::Settled(Err(Dropped)) => None,
            }
        };
        if let Some((continuation, value)) = replay {
            continuation(value);
        }
    }

    pub fn subscribe(self: Arc<Self>) -> WaiterGuard<T> {
        let waiter = {
            let mut lock = self.inner.lock().unwrap();
            match &mut *lock {
                Inner::Pending { waiters, .. } => {
                    let waiter = Waiter::waiting();
                    waiters.insert(waiter.clone());
                    waiter
                }
                Inner::Settled(outcome) => Waiter::delivered(outcome.clone()),
            }
        };
        WaiterGuard {
            waiter,
            unsubscribe_from: self,
        }
    }
}
