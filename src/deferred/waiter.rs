use super::*;
use std::{
    hash::{Hash, Hasher},
    mem,
    sync::Mutex,
    task::Waker,
};

pub enum WaiterVal<T> {
    Waiting(Option<Waker>),
    Delivered(Option<Result<T, Dropped>>),
}

/// One awaiting observer. Compared and hashed by address so a dropped
/// ValueFuture can remove exactly its own slot from the pending set.
pub struct Waiter<T> {
    inner: Ptr<Mutex<WaiterVal<T>>>,
}

pub struct WaiterGuard<T> {
    pub waiter: Waiter<T>,
    pub unsubscribe_from: Arc<SharedState<T>>,
}

// Remove from the pending set on Drop
impl<T> Drop for WaiterGuard<T> {
    fn drop(&mut self) {
        self.unsubscribe_from.unsubscribe(&self.waiter);
    }
}

impl<T> Waiter<T> {
    pub fn waiting() -> Self {
        Self {
            inner: Ptr::new(Mutex::new(WaiterVal::Waiting(None))),
        }
    }

    pub fn delivered(outcome: Result<T, Dropped>) -> Self {
        Self {
            inner: Ptr::new(Mutex::new(WaiterVal::Delivered(Some(outcome)))),
        }
    }

    pub fn poll_value(&self, cx: &mut Context) -> Poll<Result<T, Dropped>> {
        let mut lock = self.inner.lock().unwrap();
        match &mut *lock {
            WaiterVal::Delivered(outcome) => match outcome.take() {
                Some(outcome) => Poll::Ready(outcome),
                None => unreachable!("polled after completion"),
            },
            WaiterVal::Waiting(waker) => {
                *waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }

    pub fn deliver(&self, outcome: Result<T, Dropped>) {
        let prev = {
            let mut lock = self.inner.lock().unwrap();
            mem::replace(&mut *lock, WaiterVal::Delivered(Some(outcome)))

            // Drop the lock before calling wake()
        };
        if let WaiterVal::Waiting(Some(waker)) = prev {
            waker.wake();
        }
    }
}

impl<T> Clone for Waiter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Eq for Waiter<T> {}
impl<T> PartialEq for Waiter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq(&other.inner)
    }
}

impl<T> Hash for Waiter<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}
