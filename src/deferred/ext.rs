use crate::*;
use std::future::Future;

pub trait DeferredExt: Sized {
    type Output: Value;

    /// Transform the value this deferred will resolve with. The transform
    /// runs synchronously, during the source's resolve call.
    fn map<F, O>(self, f: F) -> Deferred<O>
    where
        F: 'static + Send + FnOnce(Self::Output) -> O,
        O: Value;

    /// As [map](DeferredExt::map), but the transform is asynchronous and
    /// runs on a spawned task.
    fn then<F, O, Fut>(self, f: F) -> Deferred<O>
    where
        F: 'static + Send + FnOnce(Self::Output) -> Fut,
        O: Value,
        Fut: Send + Future<Output = O>;
}

impl<T> DeferredExt for Deferred<T>
where
    T: Value,
{
    type Output = T;

    #[inline]
    fn map<F, O>(self, f: F) -> Deferred<O>
    where
        F: 'static + Send + FnOnce(T) -> O,
        O: Value,
    {
        map(self, f)
    }

    #[inline]
    fn then<F, O, Fut>(self, f: F) -> Deferred<O>
    where
        F: 'static + Send + FnOnce(T) -> Fut,
        O: Value,
        Fut: Send + Future<Output = O>,
    {
        then(self, f)
    }
}
