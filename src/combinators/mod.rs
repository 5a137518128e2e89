use crate::*;
use std::{future::Future, sync::Mutex};

/// Resolve a new deferred with `f` applied to the source's value. The
/// transform runs synchronously, during the source's resolve call; use
/// [then] when it needs to await.
pub fn map<I, O, F>(source: Deferred<I>, f: F) -> Deferred<O>
where
    I: Value,
    O: Value,
    F: 'static + Send + FnOnce(I) -> O,
{
    let (resolver, mapped) = Deferred::new();
    source.register(move |value| resolver.resolve(f(value)));
    mapped
}

/// As [map], but the transform is asynchronous and runs on a spawned task.
/// Must be called within a tokio runtime.
pub fn then<I, O, F, Fut>(source: Deferred<I>, f: F) -> Deferred<O>
where
    I: Value,
    O: Value,
    F: 'static + Send + FnOnce(I) -> Fut,
    Fut: Send + Future<Output = O>,
{
    Deferred::spawn(move |resolver| async move {
        if let Ok(value) = source.value().await {
            resolver.resolve(f(value).await);
        }
    })
}

struct JoinState<A, B>
where
    A: Value,
    B: Value,
{
    left: Option<A>,
    right: Option<B>,
    resolver: Option<Resolver<(A, B)>>,
}

impl<A, B> JoinState<A, B>
where
    A: Value,
    B: Value,
{
    fn take_ready(&mut self) -> Option<(Resolver<(A, B)>, (A, B))> {
        match (&self.left, &self.right) {
            (Some(_), Some(_)) => {
                let resolver = self.resolver.take()?;
                let pair = (self.left.take()?, self.right.take()?);
                Some((resolver, pair))
            }
            _ => None,
        }
    }
}

/// Resolves with both values once both inputs have resolved. If either
/// input is dropped unresolved the join can never complete and reports
/// [Dropped].
pub fn join<A, B>(a: Deferred<A>, b: Deferred<B>) -> Deferred<(A, B)>
where
    A: Value,
    B: Value,
{
    let (resolver, joined) = Deferred::new();
    let state = Ptr::new(Mutex::new(JoinState {
        left: None,
        right: None,
        resolver: Some(resolver),
    }));
    let for_left = state.clone();
    a.register(move |value| {
        let ready = {
            let mut state = for_left.lock().unwrap();
            state.left = Some(value);
            state.take_ready()
            // Resolve outside the lock.
        };
        if let Some((resolver, pair)) = ready {
            resolver.resolve(pair);
        }
    });
    let for_right = state;
    b.register(move |value| {
        let ready = {
            let mut state = for_right.lock().unwrap();
            state.right = Some(value);
            state.take_ready()
        };
        if let Some((resolver, pair)) = ready {
            resolver.resolve(pair);
        }
    });
    joined
}

/// Resolves with whichever input resolves first; the loser's value is
/// discarded. Reports [Dropped] only if both inputs are dropped unresolved.
pub fn race<T>(a: Deferred<T>, b: Deferred<T>) -> Deferred<T>
where
    T: Value,
{
    let (resolver, winner) = Deferred::new();
    let slot = Ptr::new(Mutex::new(Some(resolver)));
    let for_b = slot.clone();
    a.register(move |value| {
        let resolver = slot.lock().unwrap().take();
        if let Some(resolver) = resolver {
            resolver.resolve(value);
        }
    });
    b.register(move |value| {
        let resolver = for_b.lock().unwrap().take();
        if let Some(resolver) = resolver {
            resolver.resolve(value);
        }
    });
    winner
}

/// Splits a tagged result delivered through the single-resolution channel:
/// an `Ok` value resolves the output, an `Err` goes to the handler and the
/// output observes [Dropped].
pub fn handle_errors<T, E, F>(source: Deferred<Result<T, E>>, f: F) -> Deferred<T>
where
    T: Value,
    E: Value,
    F: 'static + Send + FnOnce(E),
{
    let (resolver, ok) = Deferred::new();
    source.register(move |result| match result {
        Ok(value) => resolver.resolve(value),
        Err(error) => f(error),
    });
    ok
}
