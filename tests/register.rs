use deferrals::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

#[test]
fn invokes_continuation_registered_before_resolve() {
    let (resolver, forecast) = Deferred::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = seen.clone();
    forecast.register(move |text: &'static str| record.lock().unwrap().push(text));
    resolver.resolve("sunny, 20C");
    assert_eq!(*seen.lock().unwrap(), vec!["sunny, 20C"]);
}

#[test]
fn replays_to_continuation_registered_after_resolve() {
    let (resolver, forecast) = Deferred::new();
    resolver.resolve("cannot determine forecast");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = seen.clone();
    forecast.register(move |text: &'static str| record.lock().unwrap().push(text));
    // The continuation already ran, on the register call stack.
    assert_eq!(*seen.lock().unwrap(), vec!["cannot determine forecast"]);
}

#[test]
fn invokes_in_registration_order() {
    let (resolver, deferred) = Deferred::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for tag in [1, 2, 3] {
        let record = seen.clone();
        deferred.register(move |value: u32| record.lock().unwrap().push((tag, value)));
    }
    resolver.resolve(42);
    assert_eq!(*seen.lock().unwrap(), vec![(1, 42), (2, 42), (3, 42)]);
}

#[test]
fn each_continuation_runs_exactly_once() {
    let (resolver, deferred) = Deferred::new();
    let count = Arc::new(AtomicUsize::new(0));
    for _ in 0..4 {
        let count = count.clone();
        deferred.register(move |_: u32| {
            count.fetch_add(1, Ordering::SeqCst);
        });
    }
    resolver.resolve(7);
    assert_eq!(count.load(Ordering::SeqCst), 4);
}

#[test]
fn unresolved_continuation_never_fires() {
    let count = Arc::new(AtomicUsize::new(0));
    {
        let (resolver, deferred) = Deferred::new();
        let observed = count.clone();
        deferred.register(move |_: u32| {
            observed.fetch_add(1, Ordering::SeqCst);
        });
        drop(resolver);
        drop(deferred);
    }
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn value_survives_the_consumed_resolver() {
    let (resolver, deferred) = Deferred::new();
    resolver.resolve(5);
    assert_eq!(deferred.value_immediate(), Some(5));
}

#[test]
fn registration_during_dispatch_sees_the_value() {
    let (resolver, deferred) = Deferred::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let outer_seen = seen.clone();
    let reentrant = deferred.clone();
    deferred.register(move |value: u32| {
        outer_seen.lock().unwrap().push(("outer", value));
        let inner_seen = outer_seen.clone();
        reentrant.register(move |value| inner_seen.lock().unwrap().push(("inner", value)));
    });
    resolver.resolve(9);
    assert_eq!(*seen.lock().unwrap(), vec![("outer", 9), ("inner", 9)]);
}
