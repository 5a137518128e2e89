use deferrals::*;
use tokio::test;

#[test]
async fn maps_the_resolved_value() {
    let (resolver, deferred) = Deferred::new();
    let formatted = deferred.map(|v: u32| format!("{v}"));
    resolver.resolve(5);
    assert_eq!(formatted.value().await.as_deref(), Ok("5"));
}

#[test]
async fn map_runs_during_the_resolve_call() {
    let (resolver, deferred) = Deferred::new();
    let doubled = deferred.map(|v: u32| v * 2);
    resolver.resolve(4);
    assert_eq!(doubled.value_immediate(), Some(8));
}

#[test]
async fn then_runs_on_a_task() {
    let (resolver, deferred) = Deferred::new();
    let formatted = deferred.then(|v: u32| async move { format!("{v} degrees") });
    resolver.resolve(21);
    assert_eq!(formatted.value().await.as_deref(), Ok("21 degrees"));
}

#[test]
async fn map_propagates_dropped_input() {
    let (resolver, deferred) = Deferred::<u32>::new();
    let mapped = deferred.map(|v| v + 1);
    drop(resolver);
    assert_eq!(mapped.value().await, Err(Dropped));
}

#[test]
async fn then_propagates_dropped_input() {
    let (resolver, deferred) = Deferred::<u32>::new();
    let mapped = deferred.then(|v| async move { v + 1 });
    drop(resolver);
    assert_eq!(mapped.value().await, Err(Dropped));
}
