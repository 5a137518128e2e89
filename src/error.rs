use thiserror::Error;

/// Observed when a [`Resolver`](crate::Resolver) was dropped before
/// committing a value.
///
/// This is a liveness signal, not an application error channel. Failures of
/// the operation backing a deferred should be resolved into the value
/// itself, e.g. as a `Result` or a fallback message.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("resolver dropped before a value was committed")]
pub struct Dropped;
