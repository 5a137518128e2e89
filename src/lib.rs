//! Single-resolution futures.
//!
//! A [Deferred] starts empty and is committed exactly once by its
//! [Resolver]. Every observer receives the committed value exactly once,
//! whether it registered before resolution (continuations run in
//! registration order, during the resolve call) or after (the value is
//! replayed immediately). Waiting never blocks a thread: observers either
//! register a continuation or await a [ValueFuture].
//!
//! There is no rejection channel. A producer that can fail resolves with a
//! tagged value such as a `Result` or a human-readable fallback, and
//! consumers split the tag with [handle_errors] if needed. Dropping a
//! resolver without resolving is surfaced to awaiting observers as
//! [Dropped].
//!
//! ```
//! use deferrals::Deferred;
//!
//! let (resolver, forecast) = Deferred::new();
//! forecast.register(|text: String| assert_eq!(text, "sunny, 20C"));
//! resolver.resolve("sunny, 20C".to_string());
//! assert_eq!(forecast.value_immediate().as_deref(), Some("sunny, 20C"));
//! ```

mod combinators;
mod deferred;
mod error;

pub use crate::{combinators::*, deferred::*, error::*};

/// Bound for values a deferred can carry. Resolution fans the value out to
/// every observer as a clone; wrap expensive payloads in [Ptr] to keep
/// those clones cheap.
pub trait Value: 'static + Send + Clone {}
impl<T> Value for T where T: 'static + Send + Clone {}
