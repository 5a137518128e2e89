use crate::error::Dropped;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

mod deferred;
mod ext;
mod ptr;
mod resolver;
mod shared_state;
mod waiter;

pub(self) use {crate::Value, shared_state::*, waiter::*};

pub use {
    deferred::{Deferred, ValueFuture},
    ext::DeferredExt,
    ptr::Ptr,
    resolver::Resolver,
};
