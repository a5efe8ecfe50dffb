//! Deferred asynchronous work returned from domain update functions.
//!
//! A [`Task`] is a batch of futures that each resolve to one message. Update
//! functions never await backend calls themselves; they describe them as a
//! task and return immediately, and the runtime feeds each resolved message
//! back into the domain.

use std::fmt;
use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

/// A set of pending futures, each producing a `T` when it completes.
#[must_use = "tasks do nothing unless handed to a runtime"]
pub struct Task<T> {
    futures: Vec<BoxFuture<'static, T>>,
}

impl<T: Send + 'static> Task<T> {
    /// A task that does nothing.
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// A task that immediately yields `value`.
    pub fn done(value: T) -> Self {
        Self {
            futures: vec![future::ready(value).boxed()],
        }
    }

    /// Run `future` and map its output into a message.
    pub fn perform<A, Fut, F>(future: Fut, f: F) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
        F: FnOnce(A) -> T + Send + 'static,
    {
        Self {
            futures: vec![future.map(f).boxed()],
        }
    }

    /// Combine several tasks into one. Their futures stay independent and may
    /// complete in any order.
    pub fn batch(tasks: impl IntoIterator<Item = Self>) -> Self {
        Self {
            futures: tasks.into_iter().flat_map(|task| task.futures).collect(),
        }
    }

    /// Map the output of every future in this task.
    pub fn map<U: Send + 'static>(
        self,
        f: impl Fn(T) -> U + Send + Sync + Clone + 'static,
    ) -> Task<U> {
        Task {
            futures: self
                .futures
                .into_iter()
                .map(|future| future.map(f.clone()).boxed())
                .collect(),
        }
    }
}

impl<T> Task<T> {
    pub fn is_none(&self) -> bool {
        self.futures.is_empty()
    }

    /// Number of independent futures carried by this task.
    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<'static, T>> {
        self.futures
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("pending", &self.futures.len())
            .finish()
    }
}
