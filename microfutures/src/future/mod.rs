//! Lazy callback-based [`Future`] and its combinators.

use std::{any::type_name, error::Error, fmt};

use log::trace;

pub use self::completion::Completion;
#[cfg(feature = "into-future")]
pub use self::wait::Wait;

use crate::outcome::Outcome;

mod completion;
mod flat_map;
mod map;
#[cfg(feature = "into-future")]
mod wait;

type Operation<T, E> = Box<dyn FnOnce(Completion<T, E>) + Send + 'static>;

/// A placeholder for a single value, or error, that becomes available at some
/// later point in time.
///
/// A `Future` owns one deferred operation. Building it, directly or through
/// [`map`](Future::map) and [`flat_map`](Future::flat_map), runs nothing; the
/// operation executes only when the chain is triggered with
/// [`subscribe`](Future::subscribe) (or `.await`ed, with the `into-future`
/// feature).
///
/// `Future` has no executor. Whether the chain resolves inside `subscribe` or
/// later on another thread is decided by the leaf operations: each one
/// receives a [`Completion`] and may call it right away or move it anywhere
/// else first.
///
/// ```
/// use std::fmt;
///
/// use microfutures::Future;
///
/// Future::<_, fmt::Error>::from_value(20)
///     .map(|n| n + 1)
///     .flat_map(|n| Future::from_value(n * 2))
///     .subscribe_success(|n| assert_eq!(n, 42));
/// ```
#[must_use = "futures do nothing unless subscribed to or awaited"]
pub struct Future<T, E> {
    operation: Operation<T, E>,
    leaf: bool,
}

impl<T, E> Future<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    /// Creates a future that resolves with a precomputed `outcome`.
    ///
    /// Running it delivers the outcome immediately, on the caller's thread.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self::from_operation(move |completion| completion.complete(outcome))
    }

    /// Creates a future that resolves successfully with `value`.
    pub fn from_value(value: T) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    /// Creates a future that fails with `err`.
    pub fn from_error(err: E) -> Self {
        Self::from_outcome(Outcome::Failure(err))
    }

    /// Wraps an arbitrary deferred operation.
    ///
    /// `op` is not called here; it is called once the future is run, with the
    /// [`Completion`] it must use to report its outcome. Moving the completion
    /// to another thread before completing it is how real asynchrony enters
    /// a chain.
    ///
    /// ```
    /// use std::{fmt, sync::mpsc, thread};
    ///
    /// use microfutures::Future;
    ///
    /// let (tx, rx) = mpsc::channel();
    ///
    /// Future::<_, fmt::Error>::from_operation(|completion| {
    ///     thread::spawn(move || completion.succeed("done"));
    /// })
    /// .subscribe_success(move |msg| tx.send(msg).unwrap());
    ///
    /// assert_eq!(rx.recv().unwrap(), "done");
    /// ```
    pub fn from_operation<F>(op: F) -> Self
    where
        F: FnOnce(Completion<T, E>) + Send + 'static,
    {
        Future {
            operation: Box::new(op),
            leaf: true,
        }
    }

    /// Wraps an operation that only forwards another future's outcome.
    pub(crate) fn chained<F>(op: F) -> Self
    where
        F: FnOnce(Completion<T, E>) + Send + 'static,
    {
        Future {
            operation: Box::new(op),
            leaf: false,
        }
    }

    /// Runs the wrapped operation, handing it `completion`.
    pub(crate) fn run(self, completion: Completion<T, E>) {
        if self.leaf {
            (self.operation)(completion.into_leaf())
        } else {
            (self.operation)(completion)
        }
    }

    /// Triggers the chain, routing a value to `on_success` and an error to
    /// `on_error`.
    ///
    /// Exactly one of the callbacks runs, once, provided every leaf operation
    /// in the chain completes. The future is consumed, so it cannot be
    /// subscribed to twice:
    ///
    /// ```compile_fail
    /// use std::fmt;
    ///
    /// use microfutures::Future;
    ///
    /// let fut = Future::<_, fmt::Error>::from_value(1);
    /// fut.subscribe(|_| {}, |_| {});
    /// fut.subscribe(|_| {}, |_| {});
    /// ```
    pub fn subscribe<S, F>(self, on_success: S, on_error: F)
    where
        S: FnOnce(T) + Send + 'static,
        F: FnOnce(E) + Send + 'static,
    {
        trace!("Subscribing to Future<{}>", type_name::<T>());

        self.run(Completion::new(move |outcome| match outcome {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(err) => on_error(err),
        }))
    }

    /// Triggers the chain, observing only a successful value.
    ///
    /// An error, if any, is dropped.
    pub fn subscribe_success<S>(self, on_success: S)
    where
        S: FnOnce(T) + Send + 'static,
    {
        self.subscribe(on_success, |_| {})
    }

    /// Triggers the chain, observing only a failure.
    ///
    /// A value, if any, is dropped.
    pub fn subscribe_error<F>(self, on_error: F)
    where
        F: FnOnce(E) + Send + 'static,
    {
        self.subscribe(|_| {}, on_error)
    }
}

impl<T, E> From<Outcome<T, E>> for Future<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Future::from_outcome(outcome)
    }
}

impl<T, E> From<Result<T, E>> for Future<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    fn from(res: Result<T, E>) -> Self {
        Future::from_outcome(res.into())
    }
}

impl<T, E> fmt::Debug for Future<T, E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Future<{}>", type_name::<T>())
    }
}
