use std::{any::type_name, fmt};

use log::debug;

use crate::outcome::Outcome;

type Callback<T, E> = Box<dyn FnOnce(Outcome<T, E>) + Send + 'static>;

/// One-shot handle a leaf operation uses to report its [`Outcome`].
///
/// Every method consumes the handle, so an operation can deliver at most one
/// outcome. Delivering none is a contract violation: the chain never
/// completes and neither subscriber callback runs. When a leaf operation
/// drops its handle undelivered, a `debug` record naming the leaf's value
/// type is logged; the downstream stages it strands stay silent.
///
/// The handle is `Send`; an operation may move it to another thread and
/// complete it from there.
///
/// ```
/// use std::{fmt, thread};
///
/// use microfutures::Future;
///
/// let fut = Future::<u32, fmt::Error>::from_operation(|completion| {
///     thread::spawn(move || completion.succeed(7));
/// });
/// # drop(fut);
/// ```
#[must_use = "an operation must deliver an outcome through its completion"]
pub struct Completion<T, E> {
    callback: Option<Callback<T, E>>,
    leaf: bool,
}

impl<T, E> Completion<T, E> {
    pub(crate) fn new<F>(callback: F) -> Self
    where
        F: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        Completion {
            callback: Some(Box::new(callback)),
            leaf: false,
        }
    }

    /// Marks the handle as given to a leaf operation, so an undelivered drop
    /// gets reported.
    pub(super) fn into_leaf(mut self) -> Self {
        self.leaf = true;
        self
    }

    /// Delivers `outcome` downstream.
    pub fn complete(mut self, outcome: Outcome<T, E>) {
        if let Some(callback) = self.callback.take() {
            callback(outcome);
        }
    }

    /// Delivers a successful outcome holding `value`.
    pub fn succeed(self, value: T) {
        self.complete(Outcome::Success(value))
    }

    /// Delivers a failed outcome holding `err`.
    pub fn fail(self, err: E) {
        self.complete(Outcome::Failure(err))
    }
}

impl<T, E> Drop for Completion<T, E> {
    fn drop(&mut self) {
        if self.leaf && self.callback.is_some() {
            debug!(
                "Completion for Future<{}> dropped without an outcome",
                type_name::<T>()
            );
        }
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .field("leaf", &self.leaf)
            .finish()
    }
}
