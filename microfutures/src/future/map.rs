use std::error::Error;

use crate::{
    future::{Completion, Future},
    outcome::Outcome,
};

impl<T, E> Future<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    /// Map this future's value to a different type, returning a new future of
    /// the resulting type.
    ///
    /// `f` is only called if this future succeeds. A failure is forwarded
    /// unchanged.
    pub fn map<U, F>(self, f: F) -> Future<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.try_map(move |value| Ok::<_, E>(f(value)))
    }

    /// Map this future's value with a transform that may fail.
    ///
    /// If `f` returns `Err`, that error becomes the failure of the returned
    /// future, indistinguishable downstream from a failure of this future
    /// itself. `f` is only called if this future succeeds.
    ///
    /// ```
    /// use std::num::ParseIntError;
    ///
    /// use microfutures::Future;
    ///
    /// Future::<_, ParseIntError>::from_value("forty-two")
    ///     .try_map(|s| s.parse::<u32>())
    ///     .subscribe(|_| unreachable!(), |err| println!("not a number: {}", err));
    /// ```
    pub fn try_map<U, E2, F>(self, f: F) -> Future<U, E>
    where
        U: Send + 'static,
        E2: Into<E>,
        F: FnOnce(T) -> Result<U, E2> + Send + 'static,
    {
        Future::chained(move |completion: Completion<U, E>| {
            self.run(Completion::new(move |outcome| match outcome {
                Outcome::Success(value) => match f(value) {
                    Ok(mapped) => completion.succeed(mapped),
                    Err(err) => completion.fail(err.into()),
                },
                Outcome::Failure(err) => completion.fail(err),
            }))
        })
    }

    /// Map this future's error to a different type.
    ///
    /// `f` is only called if this future fails. A value is forwarded
    /// unchanged.
    pub fn map_err<E2, F>(self, f: F) -> Future<T, E2>
    where
        E2: Error + Send + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        Future::chained(move |completion: Completion<T, E2>| {
            self.run(Completion::new(move |outcome| match outcome {
                Outcome::Success(value) => completion.succeed(value),
                Outcome::Failure(err) => completion.fail(f(err)),
            }))
        })
    }
}
