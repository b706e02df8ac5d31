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
    /// Chain on a dependent future built from this future's value.
    ///
    /// Once this future succeeds, `f` turns the value into the next future,
    /// which is run right away and whose outcome becomes the outcome of the
    /// returned future. If this future fails, `f` is never called and the
    /// failure is forwarded unchanged.
    ///
    /// `f` cannot fail by itself; a failing step returns a future that fails.
    ///
    /// ```
    /// use std::fmt;
    ///
    /// use microfutures::Future;
    ///
    /// fn lookup(id: u32) -> Future<String, fmt::Error> {
    ///     Future::from_operation(move |completion| completion.succeed(format!("user-{}", id)))
    /// }
    ///
    /// Future::from_value(7)
    ///     .flat_map(lookup)
    ///     .subscribe_success(|name| assert_eq!(name, "user-7"));
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Future<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Future<U, E> + Send + 'static,
    {
        Future::chained(move |completion: Completion<U, E>| {
            self.run(Completion::new(move |outcome| match outcome {
                Outcome::Success(value) => f(value).run(completion),
                Outcome::Failure(err) => completion.fail(err),
            }))
        })
    }
}
