//! Definition of [`Outcome`], the value a [`Future`](crate::Future) resolves to.

/// The result of a deferred computation: either a produced value or an error.
///
/// Exactly one case is populated and an outcome never changes once built.
/// Consumers take it apart with `match`.
///
/// ```
/// use microfutures::Outcome;
///
/// let outcome: Outcome<u32, std::fmt::Error> = Outcome::Success(1);
///
/// match outcome {
///     Outcome::Success(value) => assert_eq!(value, 1),
///     Outcome::Failure(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Converts the outcome into a standard [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
