//! Microfutures is a minimal deferred-computation library.
//!
//! A [`Future`] wraps an operation that has not run yet and that will
//! eventually produce one [`Outcome`]: a value or an error. Futures are
//! composed with [`map`](Future::map), [`try_map`](Future::try_map),
//! [`map_err`](Future::map_err) and [`flat_map`](Future::flat_map) without
//! running anything; the chain executes only when it is triggered with
//! [`subscribe`](Future::subscribe).
//!
//! ## Features
//! - Lazy: building a chain has no side effects
//! - Single-shot: every future is run at most once, enforced by ownership
//! - Failures short-circuit the rest of a chain
//! - Generic error type, any `std::error::Error`
//! - No executor: leaf operations choose where and when they complete
//!
//! ## Package feature
//! * `into-future` - (default) implements [`IntoFuture`](std::future::IntoFuture)
//!   for [`Future`] so chains can be `.await`ed, see [`Wait`]
//!
//! ## Example
//!
//! ```
//! use std::fmt;
//!
//! use microfutures::prelude::*;
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//! }
//!
//! fn get_user() -> Future<User, fmt::Error> {
//!     Future::from_operation(|completion| {
//!         completion.succeed(User { name: "fmo91".to_owned() })
//!     })
//! }
//!
//! get_user()
//!     .map(|user| user.name)
//!     .subscribe(|name| assert_eq!(name, "fmo91"), |err| panic!("{}", err));
//! ```

#![deny(nonstandard_style, rust_2018_idioms)]
#![warn(deprecated_in_future, trivial_casts, trivial_numeric_casts)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod future;
mod outcome;

#[cfg(feature = "into-future")]
pub use crate::future::Wait;
pub use crate::future::{Completion, Future};
pub use crate::outcome::Outcome;

pub mod prelude {
    //! The `microfutures` prelude.
    //!
    //! ```
    //! # #![allow(unused_imports)]
    //! use microfutures::prelude::*;
    //! ```

    #[cfg(feature = "into-future")]
    pub use crate::future::Wait;
    pub use crate::future::{Completion, Future};
    pub use crate::outcome::Outcome;
}
