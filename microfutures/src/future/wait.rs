//! Bridge from callback futures to [`std::future::Future`].

use std::{
    any::type_name,
    error::Error,
    future::{Future as StdFuture, IntoFuture},
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::ready;
use log::trace;
use pin_project_lite::pin_project;
use tokio::sync::oneshot;

use crate::{
    future::{Completion, Future},
    outcome::Outcome,
};

pin_project! {
    /// Future for awaiting a [`Future`] from async code.
    ///
    /// Created by [`IntoFuture::into_future`], which `.await` calls. The wrapped
    /// operation is started on the first poll, so building a `Wait` is as lazy
    /// as building the chain itself. No task is spawned: the outcome is
    /// delivered through a oneshot channel whose receiver wakes the awaiting
    /// task.
    ///
    /// # Panics
    ///
    /// Polling panics if a leaf operation in the chain drops its
    /// [`Completion`] without delivering an outcome, and if polled again after
    /// returning `Poll::Ready`.
    #[project = WaitProj]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub enum Wait<T, E> {
        Idle {
            future: Option<Future<T, E>>,
        },
        Waiting {
            rx: oneshot::Receiver<Outcome<T, E>>,
        },
        Complete,
    }
}

impl<T, E> StdFuture for Wait<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, task: &mut Context<'_>) -> Poll<Self::Output> {
        match self.as_mut().project() {
            WaitProj::Idle { future } => {
                let future = future.take().unwrap();
                let (tx, rx) = oneshot::channel();

                trace!("Awaiting Future<{}>", type_name::<T>());
                self.set(Wait::Waiting { rx });

                future.run(Completion::new(move |outcome| {
                    // receiver gone means the awaiting task was dropped
                    let _ = tx.send(outcome);
                }));

                self.poll(task)
            }
            WaitProj::Waiting { rx } => {
                let outcome = match ready!(Pin::new(rx).poll(task)) {
                    Ok(outcome) => outcome,
                    Err(_) => panic!(
                        "Future<{}> completion dropped without an outcome",
                        type_name::<T>()
                    ),
                };
                self.set(Wait::Complete);
                Poll::Ready(outcome.into_result())
            }
            WaitProj::Complete => panic!("Wait polled after completion"),
        }
    }
}

impl<T, E> IntoFuture for Future<T, E>
where
    T: Send + 'static,
    E: Error + Send + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = Wait<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        Wait::Idle { future: Some(self) }
    }
}
