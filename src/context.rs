//! Cancellation and deadlines for fetches.

use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{error::BoxError, Error};

/// Governs how long a fetch may run.
///
/// Every API call made by a fetcher is raced against the context's cancellation token and
/// deadline (if any). Whichever finishes first wins, and a cancelled or expired context fails the
/// fetch like any other error.
///
/// Contexts are cheap to clone, and clones share the same cancellation token.
///
/// ```
/// use std::time::Duration;
/// use elb_inventory::Context;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = Context::new()
///     .set_cancellation_token(token.clone())
///     .set_timeout(Duration::from_secs(30));
/// // ...
/// token.cancel();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancellation_token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token that cancels this context.
    ///
    /// **Note:** this consumes and returns `self` for chaining.
    #[must_use]
    pub fn set_cancellation_token(mut self, cancellation_token: CancellationToken) -> Self {
        self.cancellation_token = cancellation_token;
        self
    }

    /// Set the instant after which calls fail with [`Error::DeadlineExceeded`].
    ///
    /// **Note:** this consumes and returns `self` for chaining.
    #[must_use]
    pub fn set_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline to `timeout` from now.
    ///
    /// **Note:** this consumes and returns `self` for chaining.
    #[must_use]
    pub fn set_timeout(self, timeout: Duration) -> Self {
        self.set_deadline(Instant::now() + timeout)
    }

    /// The token that cancels this context.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// The deadline, if one was set.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) async fn run<T, F>(&self, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, BoxError>>,
    {
        let call = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, call)
                    .await
                    .map_err(|_| Error::DeadlineExceeded)?
                    .map_err(Error::Api),
                None => call.await.map_err(Error::Api),
            }
        };

        tokio::select! {
            biased;
            () = self.cancellation_token.cancelled() => Err(Error::Cancelled),
            result = call => result,
        }
    }
}
