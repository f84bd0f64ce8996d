use std::fmt;

use crate::Resource;

/// A boxed error returned by a [`LoadBalancingApi`](crate::LoadBalancingApi) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop a fetch.
#[derive(Debug)]
pub enum Error {
    /// An upstream API call failed.
    ///
    /// The inner error is exactly what the [`LoadBalancingApi`](crate::LoadBalancingApi)
    /// implementation returned. For the AWS SDK client that is an `SdkError`, which can be
    /// recovered with [`Box::downcast`] if you need to match a particular API error.
    ///
    /// This variant is transparent: it displays as the inner error, and its source is the inner
    /// error's source.
    Api(BoxError),

    /// The [`Context`](crate::Context) was cancelled before the call completed.
    Cancelled,

    /// The [`Context`](crate::Context) deadline passed before the call completed.
    DeadlineExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(error) => write!(f, "{error}"),
            Self::Cancelled => write!(f, "operation cancelled"),
            Self::DeadlineExceeded => write!(f, "operation deadline exceeded"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(error) => error.source(),
            Self::Cancelled | Self::DeadlineExceeded => None,
        }
    }
}

/// A failed fetch.
///
/// The displayed message only summarizes the failure. What went wrong is the [`source`] (and
/// [`FetchError::error`]).
///
/// Fetches stop at the first error, but the resources gathered before that point are kept here in
/// case the caller wants to use them:
///
/// ```no_run
/// # use elb_inventory::{elb, Context, FetchError, ProviderClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), FetchError> {
/// # let client: ProviderClient = todo!();
/// let resources = elb::listeners(&Context::new(), &client)
///     .await
///     .or_else(|error| {
///         eprintln!("partial inventory: {}", error.error);
///         Ok::<_, FetchError>(error.resources)
///     })?;
/// # Ok(())
/// # }
/// ```
///
/// [`source`]: std::error::Error::source
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FetchError {
    /// Resources fetched before the failure.
    pub resources: Vec<Resource>,

    /// What went wrong.
    pub error: Error,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed after {} resources", self.resources.len())
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Errors that can occur when building a [`ProviderClient`](crate::ProviderClient).
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    /// No region could be determined from the environment or profile, or the region was empty.
    MissingRegion,

    /// No account name was configured and looking up the caller's account failed.
    AccountLookup(BoxError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRegion => write!(f, "no AWS region configured"),
            Self::AccountLookup(_) => write!(f, "failed to look up AWS account"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingRegion => None,
            Self::AccountLookup(error) => Some(error.as_ref()),
        }
    }
}
