//! Inventory connectors for Elastic Load Balancing (v2) listeners and target groups.
//!
//! The fetchers in [`elb`] list resources through a [`ProviderClient`], attach their tags, and
//! normalize them into [`Resource`] records:
//!
//! ```no_run
//! use elb_inventory::{elb, Context, ProviderClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProviderClient::from_env().await?;
//! for listener in elb::listeners(&Context::new(), &client).await? {
//!     println!("{} {}", listener.resource_id, listener.link);
//! }
//! # Ok(())
//! # }
//! ```
#![warn(clippy::pedantic)]

mod api;
mod client;
mod context;
mod error;
mod resource;


pub mod elb;
pub mod inventory;

pub use api::{ListenerRef, LoadBalancerRef, LoadBalancingApi, TagDescription, TargetGroupRef};
pub use client::{AccountConfig, ProviderClient};
pub use context::Context;
pub use error::{BoxError, ConfigError, Error, FetchError};
pub use resource::{Resource, Service, Tag, PROVIDER};
