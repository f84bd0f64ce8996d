//! Fetchers for Elastic Load Balancing (v2) resources.
//!
//! Each fetcher makes its API calls one at a time and stops at the first error. Nothing is
//! retried, and only the first page of each listing is read.

mod listener;
mod target_group;

use chrono::Utc;

use crate::{
    api::TagDescription, Error, FetchError, ProviderClient, Resource, Service, Tag, PROVIDER,
};

pub use listener::listeners;
pub use target_group::target_groups;

/// Flatten every tag of every description, keeping their order.
fn flatten_tags(descriptions: Vec<TagDescription>) -> Vec<Tag> {
    descriptions
        .into_iter()
        .flat_map(|description| description.tags)
        .collect()
}

fn build_resource(
    client: &ProviderClient,
    service: Service,
    arn: String,
    name: String,
    tags: Vec<Tag>,
) -> Resource {
    Resource {
        provider: PROVIDER.to_string(),
        account: client.name().to_string(),
        service,
        link: service.console_link(client.region(), &arn),
        resource_id: arn,
        region: client.region().to_string(),
        name,
        tags,
        fetched_at: Utc::now(),
        cost: None,
        created_at: None,
    }
}

/// Pair the outcome of a fetch with the resources it gathered, logging a summary on success.
fn finish(
    client: &ProviderClient,
    service: Service,
    resources: Vec<Resource>,
    result: Result<(), Error>,
) -> Result<Vec<Resource>, FetchError> {
    if let Err(error) = result {
        return Err(FetchError { resources, error });
    }

    tracing::info!(
        provider = PROVIDER,
        account = client.name(),
        region = client.region(),
        service = %service,
        resources = resources.len(),
        "Fetched resources"
    );
    Ok(resources)
}
