//! Fetch several kinds of resource in one go.

use enumset::EnumSet;

use crate::{elb, Context, FetchError, ProviderClient, Resource, Service};

/// Fetch every selected service from `client`, one after the other.
///
/// Services are fetched in declaration order ([`Service::ElbListener`] before
/// [`Service::TargetGroup`]) and their resources concatenated.
///
/// # Errors
///
/// Stops at the first failing service. The returned [`FetchError`] holds every resource fetched
/// before the failure, including those of earlier services.
pub async fn fetch(
    ctx: &Context,
    client: &ProviderClient,
    services: EnumSet<Service>,
) -> Result<Vec<Resource>, FetchError> {
    let mut resources = Vec::new();
    for service in services {
        let fetched = match service {
            Service::ElbListener => elb::listeners(ctx, client).await,
            Service::TargetGroup => elb::target_groups(ctx, client).await,
        };
        match fetched {
            Ok(fetched) => resources.extend(fetched),
            Err(mut error) => {
                resources.append(&mut error.resources);
                error.resources = resources;
                return Err(error);
            }
        }
    }
    Ok(resources)
}
