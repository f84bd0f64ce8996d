use crate::{Context, Error, FetchError, ProviderClient, Resource, Service};

use super::{build_resource, finish, flatten_tags};

/// Fetch the listeners of every load balancer visible to `client`.
///
/// Load balancers are listed first, then the listeners of each one, then the tags of each
/// listener (one call per listener). Listeners have no name of their own, so their ARN is used as
/// the resource name. Load balancers and listeners with an empty ARN are skipped.
///
/// A summary is logged at `INFO` once every listener has been fetched.
///
/// # Errors
///
/// The first failed call ends the fetch. The returned [`FetchError`] holds the listeners fetched
/// up to that point.
pub async fn listeners(
    ctx: &Context,
    client: &ProviderClient,
) -> Result<Vec<Resource>, FetchError> {
    let mut resources = Vec::new();
    let result = fetch(ctx, client, &mut resources).await;
    finish(client, Service::ElbListener, resources, result)
}

async fn fetch(
    ctx: &Context,
    client: &ProviderClient,
    resources: &mut Vec<Resource>,
) -> Result<(), Error> {
    let api = client.api();

    for load_balancer in ctx.run(api.list_load_balancers()).await? {
        if load_balancer.arn.is_empty() {
            continue;
        }
        for listener in ctx.run(api.list_listeners(&load_balancer.arn)).await? {
            if listener.arn.is_empty() {
                continue;
            }
            let tags = ctx.run(api.list_tags(vec![listener.arn.clone()])).await?;
            resources.push(build_resource(
                client,
                Service::ElbListener,
                listener.arn.clone(),
                listener.arn,
                flatten_tags(tags),
            ));
        }
    }

    Ok(())
}
