use crate::{Context, Error, FetchError, ProviderClient, Resource, Service};

use super::{build_resource, finish, flatten_tags};

/// Fetch every target group visible to `client`.
///
/// Target groups are listed, then the tags of each are fetched (one call per target group).
/// Target groups with an empty ARN are skipped.
///
/// A summary is logged at `INFO` once every target group has been fetched.
///
/// # Errors
///
/// The first failed call ends the fetch. The returned [`FetchError`] holds the target groups
/// fetched up to that point.
pub async fn target_groups(
    ctx: &Context,
    client: &ProviderClient,
) -> Result<Vec<Resource>, FetchError> {
    let mut resources = Vec::new();
    let result = fetch(ctx, client, &mut resources).await;
    finish(client, Service::TargetGroup, resources, result)
}

async fn fetch(
    ctx: &Context,
    client: &ProviderClient,
    resources: &mut Vec<Resource>,
) -> Result<(), Error> {
    let api = client.api();

    for target_group in ctx.run(api.list_target_groups()).await? {
        if target_group.arn.is_empty() {
            continue;
        }
        let tags = ctx
            .run(api.list_tags(vec![target_group.arn.clone()]))
            .await?;
        resources.push(build_resource(
            client,
            Service::TargetGroup,
            target_group.arn,
            target_group.name,
            flatten_tags(tags),
        ));
    }

    Ok(())
}
