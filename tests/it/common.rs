use std::collections::HashMap;

use futures_util::future::{self, BoxFuture};

use elb_inventory::{
    BoxError, ListenerRef, LoadBalancerRef, LoadBalancingApi, ProviderClient, Tag, TagDescription,
    TargetGroupRef,
};

pub const ACCOUNT: &str = "inventory-testing";
pub const REGION: &str = "us-east-1";

pub const LOAD_BALANCER: &str =
    "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/web/50dc6c49";
pub const LISTENER_HTTP: &str =
    "arn:aws:elasticloadbalancing:us-east-1:123456789012:listener/app/web/50dc6c49/f2f7dc8e";
pub const LISTENER_HTTPS: &str =
    "arn:aws:elasticloadbalancing:us-east-1:123456789012:listener/app/web/50dc6c49/0467ef3c";
pub const TARGET_GROUP: &str =
    "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/web/73e2d6bc24d8a067";

/// A static, single load balancer environment.
///
/// Calls to `list_tags` for an ARN in `broken_arns` fail.
#[derive(Default)]
pub struct StaticApi {
    pub tags: HashMap<String, Vec<Tag>>,
    pub broken_arns: Vec<String>,
}

impl LoadBalancingApi for StaticApi {
    fn list_load_balancers(&self) -> BoxFuture<'_, Result<Vec<LoadBalancerRef>, BoxError>> {
        Box::pin(future::ok::<_, BoxError>(vec![LoadBalancerRef {
            arn: LOAD_BALANCER.to_string(),
        }]))
    }

    fn list_listeners<'a>(
        &'a self,
        _load_balancer_arn: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ListenerRef>, BoxError>> {
        Box::pin(future::ok::<_, BoxError>(
            [LISTENER_HTTP, LISTENER_HTTPS]
                .iter()
                .map(|arn| ListenerRef {
                    arn: (*arn).to_string(),
                })
                .collect(),
        ))
    }

    fn list_target_groups(&self) -> BoxFuture<'_, Result<Vec<TargetGroupRef>, BoxError>> {
        Box::pin(future::ok::<_, BoxError>(vec![TargetGroupRef {
            arn: TARGET_GROUP.to_string(),
            name: "web".to_string(),
        }]))
    }

    fn list_tags(
        &self,
        resource_arns: Vec<String>,
    ) -> BoxFuture<'_, Result<Vec<TagDescription>, BoxError>> {
        if let Some(arn) = resource_arns
            .iter()
            .find(|arn| self.broken_arns.contains(*arn))
        {
            let error = BoxError::from(format!("AccessDenied: {arn}"));
            return Box::pin(future::err::<Vec<TagDescription>, _>(error));
        }
        Box::pin(future::ok::<_, BoxError>(
            resource_arns
                .into_iter()
                .map(|arn| TagDescription {
                    tags: self.tags.get(&arn).cloned().unwrap_or_default(),
                    resource_arn: arn,
                })
                .collect(),
        ))
    }
}

pub fn tag(key: &str, value: &str) -> Tag {
    Tag {
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn get_client(api: StaticApi) -> ProviderClient {
    ProviderClient::new(api, ACCOUNT, REGION).unwrap()
}
