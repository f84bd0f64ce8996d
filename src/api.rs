//! The load-balancing API surface used by the fetchers.
//!
//! Fetchers only ever talk to a [`LoadBalancingApi`], which is implemented for the AWS SDK
//! [`Client`](aws_sdk_elasticloadbalancingv2::Client). Alternative implementations (other
//! providers, fakes in tests) only need to produce the small reference types in this module.

use aws_sdk_elasticloadbalancingv2::{
    operation::{
        describe_listeners::DescribeListenersOutput,
        describe_load_balancers::DescribeLoadBalancersOutput, describe_tags::DescribeTagsOutput,
        describe_target_groups::DescribeTargetGroupsOutput,
    },
    Client,
};
use futures_util::future::BoxFuture;

use crate::{error::BoxError, Tag};

/// A load balancer, as far as the fetchers are concerned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadBalancerRef {
    /// The load balancer's ARN.
    pub arn: String,
}

/// A listener, as far as the fetchers are concerned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListenerRef {
    /// The listener's ARN.
    pub arn: String,
}

/// A target group, as far as the fetchers are concerned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetGroupRef {
    /// The target group's ARN.
    pub arn: String,

    /// The target group's declared name.
    pub name: String,
}

/// The tags of a single resource.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagDescription {
    /// The ARN of the tagged resource.
    pub resource_arn: String,

    /// The resource's tags.
    pub tags: Vec<Tag>,
}

/// Listing and tagging operations for load-balancing resources.
///
/// Only the first page of each listing is returned. Resources without an ARN are left out.
pub trait LoadBalancingApi: Send + Sync {
    /// List all load balancers.
    fn list_load_balancers(&self) -> BoxFuture<'_, Result<Vec<LoadBalancerRef>, BoxError>>;

    /// List the listeners of one load balancer.
    fn list_listeners<'a>(
        &'a self,
        load_balancer_arn: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ListenerRef>, BoxError>>;

    /// List all target groups.
    fn list_target_groups(&self) -> BoxFuture<'_, Result<Vec<TargetGroupRef>, BoxError>>;

    /// Describe the tags of the given resources.
    ///
    /// A description may be returned per resource, each with any number of tags.
    fn list_tags(
        &self,
        resource_arns: Vec<String>,
    ) -> BoxFuture<'_, Result<Vec<TagDescription>, BoxError>>;
}

impl LoadBalancingApi for Client {
    fn list_load_balancers(&self) -> BoxFuture<'_, Result<Vec<LoadBalancerRef>, BoxError>> {
        Box::pin(async move {
            let output = self.describe_load_balancers().send().await?;
            Ok(load_balancer_refs(&output))
        })
    }

    fn list_listeners<'a>(
        &'a self,
        load_balancer_arn: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ListenerRef>, BoxError>> {
        Box::pin(async move {
            let output = self
                .describe_listeners()
                .load_balancer_arn(load_balancer_arn)
                .send()
                .await?;
            Ok(listener_refs(&output))
        })
    }

    fn list_target_groups(&self) -> BoxFuture<'_, Result<Vec<TargetGroupRef>, BoxError>> {
        Box::pin(async move {
            let output = self.describe_target_groups().send().await?;
            Ok(target_group_refs(&output))
        })
    }

    fn list_tags(
        &self,
        resource_arns: Vec<String>,
    ) -> BoxFuture<'_, Result<Vec<TagDescription>, BoxError>> {
        Box::pin(async move {
            let output = self
                .describe_tags()
                .set_resource_arns(Some(resource_arns))
                .send()
                .await?;
            Ok(tag_descriptions(&output))
        })
    }
}

/// An owned ARN, or `None` if it is missing or empty.
fn arn(arn: Option<&str>) -> Option<String> {
    arn.filter(|arn| !arn.is_empty()).map(ToOwned::to_owned)
}

fn load_balancer_refs(output: &DescribeLoadBalancersOutput) -> Vec<LoadBalancerRef> {
    output
        .load_balancers()
        .iter()
        .filter_map(|load_balancer| {
            Some(LoadBalancerRef {
                arn: arn(load_balancer.load_balancer_arn())?,
            })
        })
        .collect()
}

fn listener_refs(output: &DescribeListenersOutput) -> Vec<ListenerRef> {
    output
        .listeners()
        .iter()
        .filter_map(|listener| {
            Some(ListenerRef {
                arn: arn(listener.listener_arn())?,
            })
        })
        .collect()
}

fn target_group_refs(output: &DescribeTargetGroupsOutput) -> Vec<TargetGroupRef> {
    output
        .target_groups()
        .iter()
        .filter_map(|target_group| {
            let name = target_group.target_group_name().unwrap_or_default();
            Some(TargetGroupRef {
                arn: arn(target_group.target_group_arn())?,
                name: name.to_owned(),
            })
        })
        .collect()
}

fn tag_descriptions(output: &DescribeTagsOutput) -> Vec<TagDescription> {
    output
        .tag_descriptions()
        .iter()
        .map(|description| {
            let resource_arn = description.resource_arn().unwrap_or_default();
            let tags = description.tags().iter().filter_map(Tag::from_sdk);
            TagDescription {
                resource_arn: resource_arn.to_owned(),
                tags: tags.collect(),
            }
        })
        .collect()
}
