//! The normalized inventory record shared by all fetchers.

use chrono::{DateTime, Utc};
use enumset::EnumSetType;
use serde_plain::{forward_display_to_serde, forward_from_str_to_serde};

/// The provider reported on every [`Resource`] emitted by this crate.
pub const PROVIDER: &str = "AWS";

/// A resource tag.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tag {
    /// The tag key.
    pub key: String,

    /// The tag value.
    pub value: String,
}

impl Tag {
    pub(crate) fn from_sdk(tag: &aws_sdk_elasticloadbalancingv2::types::Tag) -> Option<Self> {
        Some(Self {
            key: tag.key()?.to_owned(),
            value: tag.value().unwrap_or_default().to_owned(),
        })
    }
}

/// The kinds of resource discovered by this crate.
///
/// The serialized (and displayed) form is the label used by the rest of the inventory, e.g.
/// `ELB Listener`.
#[derive(Debug, EnumSetType, serde::Deserialize, serde::Serialize)]
#[enumset(serialize_repr = "list")]
pub enum Service {
    /// Elastic Load Balancing (v2) listeners.
    #[serde(rename = "ELB Listener")]
    ElbListener,

    /// Elastic Load Balancing (v2) target groups.
    #[serde(rename = "Target Group")]
    TargetGroup,
}

forward_display_to_serde!(Service);
forward_from_str_to_serde!(Service);

impl Service {
    /// The AWS console link for a resource of this kind.
    ///
    /// Neither `region` nor `arn` is escaped. Target groups link to a load-balancer-shaped path.
    #[must_use]
    pub fn console_link(self, region: &str, arn: &str) -> String {
        match self {
            Self::ElbListener => format!(
                "https://{region}.console.aws.amazon.com/ec2/home?region={region}\
                 #ELBListenerV2:listenerArn={arn}"
            ),
            Self::TargetGroup => format!(
                "https://{region}.console.aws.amazon.com/ec2/home?region={region}\
                 #/LoadBalancer:loadBalancerArn={arn}"
            ),
        }
    }
}

/// A discovered cloud resource.
///
/// Values are built fresh by each fetch and are owned by the caller afterwards.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// The cloud provider, always [`PROVIDER`].
    pub provider: String,

    /// The display name of the account the resource was fetched from.
    pub account: String,

    /// The kind of resource.
    pub service: Service,

    /// The provider-assigned identifier (an ARN).
    pub resource_id: String,

    /// The region the resource lives in.
    pub region: String,

    /// A human readable name.
    ///
    /// Listeners have no name of their own, so this is their ARN.
    pub name: String,

    /// Tags attached to the resource, in the order AWS reported them.
    pub tags: Vec<Tag>,

    /// When the resource was fetched.
    pub fetched_at: DateTime<Utc>,

    /// Link to the resource in the AWS console.
    pub link: String,

    /// Estimated monthly cost.
    ///
    /// Reserved for pricing support; fetchers in this crate leave it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// When the resource was created, if AWS reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
