//! Authenticated access to one account and region.

use std::{fmt, sync::Arc};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use enumset::EnumSet;

use crate::{ConfigError, LoadBalancingApi, Service};

/// An account to take inventory of.
///
/// This is typically deserialized from the inventory's configuration file:
///
/// ```
/// # use elb_inventory::{AccountConfig, Service};
/// # use enumset::EnumSet;
/// let account: AccountConfig = serde_json::from_str(r#"{
///     "name": "production",
///     "profile": "prod",
///     "region": "eu-west-2",
///     "services": ["Target Group"]
/// }"#).unwrap();
/// assert_eq!(account.services, EnumSet::only(Service::TargetGroup));
/// ```
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[allow(clippy::module_name_repetitions)]
pub struct AccountConfig {
    /// The display name of the account.
    ///
    /// If not set, the account ID of the configured credentials is used.
    pub name: Option<String>,

    /// The shared config profile to load credentials and region from.
    ///
    /// If not set, the default credential and region chains are used.
    pub profile: Option<String>,

    /// The region to take inventory of, overriding any region from the environment or profile.
    pub region: Option<String>,

    /// The services to fetch. Defaults to all of them.
    pub services: EnumSet<Service>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            name: None,
            profile: None,
            region: None,
            services: EnumSet::all(),
        }
    }
}

/// An authenticated load-balancing API handle for a single account and region.
///
/// Fetchers only read from the client, and clones share the same underlying API handle, so a single
/// client can serve any number of concurrent fetches.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ProviderClient {
    api: Arc<dyn LoadBalancingApi>,
    name: String,
    region: String,
}

impl ProviderClient {
    /// Construct a client from any [`LoadBalancingApi`] implementation.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::MissingRegion`] if `region` is empty.
    pub fn new(
        api: impl LoadBalancingApi + 'static,
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ConfigError::MissingRegion);
        }
        Ok(Self {
            api: Arc::new(api),
            name: name.into(),
            region,
        })
    }

    /// Construct a client using the AWS SDK with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::MissingRegion`] if `config` has no region, or an empty one.
    pub fn from_sdk_config(
        config: &SdkConfig,
        name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let region = match config.region() {
            Some(region) if !region.as_ref().trim().is_empty() => region.to_string(),
            _ => return Err(ConfigError::MissingRegion),
        };
        Self::new(aws_sdk_elasticloadbalancingv2::Client::new(config), name, region)
    }

    /// Construct a client from the environment, naming it after the caller's account ID.
    ///
    /// # Errors
    ///
    /// Fails if no region is configured or if the account ID can't be looked up.
    pub async fn from_env() -> Result<Self, ConfigError> {
        Self::load(&AccountConfig::default()).await
    }

    /// Construct a client for a configured account.
    ///
    /// # Errors
    ///
    /// Fails if no region is configured, or if `account` has no name and the account ID can't be
    /// looked up.
    pub async fn load(account: &AccountConfig) -> Result<Self, ConfigError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &account.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &account.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let config = loader.load().await;

        let name = match &account.name {
            Some(name) => name.clone(),
            None => account_id(&config).await?,
        };
        Self::from_sdk_config(&config, name)
    }

    /// The load-balancing API handle.
    #[must_use]
    pub fn api(&self) -> &dyn LoadBalancingApi {
        self.api.as_ref()
    }

    /// The display name of the account.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region the client operates in.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClient")
            .field("name", &self.name)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

async fn account_id(config: &SdkConfig) -> Result<String, ConfigError> {
    let identity = aws_sdk_sts::Client::new(config)
        .get_caller_identity()
        .send()
        .await
        .map_err(|error| ConfigError::AccountLookup(error.into()))?;
    identity
        .account()
        .map(ToOwned::to_owned)
        .ok_or_else(|| ConfigError::AccountLookup("GetCallerIdentity without account".into()))
}
