use assert_matches::assert_matches;

use elb_inventory::{elb, ConfigError, Context, Error, ProviderClient, Service, PROVIDER};

use crate::common::{
    get_client, tag, StaticApi, ACCOUNT, LISTENER_HTTP, LISTENER_HTTPS, REGION, TARGET_GROUP,
};

#[tokio::test]
async fn listeners_ok() -> Result<(), Box<dyn std::error::Error>> {
    let api = StaticApi {
        tags: [
            (LISTENER_HTTP.to_string(), vec![tag("a", "1")]),
            (LISTENER_HTTPS.to_string(), vec![tag("b", "2")]),
        ]
        .into_iter()
        .collect(),
        ..StaticApi::default()
    };
    let client = get_client(api);

    let resources = elb::listeners(&Context::new(), &client).await?;

    assert_eq!(resources.len(), 2);
    for resource in &resources {
        assert_eq!(resource.provider, PROVIDER);
        assert_eq!(resource.account, ACCOUNT);
        assert_eq!(resource.service, Service::ElbListener);
        assert_eq!(resource.region, REGION);
        assert!(!resource.link.is_empty());
    }
    assert_eq!(resources[0].name, LISTENER_HTTP);
    assert_eq!(resources[0].tags, vec![tag("a", "1")]);
    assert_eq!(resources[1].name, LISTENER_HTTPS);
    assert_eq!(resources[1].tags, vec![tag("b", "2")]);

    Ok(())
}

#[tokio::test]
async fn target_groups_ok() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client(StaticApi::default());

    let resources = elb::target_groups(&Context::new(), &client).await?;

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].service, Service::TargetGroup);
    assert_eq!(resources[0].resource_id, TARGET_GROUP);
    assert_eq!(resources[0].name, "web");
    assert!(resources[0].tags.is_empty());
    assert_eq!(
        resources[0].link,
        format!(
            "https://us-east-1.console.aws.amazon.com/ec2/home?region=us-east-1\
             #/LoadBalancer:loadBalancerArn={TARGET_GROUP}"
        )
    );

    Ok(())
}

#[tokio::test]
async fn listeners_tag_error() {
    let client = get_client(StaticApi {
        broken_arns: vec![LISTENER_HTTPS.to_string()],
        ..StaticApi::default()
    });

    let error = elb::listeners(&Context::new(), &client).await.unwrap_err();

    assert_eq!(error.resources.len(), 1);
    assert_eq!(error.resources[0].resource_id, LISTENER_HTTP);
    let source = assert_matches!(error.error, Error::Api(source) => source);
    assert_eq!(
        source.to_string(),
        format!("AccessDenied: {LISTENER_HTTPS}")
    );
}

#[test]
fn client_without_region() {
    assert_matches!(
        ProviderClient::new(StaticApi::default(), ACCOUNT, ""),
        Err(ConfigError::MissingRegion)
    );
}

#[tokio::test]
async fn serialized_resource() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client(StaticApi {
        tags: [(TARGET_GROUP.to_string(), vec![tag("env", "prod")])]
            .into_iter()
            .collect(),
        ..StaticApi::default()
    });

    let resources = elb::target_groups(&Context::new(), &client).await?;
    let json = serde_json::to_value(&resources[0])?;

    assert_eq!(json["provider"], "AWS");
    assert_eq!(json["account"], ACCOUNT);
    assert_eq!(json["service"], "Target Group");
    assert_eq!(json["resourceId"], TARGET_GROUP);
    assert_eq!(json["region"], REGION);
    assert_eq!(json["name"], "web");
    assert_eq!(
        json["tags"],
        serde_json::json!([{ "key": "env", "value": "prod" }])
    );
    assert!(json["fetchedAt"].is_string());
    assert!(json.get("cost").is_none());
    assert!(json.get("createdAt").is_none());

    let round_trip: elb_inventory::Resource = serde_json::from_value(json)?;
    assert_eq!(round_trip, resources[0]);

    Ok(())
}
