use std::{env, process, time::Duration};

use elb_inventory::{inventory, AccountConfig, Context, ProviderClient, Service};
use enumset::EnumSet;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: cargo run --example inventory -- [listeners|target-groups] [--profile <profile>]";

fn parse_args() -> Result<AccountConfig, &'static str> {
    let mut account = AccountConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "listeners" => account.services = EnumSet::only(Service::ElbListener),
            "target-groups" => account.services = EnumSet::only(Service::TargetGroup),
            "--profile" => account.profile = Some(args.next().ok_or(USAGE)?),
            _ => return Err(USAGE),
        }
    }
    Ok(account)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = try_main().await {
        eprintln!("{error}");
        let mut source = error.source();
        while let Some(error) = source {
            eprintln!("  caused by: {error}");
            source = error.source();
        }
        process::exit(1);
    }
}

async fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let account = parse_args()?;
    let client = ProviderClient::load(&account).await?;
    let ctx = Context::new().set_timeout(Duration::from_secs(120));

    let resources = inventory::fetch(&ctx, &client, account.services).await?;
    println!("{}", serde_json::to_string_pretty(&resources)?);

    Ok(())
}
