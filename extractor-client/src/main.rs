use dotenvy::dotenv;
use extractor_client::config::get_configuration;
use extractor_client::observability::init_tracing;
use extractor_client::ExtractorClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info");

    let client = ExtractorClient::new(configuration.api);
    info!(base_url = %client.base_url(), "Fetching backend overview");

    let overview = client.get_overview_stats().await?;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
