use reviewkit::{Config, ReviewClient};
use tracing::info;

pub async fn execute(config: &Config, host: &str) -> anyhow::Result<()> {
    let client = ReviewClient::new(config, host)?;

    match client.prewarm() {
        Some(probe) => {
            // The probe logs its own outcome; a join error only means it panicked.
            probe.await?;
            println!("Prewarm finished for {}", client.base_url());
        }
        None => {
            info!("Prewarm is disabled in config");
            println!("Prewarm disabled");
        }
    }
    Ok(())
}
