use reviewkit::endpoint::resolve_base_url;
use reviewkit::Config;

pub fn execute(config: &Config, host: &str) -> anyhow::Result<()> {
    println!("{}", resolve_base_url(host, &config.endpoints));
    Ok(())
}
