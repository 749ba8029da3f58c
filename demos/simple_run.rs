use proxygg::configuration::Settings;
use proxygg::{Format, ProxyClient, ProxyType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("proxygg", log::LevelFilter::Debug)
        .init();

    // Needs api_key in config.toml or PROXYGG_API_KEY
    let settings = Settings::new()?;
    let client = ProxyClient::from_settings(&settings);

    let proxies = client.fetch_proxies(ProxyType::Https, 10, None).await?;
    println!("Found {} proxies", proxies.len());
    for proxy in &proxies {
        println!("{}", proxy);
    }

    let table = client
        .fetch_raw_proxies(ProxyType::Socks, 5, Format::Table, Some("US"))
        .await?;
    println!("{}", table);

    Ok(())
}
