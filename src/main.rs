mod watson;
mod web;

use clap::Parser;

#[derive(clap::Parser)]
struct Opts {
    #[clap(default_value = "config.toml")]
    config: std::path::PathBuf,
}

fn bind_addr_default() -> std::net::SocketAddr {
    ([0, 0, 0, 0], 5000).into()
}

#[derive(serde::Deserialize)]
struct Config {
    #[serde(default = "bind_addr_default")]
    bind_addr: std::net::SocketAddr,

    #[serde(default)]
    watson: watson::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: bind_addr_default(),
            watson: watson::Config::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_module("moodring", log::LevelFilter::Info)
        .init();

    let opts = Opts::parse();

    // Every field has a default, so a missing config file just means a stock
    // deployment.
    let config = if opts.config.exists() {
        toml::from_str::<Config>(std::str::from_utf8(&std::fs::read(&opts.config)?)?)?
    } else {
        Config::default()
    };

    let watson = watson::Client::new(&config.watson)?;
    let state = web::AppState::new(watson)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);

    web::serve(listener, state).await?;

    Ok(())
}
