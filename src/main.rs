pub mod config;
pub mod extract;
pub mod imdb;
pub mod web;

use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("titlesearch=info".parse()?),
        )
        .init();

    let config = config::Config::read("config.toml")?;
    web::run(config).await
}
