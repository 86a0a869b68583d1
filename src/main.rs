use placetrace::clients::init_google_maps;
use placetrace::config::Config;
use placetrace::pipeline;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    init_google_maps(&config)?;

    pipeline::run(&config).await?;

    Ok(())
}
