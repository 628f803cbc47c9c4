use clap::Parser;
use tracing_subscriber::EnvFilter;
use webserver::{
    app::App,
    init::{settings::Settings, setup::setup},
    SharedState,
};

/// Timestamp and search redirect webserver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(short, long)]
    address: Option<String>,
    /// Listening port
    #[arg(short, long)]
    port: Option<u16>,
    /// HTTPS enable
    #[arg(long, conflicts_with = "no_https")]
    https: bool,
    /// HTTPS disable
    #[arg(long)]
    no_https: bool,
    /// Certificate directory
    #[arg(long)]
    certs_dir: Option<String>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = Settings::new(
        args.config_file,
        args.address,
        args.port,
        if args.no_https {
            Some(false)
        } else if args.https {
            Some(true)
        } else {
            None
        },
        args.certs_dir,
    )?;
    settings.print();

    let resources = setup(&settings).await?;

    let app = App::new(SharedState::default());
    if let Err(e) = app.serve(&resources.address, resources.tls_config).await {
        tracing::error!("Server exited with error: {}", e);
        return Err(e.into());
    }

    tracing::info!("Server exited");
    Ok(())
}
