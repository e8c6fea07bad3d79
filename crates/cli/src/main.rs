use clap::Parser;
use tailnet_dns_domain::CliOverrides;
use tailnet_dns_infrastructure::dns::DnsServerHandler;
use tailnet_dns_jobs::JobRunner;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "tailnet-dns")]
#[command(version)]
#[command(about = "Tailnet DNS - authoritative DNS for the peers of a tailnet")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Zone to serve peer names under (e.g. ts.example.com)
    #[arg(short = 'z', long)]
    zone: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        zone: cli.zone.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if cli.check_config {
        println!("Configuration OK (zone {})", config.directory.zone.trim());
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!("Starting Tailnet DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DirectoryServices::new(&config)?;
    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_directory_refresh(services.refresh_job(&config))
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let dns_handler = DnsServerHandler::new(services.zone_handler.clone());

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler, shutdown.clone()) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                shutdown.cancel();
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    shutdown.cancel();
    info!("Server shutdown complete");
    Ok(())
}
