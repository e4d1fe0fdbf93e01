use clap::Parser;
use mockapetris_api::AppState;
use mockapetris_domain::{CliOverrides, StoreBackend};
use mockapetris_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mockapetris")]
#[command(version)]
#[command(about = "Mockapetris - minimal authoritative DNS responder with a record control plane")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Control-plane HTTP port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Record store backend (memory, sqlite, redis)
    #[arg(long, value_name = "BACKEND")]
    store: Option<StoreBackend>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        store_backend: cli.store,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Mockapetris v{}", env!("CARGO_PKG_VERSION"));

    let store = bootstrap::build_store(&config.store).await?;
    let use_cases = di::UseCases::new(store, &config);

    let app_state = AppState {
        set_record: use_cases.set_record,
        delete_record: use_cases.delete_record,
        get_record: use_cases.get_record,
    };

    let web_listener = server::bind_web_server(&config.server.web_addr()).await?;
    let web_server = tokio::spawn(server::start_web_server(web_listener, app_state));

    let dns_handler = DnsServerHandler::new(use_cases.resolve_query);
    let dns_server = server::start_dns_server(config.server.dns_addr(), dns_handler, &config.dns);

    tokio::select! {
        result = dns_server => result?,
        result = web_server => {
            result??;
            anyhow::bail!("control-plane server stopped unexpectedly");
        }
    }

    Ok(())
}
