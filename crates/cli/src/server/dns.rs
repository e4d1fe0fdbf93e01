use mockapetris_domain::DnsConfig;
use mockapetris_infrastructure::dns::{DnsListener, DnsServerHandler};
use tracing::info;

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    cfg: &DnsConfig,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        workers = cfg.workers,
        answer_ttl = cfg.answer_ttl,
        "Starting DNS server"
    );

    let listener = DnsListener::bind(&bind_addr, handler)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind DNS socket on {}: {}", bind_addr, e))?
        .with_workers(cfg.workers, cfg.queue_capacity);

    listener.run().await;
    Ok(())
}
