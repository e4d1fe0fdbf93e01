use super::server::DnsServerHandler;
use super::wire::MAX_PACKET_SIZE;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

type Datagram = (Vec<u8>, SocketAddr);

/// Owns the UDP socket and drives [`DnsServerHandler`] for every datagram.
///
/// With one worker (the default) requests are served strictly in arrival
/// order, one at a time. With more, the receive loop feeds a bounded queue
/// and datagrams that find it full are dropped.
pub struct DnsListener {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    workers: usize,
    queue_capacity: usize,
}

impl DnsListener {
    pub async fn bind(addr: &str, handler: DnsServerHandler) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self::from_socket(socket, handler))
    }

    pub fn from_socket(socket: UdpSocket, handler: DnsServerHandler) -> Self {
        Self {
            socket: Arc::new(socket),
            handler: Arc::new(handler),
            workers: 1,
            queue_capacity: 1,
        }
    }

    pub fn with_workers(mut self, workers: usize, queue_capacity: usize) -> Self {
        self.workers = workers.max(1);
        self.queue_capacity = queue_capacity.max(1);
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves until the task is dropped or aborted.
    pub async fn run(self) {
        let local_addr = self.local_addr().ok();
        info!(bind_address = ?local_addr, workers = self.workers, "DNS listener ready");

        if self.workers == 1 {
            self.run_sequential().await;
        } else {
            self.run_pool().await;
        }
    }

    async fn run_sequential(self) {
        let mut recv_buf = [0u8; MAX_PACKET_SIZE];

        loop {
            let (n, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            };

            if let Some(reply) = self.handler.handle_raw(&recv_buf[..n], from).await {
                send_reply(&self.socket, &reply, from).await;
            }
        }
    }

    async fn run_pool(self) {
        let (tx, rx) = mpsc::channel::<Datagram>(self.queue_capacity);
        let rx = Arc::new(Mutex::new(rx));
        let mut join_set: JoinSet<()> = JoinSet::new();

        for worker_id in 0..self.workers {
            let rx = Arc::clone(&rx);
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&self.handler);
            join_set.spawn(async move {
                loop {
                    // lock only for the dequeue so other workers keep serving
                    let next = rx.lock().await.recv().await;
                    let Some((buf, from)) = next else {
                        break;
                    };
                    if let Some(reply) = handler.handle_raw(&buf, from).await {
                        send_reply(&socket, &reply, from).await;
                    }
                }
                info!(worker = worker_id, "DNS worker stopped");
            });
        }

        let mut recv_buf = [0u8; MAX_PACKET_SIZE];

        loop {
            let (n, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            };

            match tx.try_send((recv_buf[..n].to_vec(), from)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(client = %from, "Request queue full, dropping datagram");
                }
                Err(TrySendError::Closed(_)) => {
                    error!("All DNS workers stopped");
                    break;
                }
            }
        }

        drop(tx);
        while join_set.join_next().await.is_some() {}
    }
}

async fn send_reply(socket: &UdpSocket, reply: &[u8], to: SocketAddr) {
    if let Err(e) = socket.send_to(reply, to).await {
        warn!(client = %to, error = %e, "Failed to send response");
    }
}
