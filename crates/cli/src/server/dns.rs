use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_infrastructure::dns::DnsServerHandler;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const MAX_UDP_SIZE: usize = 4096;
const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let handler = Arc::new(handler);

    let udp_socket = Arc::new(UdpSocket::bind(socket_addr).await?);
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    info!(bind_address = %socket_addr, "DNS server listening on UDP and TCP");

    let mut join_set: JoinSet<()> = JoinSet::new();
    join_set.spawn(run_udp(udp_socket, handler.clone(), shutdown.clone()));
    join_set.spawn(run_tcp(tcp_listener, handler, shutdown));

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>, shutdown: CancellationToken) {
    let mut buf = vec![0u8; MAX_UDP_SIZE];

    loop {
        let (len, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("UDP listener shutting down");
                break;
            }
            received = socket.recv_from(&mut buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            }
        };

        let Some(response) = respond(&handler, &buf[..len], from) else {
            continue;
        };
        if let Err(e) = socket.send_to(&response, from).await {
            debug!(error = %e, client = %from, "UDP send failed");
        }
    }
}

async fn run_tcp(listener: TcpListener, handler: Arc<DnsServerHandler>, shutdown: CancellationToken) {
    loop {
        let (stream, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("TCP listener shutting down");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "TCP accept error");
                    continue;
                }
            }
        };

        let handler = handler.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                _ = handle_tcp_connection(stream, from, handler) => {}
            }
        });
    }
}

/// Serves length-prefixed messages until the client goes quiet or closes.
async fn handle_tcp_connection(
    mut stream: TcpStream,
    from: SocketAddr,
    handler: Arc<DnsServerHandler>,
) {
    loop {
        let mut len_buf = [0u8; 2];
        match timeout(TCP_IDLE_TIMEOUT, stream.read_exact(&mut len_buf)).await {
            Ok(Ok(_)) => {}
            Ok(Err(_)) | Err(_) => break,
        }

        let mut msg_buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        match timeout(TCP_IDLE_TIMEOUT, stream.read_exact(&mut msg_buf)).await {
            Ok(Ok(_)) => {}
            Ok(Err(_)) | Err(_) => break,
        }

        let Some(response) = respond(&handler, &msg_buf, from) else {
            continue;
        };
        let Ok(len) = u16::try_from(response.len()) else {
            warn!(client = %from, bytes = response.len(), "TCP response too large");
            continue;
        };
        if stream.write_all(&len.to_be_bytes()).await.is_err()
            || stream.write_all(&response).await.is_err()
        {
            break;
        }
    }
}

/// `None` when the request can't be parsed or the response can't be encoded.
fn respond(handler: &DnsServerHandler, request: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
    let request = match Message::from_vec(request) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, client = %from, "Dropping malformed query");
            return None;
        }
    };

    match handler.build_response(&request).to_vec() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(error = %e, client = %from, "Failed to encode response");
            None
        }
    }
}
