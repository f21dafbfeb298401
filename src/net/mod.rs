//! Datagram transport: one fresh UDP socket per send, released on return.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::net::UdpSocket;

/// Encode `payload` as JSON and transmit it to `target` as exactly one
/// datagram. The socket is bound for this call only and dropped on every
/// exit path; encode and send failures propagate with context. Returns the
/// number of bytes handed to the transport.
///
/// Fire-and-forget: no response is read and delivery is not guaranteed.
/// Payloads larger than the transport's single-datagram limit fail at the
/// send call; no size limit is enforced here.
pub async fn send_json<T: Serialize>(target: SocketAddr, payload: &T) -> Result<usize> {
    let encoded = serde_json::to_vec(payload).context("failed to encode payload as JSON")?;

    let bind_addr = match target {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    };
    let socket = UdpSocket::bind(bind_addr)
        .await
        .context("failed to bind UDP socket")?;

    let sent = socket
        .send_to(&encoded, target)
        .await
        .with_context(|| format!("failed to send datagram to {target}"))?;

    Ok(sent)
}
