//! Local network address discovery.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use crate::error::{Error, Result};

/// Address used to pick the outbound route when none is configured.
pub const DEFAULT_PROBE_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 80);

/// Local IP address of the default outbound route.
///
/// See [`local_ip_via`].
///
/// # Errors
///
/// Returns [`Error::Io`] if no route to [`DEFAULT_PROBE_ADDR`] exists.
pub fn local_ip() -> Result<IpAddr> {
    local_ip_via(DEFAULT_PROBE_ADDR)
}

/// Local IP address the OS would use to reach `probe`.
///
/// Connecting a UDP socket only selects a route, so no packet leaves the host.
///
/// # Errors
///
/// Returns [`Error::Io`] if the socket cannot be bound, or if the routing
/// table has no route to `probe`.
pub fn local_ip_via(probe: SocketAddr) -> Result<IpAddr> {
    let bind_addr = match probe {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    };

    let socket =
        UdpSocket::bind(bind_addr).map_err(|e| Error::io("binding UDP socket", e))?;
    socket
        .connect(probe)
        .map_err(|e| Error::io(format!("no route to {probe}"), e))?;

    let local = socket
        .local_addr()
        .map_err(|e| Error::io("reading local socket address", e))?;

    tracing::debug!(%probe, ip = %local.ip(), "resolved local address");
    Ok(local.ip())
}
