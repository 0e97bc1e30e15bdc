use std::time::Duration;

use log::debug;
use tokio::net::TcpStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Reachable,
    Unreachable,
}

impl ProbeStatus {
    pub fn is_reachable(self) -> bool {
        self == ProbeStatus::Reachable
    }
}

/// Attempts a single TCP connect to `host:port`, giving up after `timeout`.
///
/// A completed handshake is all that counts: the stream is dropped right away
/// and nothing is written. Refusals, resolution failures and timeouts all come
/// back as [`ProbeStatus::Unreachable`]; the reason only reaches the debug log.
pub async fn check_port(host: &str, port: u16, timeout: Duration) -> ProbeStatus {
    match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            debug!("{}:{} accepted connection", host, port);
            ProbeStatus::Reachable
        }
        Ok(Err(err)) => {
            debug!("{}:{} connect failed: {}", host, port, err);
            ProbeStatus::Unreachable
        }
        Err(_) => {
            debug!("{}:{} timed out after {:?}", host, port, timeout);
            ProbeStatus::Unreachable
        }
    }
}

/// A loopback port whose accept queue is already full, so new SYNs are
/// dropped and a connect never completes. Keep it alive for the test's length.
#[cfg(test)]
pub(crate) struct StalledEndpoint {
    _listener: tokio::net::TcpListener,
    _held: Vec<TcpStream>,
    pub port: u16,
}

#[cfg(test)]
impl StalledEndpoint {
    pub(crate) async fn bind() -> std::io::Result<Self> {
        let socket = tokio::net::TcpSocket::new_v4()?;
        socket.bind(std::net::SocketAddr::from(([127, 0, 0, 1], 0)))?;
        let listener = socket.listen(1)?;
        let addr = listener.local_addr()?;

        // never accepted, so each completed handshake stays queued
        let mut held = Vec::new();
        while held.len() < 32 {
            match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(addr)).await
            {
                Ok(stream) => held.push(stream?),
                Err(_) => {
                    return Ok(StalledEndpoint {
                        _listener: listener,
                        _held: held,
                        port: addr.port(),
                    })
                }
            }
        }

        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "accept queue never filled",
        ))
    }
}
