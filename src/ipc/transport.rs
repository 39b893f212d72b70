//! Byte transport to the Hyprland command socket.
//!
//! Every request opens its own connection, writes the whole payload and
//! reads until Hyprland closes its end.  Nothing is kept between calls, so a
//! [`UnixSocketTransport`] is only a path.

use super::IpcError;
use log::debug;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// Something that can deliver one request and return the full reply.
///
/// Implementations must complete the round trip before returning: callers
/// rely on the compositor having processed a request before the next one is
/// sent.
pub trait Transport {
    /// Send `request` and return every byte the peer wrote back.
    fn send(&self, request: &[u8]) -> Result<Vec<u8>, IpcError>;
}

/// Transport over `$XDG_RUNTIME_DIR/hypr/<instance>/.socket.sock`.
///
/// This is not a persistent connection: each [`send`](Transport::send)
/// pays for a connect, a write and a read-to-EOF.
#[derive(Debug, Clone)]
pub struct UnixSocketTransport {
    path: PathBuf,
}

impl UnixSocketTransport {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for UnixSocketTransport {
    fn send(&self, request: &[u8]) -> Result<Vec<u8>, IpcError> {
        let mut stream = UnixStream::connect(&self.path).map_err(|source| IpcError::Connect {
            path: self.path.clone(),
            source,
        })?;

        stream.write_all(request)?;

        // Hyprland closes the stream after answering; read_to_end loops
        // until the zero-length read.
        let mut reply = Vec::new();
        stream.read_to_end(&mut reply)?;
        debug!(
            "{} -> {} bytes",
            String::from_utf8_lossy(request),
            reply.len()
        );
        Ok(reply)
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread::JoinHandle;

    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "hyprhelper-test-{}-{}.sock",
            std::process::id(),
            id
        ))
    }

    /// Accept `n` connections, answer each with `reply` written in small
    /// chunks, and hand back what was received.
    fn serve(listener: UnixListener, n: usize, reply: &'static str) -> JoinHandle<Vec<String>> {
        std::thread::spawn(move || {
            let mut received = Vec::new();
            for _ in 0..n {
                let (mut stream, _) = listener.accept().expect("accept");
                let mut buf = [0u8; 4096];
                let len = stream.read(&mut buf).expect("read");
                received.push(String::from_utf8_lossy(&buf[..len]).into_owned());
                for chunk in reply.as_bytes().chunks(3) {
                    stream.write_all(chunk).expect("write");
                }
            }
            received
        })
    }

    #[test]
    fn reads_reply_until_peer_closes() {
        let path = tmp_socket_path();
        let listener = UnixListener::bind(&path).expect("bind");
        let server = serve(listener, 1, r#"{"id":3,"name":"3"}"#);

        let transport = UnixSocketTransport::new(&path);
        let reply = transport.send(b"j/activeworkspace").unwrap();

        assert_eq!(reply, br#"{"id":3,"name":"3"}"#.to_vec());
        assert_eq!(server.join().unwrap(), vec!["j/activeworkspace".to_string()]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reconnects_for_every_request() {
        let path = tmp_socket_path();
        let listener = UnixListener::bind(&path).expect("bind");
        let server = serve(listener, 2, "ok");

        let transport = UnixSocketTransport::new(&path);
        assert_eq!(transport.send(b"dispatch focusmonitor +1").unwrap(), b"ok");
        assert_eq!(transport.send(b"keyword general:gaps_in 0").unwrap(), b"ok");

        let received = server.join().unwrap();
        assert_eq!(received, vec!["dispatch focusmonitor +1", "keyword general:gaps_in 0"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_socket_is_a_connect_error() {
        let path = tmp_socket_path();
        let transport = UnixSocketTransport::new(&path);
        match transport.send(b"j/monitors") {
            Err(IpcError::Connect { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected connect error, got {:?}", other),
        }
    }
}
