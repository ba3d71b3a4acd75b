//! Shared helpers for unit and integration tests.

use std::io::Read;
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Instant;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    env_logger::init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for unit test.");
}

/// One directive captured by a [`DirectiveSink`].
pub struct ReceivedDirective {
    pub bytes: Vec<u8>,
    pub received_at: Instant,
}

/// Loopback TCP listener standing in for a node's administrative port.
///
/// Accepts a fixed number of connections, reads each to EOF (the controller
/// closes its socket after one directive) and records the arrival instant.
pub struct DirectiveSink {
    port: u16,
    handle: JoinHandle<Vec<ReceivedDirective>>,
}

impl DirectiveSink {
    pub fn start(expected_connections: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let port = listener.local_addr().expect("local addr").port();

        let handle = std::thread::spawn(move || {
            let mut received = Vec::with_capacity(expected_connections);
            for _ in 0..expected_connections {
                let (mut stream, _) = listener.accept().expect("accept directive connection");
                let received_at = Instant::now();
                let mut bytes = Vec::new();
                stream.read_to_end(&mut bytes).expect("read directive");
                received.push(ReceivedDirective { bytes, received_at });
            }
            received
        });

        Self { port, handle }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Waits for all expected connections and returns what was captured.
    pub fn finish(self) -> Vec<ReceivedDirective> {
        self.handle.join().expect("directive sink thread")
    }
}
