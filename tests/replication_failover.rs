//! Failover-oriented tests for the topology controller.
//!
//! The loopback tests stand up a local listener in place of the secondary
//! node's administrative port. The live test at the bottom needs a real
//! two-node deployment and is ignored by default.

use std::io::Read;
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

use kv_harness::HarnessBuilder;
use kv_harness::HarnessSettings;
use kv_harness::StubClient;
use kv_harness::TopologyController;

/// Accepts `expected` connections, reading each to EOF.
fn spawn_admin_sink(expected: usize) -> (u16, JoinHandle<Vec<(Instant, Vec<u8>)>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let port = listener.local_addr().expect("local addr").port();

    let handle = std::thread::spawn(move || {
        let mut received = Vec::with_capacity(expected);
        for _ in 0..expected {
            let (mut stream, _) = listener.accept().expect("accept");
            let at = Instant::now();
            let mut bytes = Vec::new();
            stream.read_to_end(&mut bytes).expect("read directive");
            received.push((at, bytes));
        }
        received
    });

    (port, handle)
}

#[tokio::test]
async fn full_demote_promote_cycle_over_loopback() {
    let (port, sink) = spawn_admin_sink(2);

    let settings = HarnessSettings {
        redis2_port: Some(port),
        ..Default::default()
    };
    let harness = HarnessBuilder::new()
        .settings(settings)
        .build(&StubClient::new())
        .await
        .unwrap();

    harness.topology().unwrap().reset_replica_link().await.unwrap();

    let received = sink.join().unwrap();
    assert_eq!(received[0].1, b"SLAVEOF NO ONE\r\n");
    assert_eq!(received[1].1, b"SLAVEOF 127.0.0.1 6379\r\n");
    assert!(received[1].0 - received[0].0 >= Duration::from_millis(500));
}

#[test]
fn single_directives_carry_exact_wire_bytes() {
    let (port, sink) = spawn_admin_sink(2);
    let controller = TopologyController::new(
        ("127.0.0.1".to_string(), port),
        ("127.0.0.1".to_string(), 6379),
    );

    controller.demote().unwrap();
    controller.promote().unwrap();

    let received = sink.join().unwrap();
    assert_eq!(received[0].1, b"SLAVEOF NO ONE\r\n");
    assert_eq!(received[1].1, b"SLAVEOF 127.0.0.1 6379\r\n");
}

/// Needs a live two-node deployment, e.g.
/// `REDIS_HOST=127.0.0.1 REDIS1_PORT=6379 REDIS2_PORT=6380`.
#[tokio::test]
#[ignore]
async fn live_cluster_reset_replica_link() {
    let settings = HarnessSettings::from_env().unwrap();
    let controller = TopologyController::from_settings(&settings).unwrap();

    controller.reset_replica_link().await.unwrap();
}
