use std::time::Duration;

use super::*;
use crate::test_utils::enable_logger;
use crate::test_utils::DirectiveSink;
use crate::Error;

fn controller_for(replica_port: u16) -> TopologyController {
    TopologyController::new(
        ("127.0.0.1".to_string(), replica_port),
        ("127.0.0.1".to_string(), 6379),
    )
}

#[test]
fn directive_rendering_matches_wire_format() {
    assert_eq!(ReplicaDirective::Unattach.to_string(), "SLAVEOF NO ONE");
    assert_eq!(
        ReplicaDirective::AttachTo {
            host: "127.0.0.1".to_string(),
            port: 6379,
        }
        .to_string(),
        "SLAVEOF 127.0.0.1 6379"
    );
}

#[test]
fn demote_sends_literal_unattach_line() {
    enable_logger();
    let sink = DirectiveSink::start(1);

    controller_for(sink.port()).demote().unwrap();

    let received = sink.finish();
    assert_eq!(received[0].bytes, b"SLAVEOF NO ONE\r\n");
}

#[test]
fn promote_sends_literal_attach_line() {
    let sink = DirectiveSink::start(1);

    controller_for(sink.port()).promote().unwrap();

    let received = sink.finish();
    assert_eq!(received[0].bytes, b"SLAVEOF 127.0.0.1 6379\r\n");
}

#[tokio::test]
async fn reset_replica_link_orders_directives_with_settling_gap() {
    let sink = DirectiveSink::start(2);

    controller_for(sink.port())
        .reset_replica_link()
        .await
        .unwrap();

    let received = sink.finish();
    assert_eq!(received[0].bytes, b"SLAVEOF NO ONE\r\n");
    assert_eq!(received[1].bytes, b"SLAVEOF 127.0.0.1 6379\r\n");

    let gap = received[1].received_at - received[0].received_at;
    assert!(
        gap >= Duration::from_millis(500),
        "settling gap too short: {gap:?}"
    );
}

#[tokio::test]
async fn settle_interval_is_configurable() {
    let sink = DirectiveSink::start(2);
    let started = std::time::Instant::now();

    controller_for(sink.port())
        .settle_interval(Duration::from_millis(10))
        .reset_replica_link()
        .await
        .unwrap();

    sink.finish();
    assert!(started.elapsed() < Duration::from_millis(500));
}

#[test]
fn unreachable_replica_propagates_transport_error() {
    // Port 1 on loopback is a safe "nothing listening" target.
    let controller = controller_for(1);

    let e = controller.demote().unwrap_err();
    assert!(matches!(e, Error::Transport(_)));
}

#[test]
fn from_settings_requires_secondary_port() {
    let settings = crate::HarnessSettings::default();

    assert!(matches!(
        TopologyController::from_settings(&settings),
        Err(Error::InvalidConfig(_))
    ));
}
