use std::collections::HashMap;
use std::time::Duration;

use jsend::net::send_json;
use jsend::payload::Submission;
use tokio::net::UdpSocket;
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(200);

/// Bind a throwaway receiver on the loopback interface.
async fn loopback_receiver() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

async fn recv_one(socket: &UdpSocket) -> Vec<u8> {
    let mut buf = vec![0u8; 64 * 1024];
    let (len, _) = timeout(RECV_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("timed out waiting for datagram")
        .unwrap();
    buf.truncate(len);
    buf
}

/// Assert that no further datagram arrives within a short window.
async fn assert_silent(socket: &UdpSocket) {
    let mut buf = [0u8; 1024];
    let outcome = timeout(SILENCE_WINDOW, socket.recv_from(&mut buf)).await;
    assert!(outcome.is_err(), "unexpected extra datagram received");
}

#[tokio::test]
async fn send_produces_exactly_one_datagram_with_the_record() {
    let receiver = loopback_receiver().await;
    let target = receiver.local_addr().unwrap();

    let record = Submission::sample();
    let sent = send_json(target, &record).await.unwrap();

    let payload = recv_one(&receiver).await;
    assert_eq!(sent, payload.len());
    assert_eq!(payload, serde_json::to_vec(&record).unwrap());

    let decoded: Submission = serde_json::from_slice(&payload).unwrap();
    assert_eq!(decoded, record);

    assert_silent(&receiver).await;
}

#[tokio::test]
async fn sequential_sends_each_arrive_on_a_fresh_socket() {
    let receiver = loopback_receiver().await;
    let target = receiver.local_addr().unwrap();

    let first = Submission::new("first", "a", "0-1", "Pass");
    let second = Submission::new("second", "b", "0-2", "Fail");
    send_json(target, &first).await.unwrap();
    send_json(target, &second).await.unwrap();

    let payloads = [recv_one(&receiver).await, recv_one(&receiver).await];
    assert_eq!(payloads[0], serde_json::to_vec(&first).unwrap());
    assert_eq!(payloads[1], serde_json::to_vec(&second).unwrap());
}

#[tokio::test]
async fn encode_failure_propagates_and_sends_nothing() {
    let receiver = loopback_receiver().await;
    let target = receiver.local_addr().unwrap();

    // serde_json refuses maps with non-string keys, so this payload cannot
    // be encoded and the send must fail before any datagram goes out.
    let unencodable: HashMap<(u8, u8), String> =
        HashMap::from([((1, 2), "value".to_string())]);
    let err = send_json(target, &unencodable).await.unwrap_err();
    assert!(err.to_string().contains("encode"));

    assert_silent(&receiver).await;
}

#[tokio::test]
async fn form_shaped_submission_round_trips_over_the_wire() {
    let receiver = loopback_receiver().await;
    let target = receiver.local_addr().unwrap();

    let record = Submission::new("Test", "payload", "0-100", "Fail");
    send_json(target, &record).await.unwrap();

    let payload = recv_one(&receiver).await;
    assert_eq!(
        String::from_utf8(payload).unwrap(),
        r#"{"cmd_name":"Test","data":"payload","range":"0-100","status":"Fail"}"#
    );
}
