//! Serves the demonstration dispatcher over a loopback socket.

use std::net::SocketAddr;
use std::sync::Arc;

use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use restived::demo::demo_dispatcher;
use restived::{bind, serve};

async fn exchange(addr: SocketAddr, request_line: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect to server");
    let request = format!("{request_line}\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}

#[rstest]
#[case::found("GET /ox/0 HTTP/1.1", "HTTP/1.1 200 OK", r#"{"Id":0,"IsLarge":true}"#)]
#[case::missing("GET /ox/5 HTTP/1.1", "HTTP/1.1 404 Not Found", "Not found\n")]
#[case::malformed(
    "GET /ox/five HTTP/1.1",
    "HTTP/1.1 400 Bad Request",
    "BadRequest - resource ids must be non-negative integers\n"
)]
#[case::unsupported("DELETE /ox/0 HTTP/1.1", "HTTP/1.1 501 Not Implemented", "Not implemented\n")]
#[tokio::test]
async fn answers_over_http(
    #[case] request_line: &str,
    #[case] status_line: &str,
    #[case] body: &str,
) {
    let loopback: SocketAddr = "127.0.0.1:0".parse().expect("literal address");
    let listener = bind(loopback).await.expect("bind loopback");
    let addr = listener.local_addr().expect("bound address");
    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(
        listener,
        Arc::new(demo_dispatcher(false)),
        async move {
            stopped.await.ok();
        },
    ));

    let response = exchange(addr, request_line).await;

    assert!(
        response.starts_with(status_line),
        "unexpected response: {response}"
    );
    assert!(response.ends_with(body), "unexpected response: {response}");

    stop.send(()).expect("server still running");
    server.await.expect("server shuts down cleanly");
}

#[tokio::test]
async fn bind_reports_address_in_use() {
    let loopback: SocketAddr = "127.0.0.1:0".parse().expect("literal address");
    let first = bind(loopback).await.expect("bind loopback");
    let taken = first.local_addr().expect("bound address");

    let error = bind(taken).await.expect_err("address already bound");
    assert_eq!(error.to_string(), format!("failed to bind {taken}"));
}
