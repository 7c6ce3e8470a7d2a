//! End-to-end tests of the authorized request pipeline against a loopback
//! HTTP server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use mdd_application::{ApplicationError, HttpClientError};
use mdd_domain::LoginRequest;
use mdd_infrastructure::{ClientConfig, FileStorage, MddClient, MemoryStorage};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

/// Canned answer for one connection.
struct Reply {
    status: u16,
    body: &'static str,
}

const fn reply(status: u16, body: &'static str) -> Reply {
    Reply { status, body }
}

/// Serves `replies` on successive connections and returns the raw requests.
async fn serve(replies: Vec<Reply>) -> (Url, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("address");
    let base_url = Url::parse(&format!("http://{address}")).expect("url");

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().await.expect("accept");
            requests.push(read_request(&mut stream).await);

            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            stream.write_all(response.as_bytes()).await.expect("write");
            stream.shutdown().await.expect("shutdown");
        }
        requests
    });

    (base_url, handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = stream.read(&mut chunk).await.expect("read");
        buffer.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buffer).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buffer.len() >= end + 4 + length || read == 0 {
                return text;
            }
        } else if read == 0 {
            return text;
        }
    }
}

fn config(base_url: Url) -> ClientConfig {
    ClientConfig {
        base_url,
        timeout_ms: 5_000,
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn test_login_authorizes_following_requests() {
    let (base_url, server) = serve(vec![
        reply(200, r#"{"token":"abc","id":1,"username":"ada"}"#),
        reply(200, r#"{"articles":[]}"#),
    ])
    .await;
    let client =
        MddClient::with_storage(&config(base_url), Arc::new(MemoryStorage::new())).expect("client");

    let session = client
        .log_in()
        .execute(LoginRequest::new("ada@mdd.fr", "Secret1!"))
        .await
        .expect("login");
    let articles = client.articles().list().await.expect("articles");

    assert_eq!(session.username, "ada");
    assert!(articles.is_empty());

    let requests = server.await.expect("server");
    assert!(requests[0].starts_with("POST /api/auth/login HTTP/1.1"));
    assert!(requests[0].contains(r#""emailOrUsername":"ada@mdd.fr""#));
    assert!(!requests[0].to_lowercase().contains("authorization:"));
    assert!(requests[1].starts_with("GET /api/articles HTTP/1.1"));
    assert!(requests[1].to_lowercase().contains("authorization: bearer abc"));
}

#[tokio::test]
async fn test_rejected_login_keeps_client_logged_out() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("local_storage.json");
    let (base_url, server) = serve(vec![reply(401, "")]).await;
    let storage = FileStorage::open(&path).expect("storage");
    let client = MddClient::with_storage(&config(base_url), Arc::new(storage)).expect("client");

    let result = client
        .log_in()
        .execute(LoginRequest::new("ada@mdd.fr", "Secret1!"))
        .await;

    assert!(result.expect_err("401").is_unauthorized());
    assert!(!client.session().is_logged());
    assert!(!path.exists());
    server.await.expect("server");
}

#[tokio::test]
async fn test_logout_stops_sending_the_token() {
    let (base_url, server) = serve(vec![reply(200, r#"{"themes":[]}"#)]).await;
    let storage = MemoryStorage::with_items([(
        mdd_application::SESSION_KEY,
        r#"{"token":"old","id":3}"#,
    )]);
    let client = MddClient::with_storage(&config(base_url), Arc::new(storage)).expect("client");

    client.log_out().execute();
    client.themes().list().await.expect("themes");

    let requests = server.await.expect("server");
    assert!(!requests[0].to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("address");
    drop(listener);

    let base_url = Url::parse(&format!("http://{address}")).expect("url");
    let client =
        MddClient::with_storage(&config(base_url), Arc::new(MemoryStorage::new())).expect("client");

    let result = client.themes().list().await;

    assert!(matches!(
        result,
        Err(ApplicationError::Http(
            HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_)
        ))
    ));
}
