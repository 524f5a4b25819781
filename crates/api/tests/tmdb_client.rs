use std::time::Duration;

use moviesearch_api::{SearchError, SearchProvider, TmdbClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one canned HTTP response and hand back the raw request.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buffer = vec![0u8; 8192];
        let read = socket.read(&mut buffer).await.expect("read request");
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&buffer[..read]).to_string()
    });
    (format!("http://{address}/3"), handle)
}

#[tokio::test]
async fn search_sends_lowercased_query_with_bearer_token() {
    let body = r#"{"results":[{"title":"Batman"},{"title":"The Batman Returns"},{"title":"Alien"},{"title":"Combat"}]}"#;
    let (base, server) = serve_once("HTTP/1.1 200 OK", body).await;
    let client = TmdbClient::new(&base, Some("secret-token"), Duration::from_secs(5)).expect("client");

    let titles = client.search("BAT").await.expect("search succeeds");
    assert_eq!(titles, vec!["Batman", "The Batman Returns", "Combat"]);

    let request = server.await.expect("server task");
    let request_lower = request.to_lowercase();
    assert!(request.starts_with("GET /3/search/movie?query=bat "), "request line: {request}");
    assert!(request_lower.contains("authorization: bearer secret-token"), "headers: {request}");
    assert!(request_lower.contains("accept: application/json"), "headers: {request}");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let (base, _server) = serve_once("HTTP/1.1 401 Unauthorized", r#"{"status_message":"nope"}"#).await;
    let client = TmdbClient::new(&base, Some("bad"), Duration::from_secs(5)).expect("client");

    let error = client.search("bat").await.unwrap_err();
    assert!(matches!(error, SearchError::Status(status) if status.as_u16() == 401));
    assert!(error.to_string().starts_with("Error in the API call!"));
}

#[tokio::test]
async fn hung_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");
    let _server = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(30)).await;
    });
    let client = TmdbClient::new(&format!("http://{address}"), Some("token"), Duration::from_millis(200)).expect("client");

    let error = client.search("bat").await.unwrap_err();
    assert!(matches!(error, SearchError::Http(_)), "unexpected error: {error:?}");
}
