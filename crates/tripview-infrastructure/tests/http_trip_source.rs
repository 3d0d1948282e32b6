use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tripview_core::trip::{Trip, TripSource};
use tripview_infrastructure::HttpTripSource;

/// Serves one canned HTTP response on a local port and returns its URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> Option<String> {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(l) => l,
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
            eprintln!("skipping test: sandbox does not permit local TCP listeners");
            return None;
        }
        Err(err) => panic!("failed to bind: {err}"),
    };
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Some(format!("http://{addr}/mock-trip.json"))
}

fn source(url: impl Into<String>) -> HttpTripSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpTripSource::with_client(client, url)
}

#[tokio::test]
async fn test_fetch_success() {
    let Some(url) = serve_once(
        "200 OK",
        r#"{"trip_title":"Rome","days":[{"id":1,"title":"Day 1","activities":[]}]}"#,
    )
    .await
    else {
        return;
    };

    let trip_source = source(url.clone());
    assert_eq!(trip_source.location(), url);

    let body = trip_source.fetch().await.expect("fetch should succeed");
    let trip = Trip::from_json(&body).unwrap();
    assert_eq!(trip.trip_title, "Rome");
}

#[tokio::test]
async fn test_fetch_404_is_fetch_error() {
    let Some(url) = serve_once("404 Not Found", "not here").await else {
        return;
    };

    let err = source(url).fetch().await.unwrap_err();
    assert!(err.is_fetch());
    assert_eq!(err.to_string(), "Failed to fetch trip data: HTTP 404 Not Found");
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(l) => l,
        Err(_) => return,
    };
    let addr = listener.local_addr().unwrap();
    drop(listener); // port is now free but nothing is listening

    let err = source(format!("http://{addr}/mock-trip.json"))
        .fetch()
        .await
        .unwrap_err();
    assert!(err.is_fetch());
}
