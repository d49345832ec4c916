use nearmap::prelude::*;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Exercises the HTTP client against a local one-route server
#[cfg(test)]
mod opentripmap_client_tests {
    use super::*;

    /// Serves `(status, body)` for every request and records request lines.
    async fn serve(status: u16, body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = seen.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => read += n,
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                if let Some(line) = request.lines().next() {
                    recorded.lock().unwrap().push(line.to_string());
                }
                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{addr}/0.1"), seen)
    }

    fn client(base_url: String) -> OpenTripMapClient {
        let config = PlacesConfig {
            api_key: "test-key".to_string(),
            base_url,
            ..PlacesConfig::default()
        };
        // A client per test: each #[tokio::test] runs its own runtime
        OpenTripMapClient::with_http(reqwest::Client::new(), &config)
    }

    #[tokio::test]
    async fn test_radius_query_and_parsing() {
        let (base, seen) = serve(
            200,
            r#"[{"xid":"N1","name":"Fountain","dist":12.5,"rate":3,"kinds":"fountains","point":{"lon":12.48,"lat":41.9}}]"#,
        )
        .await;

        let places = client(base)
            .search_nearby(LatLng::new(41.9, 12.48), 1000, 5)
            .await
            .unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].xid, PlaceId::new("N1"));
        assert_eq!(places[0].coordinate(), LatLng::new(41.9, 12.48));

        let line = seen.lock().unwrap()[0].clone();
        assert!(line.starts_with("GET /0.1/en/places/radius?apikey=test-key&radius=1000&limit=5&offset=0&lon=12.48&lat=41.9&rate=3&format=json "));
    }

    #[tokio::test]
    async fn test_detail_request_path() {
        let (base, seen) = serve(
            200,
            r#"{"xid":"W9","name":"Hall","preview":{"source":"https://img.example/w9.jpg"},"wikipedia_extracts":{"text":"A hall."}}"#,
        )
        .await;

        let detail = client(base).fetch_detail(&PlaceId::new("W9")).await.unwrap();
        assert_eq!(detail.preview.unwrap().source, "https://img.example/w9.jpg");
        assert!(seen.lock().unwrap()[0].starts_with("GET /0.1/en/places/xid/W9?apikey=test-key "));
    }

    #[tokio::test]
    async fn test_geocode_match() {
        let (base, _) = serve(
            200,
            r#"{"name":"Rome","country":"IT","lat":41.89193,"lon":12.51133,"population":2318895,"timezone":"Europe/Rome","status":"OK"}"#,
        )
        .await;

        let center = client(base).geocode("Rome").await.unwrap();
        assert_eq!(center, LatLng::new(41.89193, 12.51133));
    }

    #[tokio::test]
    async fn test_geocode_miss_is_not_found() {
        let (base, _) = serve(404, r#"{"error":"Name not found"}"#).await;

        let err = client(base).geocode("Atlantis").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(name) if name == "Atlantis"));
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let (base, _) = serve(403, r#"{"error":"Invalid API key"}"#).await;

        let err = client(base)
            .search_nearby(LatLng::new(0.0, 0.0), 1000, 5)
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/0.1"))
            .fetch_detail(&PlaceId::new("W1"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
