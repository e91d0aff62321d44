/// HTTP movie source backed by reqwest
use reqwest::Client;

use super::MovieSource;
use crate::error::SourceError;
use crate::state::data::Movie;

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl MovieSource for HttpSource {
    /// GET the movie list.
    ///
    /// Network errors, non-2xx statuses and bodies that are not a JSON
    /// array of movie records all come back as `SourceError`.
    async fn fetch(&self) -> Result<Vec<Movie>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_movies(&body)
    }
}

/// Decode a response body into movie records
pub fn parse_movies(body: &str) -> Result<Vec<Movie>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Body(e.to_string()))
}

/// Download a poster image. Failures only mean the card shows a placeholder.
pub async fn fetch_poster(client: Client, url: String) -> Result<Vec<u8>, SourceError> {
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;
    use crate::state::catalog::CatalogState;
    use crate::state::data::CatalogOrigin;
    use crate::state::store::MemoryStore;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(status_line: &str, body: &str) -> String {
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api/movies")
    }

    fn assert_fallback_installed(result: Result<Vec<Movie>, SourceError>) {
        let mut state = CatalogState::new(MemoryStore::new(), Vec::<Notification>::new());
        assert_eq!(state.finish_load(result), CatalogOrigin::Fallback);
        assert_eq!(state.total_movies(), 20);
        assert_eq!(state.notifier()[0].title, "Demo Mode");
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "").await;
        let result = HttpSource::new(url).fetch().await;

        assert!(matches!(result, Err(SourceError::Status(500))));
        assert_fallback_installed(result);
    }

    #[tokio::test]
    async fn test_non_list_body_is_body_error() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"error":"rate limited"}"#).await;
        let result = HttpSource::new(url).fetch().await;

        assert!(matches!(result, Err(SourceError::Body(_))));
        assert_fallback_installed(result);
    }

    #[tokio::test]
    async fn test_movie_list_over_http() {
        let body = r#"[{"id":4,"movie":"Heat","rating":8.3,"image":"h.jpg","imdb_url":"https://imdb/4"}]"#;
        let url = serve_once("HTTP/1.1 200 OK", body).await;
        let movies = HttpSource::new(url).fetch().await.unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Heat");
    }

    #[test]
    fn test_parse_movies() {
        let body = r#"[
            {"id":1,"movie":"Alien","rating":8.5,"image":"a.jpg","imdb_url":"https://imdb/1"},
            {"id":2,"movie":"Aliens","rating":8.4,"image":"b.jpg","imdb_url":"https://imdb/2"}
        ]"#;
        let movies = parse_movies(body).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].title, "Aliens");
    }

    #[test]
    fn test_parse_rejects_non_list() {
        let err = parse_movies(r#"{"error":"rate limited"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Body(_)));

        let err = parse_movies("<html>").unwrap_err();
        assert!(matches!(err, SourceError::Body(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Nothing listens on the discard port
        let source = HttpSource::new("http://127.0.0.1:9/movies");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Request(_)));
    }
}
