use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::LoadError;

/// Somewhere raw question JSON can be fetched from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw payload.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the payload cannot be retrieved.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, for logs and error screens.
    fn describe(&self) -> String;
}

/// Reads questions from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches questions over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// In-memory payload, for tests and embedded question sets.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".into()
    }
}

/// Pick a source for a user-supplied location.
///
/// `http://` and `https://` URLs are fetched over the network; any other
/// URL scheme is rejected; everything else is treated as a file path.
///
/// # Errors
///
/// Returns `LoadError::InvalidLocation` for empty input or unsupported schemes.
pub fn source_for_location(location: &str) -> Result<Arc<dyn QuestionSource>, LoadError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(LoadError::InvalidLocation(location.to_string()));
    }

    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Arc::new(HttpSource::new(url))),
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| LoadError::InvalidLocation(location.to_string()))?;
            Ok(Arc::new(FileSource::new(path)))
        }
        // Single-letter schemes are Windows drive letters, not URLs.
        Ok(url) if url.scheme().len() > 1 => {
            Err(LoadError::InvalidLocation(location.to_string()))
        }
        _ => Ok(Arc::new(FileSource::new(location))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::QuestionLoader;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const ONE_QUESTION: &str = r#"[{
        "id": 1,
        "question": "Which keyword narrows a union by property?",
        "options": ["in", "of"],
        "correctAnswer": "in",
        "difficulty": "medium"
    }]"#;

    /// Answer a single HTTP request on a loopback port with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        Url::parse(&format!("http://{addr}/questions.json")).unwrap()
    }

    fn loopback_source(url: Url) -> HttpSource {
        HttpSource {
            client: Client::builder().no_proxy().build().unwrap(),
            url,
        }
    }

    #[test]
    fn http_locations_use_http_source() {
        let source = source_for_location("https://example.com/questions.json").unwrap();
        assert_eq!(source.describe(), "https://example.com/questions.json");
    }

    #[test]
    fn plain_paths_use_file_source() {
        let source = source_for_location("data/questions.json").unwrap();
        assert_eq!(source.describe(), "data/questions.json");
    }

    #[test]
    fn unsupported_schemes_are_rejected() {
        let Err(err) = source_for_location("ftp://example.com/q.json") else {
            panic!("ftp locations should be rejected");
        };
        assert!(matches!(err, LoadError::InvalidLocation(_)));
    }

    #[test]
    fn empty_location_is_rejected() {
        let Err(err) = source_for_location("   ") else {
            panic!("blank locations should be rejected");
        };
        assert!(matches!(err, LoadError::InvalidLocation(_)));
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let source = FileSource::new("definitely/not/here.json");
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }

    #[tokio::test]
    async fn static_source_returns_body() {
        let source = StaticSource::new("[]");
        assert_eq!(source.fetch().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let source = loopback_source(serve_once("404 Not Found", "missing").await);

        let err = source.fetch().await.unwrap_err();
        assert!(
            matches!(err, LoadError::HttpStatus(status) if status == reqwest::StatusCode::NOT_FOUND)
        );
        assert_eq!(err.to_string(), "failed to fetch questions: 404 Not Found");
    }

    #[tokio::test]
    async fn http_payload_loads_through_loader() {
        let source = loopback_source(serve_once("200 OK", ONE_QUESTION).await);
        let loader = QuestionLoader::new(Arc::new(source));

        let questions = loader.load().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer(), "in");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/questions.json")).unwrap();
        let err = loopback_source(url).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Http(_)));
    }
}
