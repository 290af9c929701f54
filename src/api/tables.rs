//! Generator Table Endpoints

use super::{CreationService, HttpApi, ListingService};
use crate::error::{FetchError, SubmissionError};
use crate::models::{GeneratorItem, NewGenerator};

pub const TABLES_PATH: &str = "tables";

impl ListingService for HttpApi {
    async fn list_generators(&self) -> Result<Vec<GeneratorItem>, FetchError> {
        let items: Vec<GeneratorItem> = self
            .get(TABLES_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        log::debug!("GET {} returned {} items", TABLES_PATH, items.len());
        Ok(items)
    }
}

impl CreationService for HttpApi {
    async fn create_generator(&self, new: &NewGenerator) -> Result<GeneratorItem, SubmissionError> {
        if new.is_blank() {
            return Err(SubmissionError::EmptyName);
        }
        let item: GeneratorItem = self
            .post(TABLES_PATH)
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        log::debug!("POST {} created item {}", TABLES_PATH, item.item_id);
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use futures::executor::block_on;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Serves a single HTTP response and hands back the raw request it got
    fn serve_once(status: &'static str, body: &'static str) -> (HttpApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        let api = HttpApi::new(ApiConfig::default().with_base_url(format!("http://{addr}")));
        (api, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(end) = text.find("\r\n\r\n") {
                if buf.len() >= end + 4 + content_length(&text[..end]) {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Base address with nothing listening on it
    fn closed_port_api() -> HttpApi {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        HttpApi::new(ApiConfig::default().with_base_url(format!("http://{addr}")))
    }

    #[tokio::test]
    async fn test_list_sends_get_tables() {
        let (api, server) = serve_once("200 OK", r#"[{"item_id":"a"},{"item_id":2}]"#);

        let items = api.list_generators().await.unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /tables HTTP/1.1\r\n"), "{request}");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id.to_string(), "a");
        assert_eq!(items[1].item_id.to_string(), "2");
    }

    #[tokio::test]
    async fn test_list_non_2xx_is_status() {
        let (api, server) = serve_once("500 Internal Server Error", "{}");

        let result = api.list_generators().await;
        server.join().unwrap();

        assert_eq!(result, Err(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_decode() {
        let (api, server) = serve_once("200 OK", "{nope");

        let result = api.list_generators().await;
        server.join().unwrap();

        assert!(matches!(result, Err(FetchError::Decode(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_list_unreachable_is_transport() {
        let result = closed_port_api().list_generators().await;
        assert!(matches!(result, Err(FetchError::Transport(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_create_posts_name() {
        let (api, server) = serve_once("201 Created", r#"{"item_id":5,"name":"Loot"}"#);

        let item = api.create_generator(&NewGenerator::new(" Loot ")).await.unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("POST /tables HTTP/1.1\r\n"), "{request}");
        assert!(request.ends_with(r#"{"name":"Loot"}"#), "{request}");
        assert_eq!(item.item_id.to_string(), "5");
        assert_eq!(item.title(), Some("Loot"));
    }

    #[tokio::test]
    async fn test_create_non_2xx_is_status() {
        let (api, server) = serve_once("422 Unprocessable Entity", "{}");

        let result = api.create_generator(&NewGenerator::new("Loot")).await;
        server.join().unwrap();

        assert_eq!(result, Err(SubmissionError::Status(422)));
    }

    #[tokio::test]
    async fn test_create_malformed_body_is_decode() {
        let (api, server) = serve_once("200 OK", "{nope");

        let result = api.create_generator(&NewGenerator::new("Loot")).await;
        server.join().unwrap();

        assert!(matches!(result, Err(SubmissionError::Decode(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_create_unreachable_is_transport() {
        let result = closed_port_api().create_generator(&NewGenerator::new("Loot")).await;
        assert!(matches!(result, Err(SubmissionError::Transport(_))), "{result:?}");
    }

    #[test]
    fn test_blank_name_rejected_before_any_request() {
        let result = block_on(closed_port_api().create_generator(&NewGenerator::new("   ")));
        assert_eq!(result, Err(SubmissionError::EmptyName));
    }

    #[test]
    fn test_tables_endpoint() {
        let api = HttpApi::new(ApiConfig::default());
        assert_eq!(api.config().endpoint(TABLES_PATH), "http://localhost:5000/tables");
    }
}
