//! Blocking SPARQL 1.1 protocol client.
//!
//! Every `select` builds its own HTTP client, sends a single POST and drops the client before
//! returning, whichever way the call ends. Nothing is pooled between queries.
//!
//! The client is blocking: call it from a plain thread or from `tokio::task::spawn_blocking`, never
//! directly on an async executor.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::error::{SparqlError, SparqlResult};
use crate::results::parse_select_results;
use crate::store::{SolutionCursor, TripleStore};

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Clone)]
pub struct SparqlHttpStore {
    endpoint: Url,
    timeout: Duration,
}

impl SparqlHttpStore {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> SparqlResult<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(SparqlError::Client)
    }
}

impl TripleStore for SparqlHttpStore {
    fn select(&self, query: &str) -> SparqlResult<SolutionCursor<'_>> {
        let client = self.client()?;

        let response = client
            .post(self.endpoint.clone())
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", query)])
            .send()
            .map_err(SparqlError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(
                "SPARQL endpoint {} answered HTTP {}",
                self.endpoint,
                status.as_u16()
            );
            return Err(SparqlError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(SparqlError::Transport)?;
        let results = parse_select_results(&body)?;
        tracing::debug!("SPARQL endpoint returned {} row(s)", results.len());

        Ok(Box::new(results.into_solutions()))
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Solution;
    use crate::term::RdfTerm;
    use pretty_assertions::assert_eq;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves exactly one HTTP exchange on a loopback port and hands back the raw request.
    fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_ascii_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: {SPARQL_RESULTS_JSON}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            String::from_utf8(request).expect("utf-8 request")
        });

        let url = Url::parse(&format!("http://{addr}/repositories/dme")).expect("valid url");
        (url, handle)
    }

    fn split_request(raw: &str) -> (String, String) {
        let (head, body) = raw.split_once("\r\n\r\n").expect("header terminator");
        (head.to_ascii_lowercase(), body.to_string())
    }

    #[test]
    fn test_endpoint_reports_configured_url() {
        let url = Url::parse("http://graphdb:7200/repositories/dme").expect("valid url");
        let store = SparqlHttpStore::new(url, Duration::from_secs(5));
        assert_eq!(store.endpoint(), "http://graphdb:7200/repositories/dme");
        assert_eq!(store.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_unreachable_endpoint_is_a_transport_error() {
        // Nothing listens on the discard port.
        let url = Url::parse("http://127.0.0.1:9/repositories/dme").expect("valid url");
        let store = SparqlHttpStore::new(url, Duration::from_secs(2));
        let err = match store.select("SELECT * WHERE { ?s ?p ?o }") {
            Ok(_) => panic!("nothing listens on port 9"),
            Err(e) => e,
        };
        assert!(matches!(err, SparqlError::Transport(_)));
    }

    #[test]
    fn test_select_posts_form_encoded_query_and_parses_rows() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{
                "head": { "vars": ["productName", "price"] },
                "results": { "bindings": [
                    { "productName": { "type": "literal", "value": "Cane" },
                      "price": { "type": "literal", "value": "19.50",
                                 "datatype": "http://www.w3.org/2001/XMLSchema#decimal" } },
                    {}
                ] }
            }"#,
        );
        let store = SparqlHttpStore::new(url, Duration::from_secs(5));

        let rows: Vec<Solution> = store
            .select(r#"SELECT * WHERE { ?s ?p "a&b" }"#)
            .expect("select succeeds")
            .collect::<SparqlResult<_>>()
            .expect("rows convert");

        let (head, body) = split_request(&server.join().expect("server thread"));
        assert!(head.starts_with("post /repositories/dme http/1.1\r\n"), "{head}");
        assert!(head.contains("\r\naccept: application/sparql-results+json"), "{head}");
        assert!(
            head.contains("\r\ncontent-type: application/x-www-form-urlencoded"),
            "{head}"
        );
        assert_eq!(body, "query=SELECT+*+WHERE+%7B+%3Fs+%3Fp+%22a%26b%22+%7D");

        assert_eq!(
            rows,
            vec![
                Solution::new()
                    .with("productName", RdfTerm::plain("Cane"))
                    .with(
                        "price",
                        RdfTerm::typed("19.50", "http://www.w3.org/2001/XMLSchema#decimal"),
                    ),
                Solution::new(),
            ]
        );
    }

    #[test]
    fn test_select_non_success_status_keeps_code_and_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 400 Bad Request",
            "MALFORMED QUERY: Lexical error at line 1",
        );
        let store = SparqlHttpStore::new(url, Duration::from_secs(5));

        let err = match store.select("SELECT * WHERE {") {
            Ok(_) => panic!("a 400 answer must not yield a cursor"),
            Err(e) => e,
        };
        server.join().expect("server thread");

        assert!(
            matches!(
                err,
                SparqlError::Status { status: 400, ref body }
                    if body == "MALFORMED QUERY: Lexical error at line 1"
            ),
            "{err:?}"
        );
    }
}
