//! Minimal HTTP/1.1 stand-in for the marketplace extension-query endpoint.
//!
//! Answers each POST according to the extension name in the request body and
//! records every request so tests can check what was sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
  pub method: String,
  pub path: String,
  pub headers: HashMap<String, String>,
  pub body: serde_json::Value
}

impl RecordedRequest {
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  /// The `value` of the first filter criterion
  pub fn queried_name(&self) -> Option<&str> {
    self.body["filters"][0]["criteria"][0]["value"].as_str()
  }
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
  pub status: u16,
  pub body: String,
  pub delay: Duration
}

impl CannedResponse {
  pub fn ok(body: impl Into<String>) -> Self {
    CannedResponse { status: 200, body: body.into(), delay: Duration::ZERO }
  }

  pub fn status(status: u16) -> Self {
    CannedResponse { status, body: String::new(), delay: Duration::ZERO }
  }

  pub fn delayed(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }
}

pub struct QueryServer {
  pub url: String,
  requests: Arc<Mutex<Vec<RecordedRequest>>>
}

impl QueryServer {
  pub fn requests(&self) -> Vec<RecordedRequest> {
    self.requests.lock().unwrap().clone()
  }
}

/// Starts the server on a background thread. Names without a canned response
/// get a 200 with an empty result set. Runs until the process exits.
pub fn start(responses: HashMap<String, CannedResponse>) -> QueryServer {
  let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
  let port = listener.local_addr().unwrap().port();
  let responses = Arc::new(responses);
  let requests = Arc::new(Mutex::new(Vec::new()));

  {
    let requests = Arc::clone(&requests);
    thread::spawn(move || {
      for stream in listener.incoming().flatten() {
        let responses = Arc::clone(&responses);
        let requests = Arc::clone(&requests);
        thread::spawn(move || handle(stream, &responses, &requests));
      }
    });
  }

  QueryServer {
    url: format!("http://127.0.0.1:{}/_apis/public/gallery/extensionquery", port),
    requests
  }
}

fn handle(mut stream: TcpStream, responses: &HashMap<String, CannedResponse>, requests: &Mutex<Vec<RecordedRequest>>) {
  let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
  let request = match read_request(&mut stream) {
    Some(request) => request,
    None => return
  };

  let canned = request
    .queried_name()
    .and_then(|name| responses.get(name))
    .cloned()
    .unwrap_or_else(|| CannedResponse::ok(r#"{"results":[{"extensions":[]}]}"#));

  requests.lock().unwrap().push(request);

  if !canned.delay.is_zero() { thread::sleep(canned.delay); }

  let response = format!(
    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
    canned.status, canned.body.len(), canned.body
  );
  let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
  let mut data = Vec::new();
  let mut buf = [0u8; 8192];

  let header_end = loop {
    if let Some(pos) = find(&data, b"\r\n\r\n") { break pos + 4; }
    let n = stream.read(&mut buf).ok()?;
    if n == 0 { return None; }
    data.extend_from_slice(&buf[..n]);
  };

  let head = std::str::from_utf8(&data[..header_end]).ok()?.to_string();
  let mut lines = head.lines();
  let mut request_line = lines.next()?.split_whitespace();
  let method = request_line.next()?.to_string();
  let path = request_line.next()?.to_string();

  let headers: HashMap<String, String> = lines
    .filter_map(|line| line.split_once(':'))
    .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
    .collect();

  let content_length: usize = headers.get("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
  while data.len() < header_end + content_length {
    let n = stream.read(&mut buf).ok()?;
    if n == 0 { break; }
    data.extend_from_slice(&buf[..n]);
  }

  let body_end = (header_end + content_length).min(data.len());
  let body = serde_json::from_slice(&data[header_end..body_end]).unwrap_or(serde_json::Value::Null);

  Some(RecordedRequest { method, path, headers, body })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
  haystack.windows(needle.len()).position(|window| window == needle)
}
