use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A request as seen by the mock service.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string.
    pub target: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        self.target.split_once('?').map(|(_, q)| q).unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Canned answer for one request.
#[derive(Clone, Debug)]
pub struct MockResponse {
    status: u16,
    body: String,
    delay: Duration,
}

impl MockResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// Hold the response back, keeping the caller's flow busy meanwhile.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Script = Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>;

/// Local HTTP server answering scripted responses per path and recording requests.
///
/// Every connection is served on its own thread so flows can overlap.
pub struct MockServer {
    base_url: String,
    script: Script,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        let script: Script = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
        let (thread_script, thread_requests) = (script.clone(), requests.clone());
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let script = thread_script.clone();
                let requests = thread_requests.clone();
                thread::spawn(move || serve(stream, script, requests));
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            script,
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Queue `response` for the next request to `path`.
    pub fn enqueue(&self, path: &str, response: MockResponse) -> &Self {
        self.script
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(mut stream: TcpStream, script: Script, requests: Arc<Mutex<Vec<RecordedRequest>>>) {
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let response = script
        .lock()
        .unwrap()
        .get_mut(request.path())
        .and_then(VecDeque::pop_front)
        .unwrap_or_else(|| MockResponse::json(404, r#"{"detail": "Not scripted"}"#));
    requests.lock().unwrap().push(request);
    thread::sleep(response.delay);
    let reason = if response.status < 400 { "OK" } else { "Error" };
    let raw = format!(
        "HTTP/1.1 {} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(raw.as_bytes());
    let _ = stream.flush();
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let (head_end, content_length) = loop {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..read]);
        let text = String::from_utf8_lossy(&data);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            break (head_end, content_length);
        }
    };
    while data.len() < head_end + 4 + content_length {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
    }
    let head = String::from_utf8_lossy(&data[..head_end]).into_owned();
    let body_end = data.len().min(head_end + 4 + content_length);
    let body = String::from_utf8_lossy(&data[head_end + 4..body_end]).into_owned();
    let mut request_line = head.lines().next()?.split_whitespace();
    Some(RecordedRequest {
        method: request_line.next()?.to_string(),
        target: request_line.next()?.to_string(),
        body,
    })
}
