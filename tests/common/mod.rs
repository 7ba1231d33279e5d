//! Mock reviews backend for integration tests.

use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// Start a backend that answers every request with `f(request)`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        let _ = serve_one(socket, f, recorded).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend that replays `responses` in order for requests to `path`,
/// repeating the last one. Other paths get 200 with an empty object.
#[allow(dead_code)]
pub async fn start_sequence_backend(
    path: &'static str,
    responses: Vec<(u16, &'static str)>,
) -> MockBackend {
    let counter = Arc::new(AtomicUsize::new(0));
    let responses = Arc::new(responses);
    start_programmable_backend(move |req| {
        let counter = counter.clone();
        let responses = responses.clone();
        async move {
            if req.path != path {
                return (200, "{}".to_string());
            }
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let (status, body) = responses[n.min(responses.len() - 1)];
            (status, body.to_string())
        }
    })
    .await
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn serve_one<F, Fut>(
    socket: TcpStream,
    f: Arc<F>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
) -> std::io::Result<()>
where
    F: Fn(RecordedRequest) -> Fut,
    Fut: Future<Output = (u16, String)>,
{
    let mut reader = BufReader::new(socket);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    let length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).await?;

    let request = RecordedRequest {
        method,
        path,
        headers,
        body,
    };
    recorded.lock().unwrap().push(request.clone());

    let (status, body) = f(request).await;
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_phrase(status),
        body.len(),
        body
    );

    let mut socket = reader.into_inner();
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
