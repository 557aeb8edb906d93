#![cfg(test)]

use crate::gallery::card::CardDescriptor;
use crate::github::types::RepoRecord;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub fn make_repo(name: &str, stars: u64, fork: bool) -> RepoRecord {
    RepoRecord {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        language: None,
        stars,
        forks: 0,
        fork,
        homepage: None,
        topics: Vec::new(),
        code_url: format!("https://github.com/someone/{name}"),
    }
}

pub fn make_card(name: &str, stars: u64) -> CardDescriptor {
    CardDescriptor::from_record(&make_repo(name, stars, false))
}

/// Answers every connection on a loopback port with the same raw HTTP
/// response and forwards each request line it receives.
pub async fn serve_canned(status: &str, body: &str) -> (String, UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&chunk[..n]),
                }
            }
            let request = String::from_utf8_lossy(&head);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (base, rx)
}
