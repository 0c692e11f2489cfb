#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

pub fn recipe_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "thumbnail": format!("/images/{id}.jpg"),
        "pictures": [],
        "creator": { "id": "chef-1", "name": "Julia" },
        "preparationTime": "PT20M",
        "ingredients": [
            { "name": "flour", "quantity": 250.0, "unit": "g" },
            { "name": "egg" },
            { "name": "milk", "quantity": 500.0, "unit": "ml" }
        ],
        "steps": [
            { "description": "mix" },
            { "description": "cook", "durationMinutes": 15 }
        ],
        "rating": 4.5,
        "likeCount": 10,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

pub fn summary_json(id: &str, title: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "thumbnail": format!("/images/{id}.jpg"),
        "author": "Julia",
        "rating": 4.5,
        "createdAt": created_at
    })
}

/// Serves exactly one HTTP response and hands back the request body it saw.
pub async fn serve_once(
    status: &'static str,
    body: Value,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let request = read_body(&mut socket).await?;

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;

        Ok(request)
    });

    Ok((format!("http://{addr}/v1/graphql"), handle))
}

async fn read_body(socket: &mut TcpStream) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            anyhow::bail!("connection closed before the request was complete");
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        let Some(end) = text.find("\r\n\r\n") else {
            continue;
        };

        let length = text[..end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if buf.len() >= end + 4 + length {
            return Ok(String::from_utf8(buf[end + 4..end + 4 + length].to_vec())?);
        }
    }
}
