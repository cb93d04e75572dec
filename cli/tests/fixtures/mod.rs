#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub fn search_page(results: &[(&str, &str)]) -> String {
    let items: String = results
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<li class="ipc-metadata-list-summary-item"><a class="ipc-metadata-list-summary-item__t" href="/name/{id}/?ref_=fn_nm_nm_1">{name}</a></li>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
<section data-testid="find-results-section-title"><a href="/title/tt0000001/">Unrelated title</a></section>
<section data-testid="find-results-section-name"><ul>{items}</ul></section>
</body></html>"#
    )
}

pub fn person_page(films: &[(&str, &str)]) -> String {
    let items: String = films
        .iter()
        .map(|(id, title)| {
            format!(
                r#"<li class="ipc-metadata-list-summary-item"><div><a class="ipc-metadata-list-summary-item__t" aria-label="{title}" href="/title/{id}/?ref_=nm_knf_t_1">{title}</a><span>2001</span></div></li>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
<a href="/title/tt7777777/">Trending now</a>
<ul class="ipc-metadata-list">{items}</ul>
</body></html>"#
    )
}

pub fn credits_page(cast: &[(&str, &str)]) -> String {
    let items: String = cast
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<li class="ipc-metadata-list-summary-item full-credits-page-list-item"><a class="name-credits--title-text name-credits--title-text-big" href="/name/{id}/?ref_=ttfc_fc_cl_t1">{name}</a><a href="/title/tt0000002/characters/{id}">Character</a></li>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
<a class="name-credits--title-text" href="/name/nm0000000/">Page header link</a>
<ul class="ipc-metadata-list full-credits-page-list">{items}</ul>
</body></html>"#
    )
}

/// Minimal HTTP server answering fixed pages by request target
pub struct FakeImdb {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeImdb {
    /// Routes are `(path with query, status, body)`; anything else is a 404
    pub async fn start(routes: Vec<(String, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();

                tokio::spawn(async move {
                    let mut buffer = vec![0u8; 16 * 1024];
                    let mut read = 0;
                    while read < buffer.len() {
                        let n = socket.read(&mut buffer[read..]).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        read += n;
                        if buffer[..read].windows(4).any(|window| window == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let request = String::from_utf8_lossy(&buffer[..read]).to_string();
                    let target = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    log.lock().unwrap().push(target.clone());

                    let (status, body) = routes
                        .iter()
                        .find(|(path, _, _)| *path == target)
                        .map(|(_, status, body)| (*status, body.clone()))
                        .unwrap_or((404, String::new()));

                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason(status),
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

pub fn ok(path: &str, body: String) -> (String, u16, String) {
    (path.to_string(), 200, body)
}

pub fn failing(path: &str) -> (String, u16, String) {
    (path.to_string(), 500, String::new())
}
