use crate::scraper::ScraperConfig;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Scraper settings that keep tests fast: no backoff sleeps, two attempts.
pub fn test_config() -> ScraperConfig {
    ScraperConfig {
        timeout: Duration::from_secs(5),
        max_retries: 2,
        max_backoff_secs: 0,
        jitter_max_secs: 0,
    }
}

/// Canned response for one request target (path + query).
#[derive(Clone)]
pub struct Fixture {
    pub status: u16,
    pub body: String,
}

impl Fixture {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Serves canned responses on a local port for the lifetime of the test
/// process. Unknown targets get a 404. Returns the base URL.
pub fn spawn_fixture_server(routes: HashMap<String, Fixture>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            if let Ok(stream) = stream {
                let routes = routes.clone();
                thread::spawn(move || handle_conn(stream, &routes));
            }
        }
    });

    format!("http://{addr}")
}

fn handle_conn(mut stream: TcpStream, routes: &HashMap<String, Fixture>) {
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);

    // Request line: "GET /path?query HTTP/1.1"
    let target = request.split_whitespace().nth(1).unwrap_or("/");

    let (status, body) = match routes.get(target) {
        Some(fixture) => (fixture.status, fixture.body.clone()),
        None => (404, String::new()),
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_for(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn reason_for(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// A detail page embedding the given `classified` JSON in the data layer.
pub fn listing_page(classified_json: &str) -> String {
    format!(
        "<html><head><script>\n  window.dataLayer = [ {{\"classified\": {classified_json}}} ];\n</script></head><body></body></html>"
    )
}

/// A search-results page with one detail link per href.
pub fn search_page(hrefs: &[&str]) -> String {
    let mut anchors = String::new();
    for href in hrefs {
        anchors.push_str(&format!(
            "<a class=\"card__title-link\" href=\"{href}\">A house</a>\n"
        ));
    }
    format!("<html><body><div class=\"results\">\n{anchors}</div></body></html>")
}
