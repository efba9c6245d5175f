//! Static file server for the built front-end.
//!
//! Serves the Trunk output from the dist/ directory, falling back to
//! index.html for unknown paths so client-side routing works on reload.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("refnet web server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    let file_path = resolve(path);
    let content_type = content_type_for(&file_path);

    let (body, status) = match fs::read(&file_path) {
        Ok(contents) => (contents, "200 OK"),
        Err(_) => match fs::read("dist/index.html") {
            Ok(contents) => (contents, "200 OK"),
            Err(_) => (
                b"<!DOCTYPE html><html><body><h1>dist/ not built</h1></body></html>".to_vec(),
                "404 NOT FOUND",
            ),
        },
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if stream.write_all(headers.as_bytes()).is_ok() {
        let _ = stream.write_all(&body);
    }
    let _ = stream.flush();
}

fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let mut dist_path = PathBuf::from("dist");
    dist_path.push(path.strip_prefix('/').unwrap_or(path));
    // Unknown routes and directories fall back to the SPA entry point.
    if dist_path.is_dir() || !dist_path.exists() {
        PathBuf::from("dist/index.html")
    } else {
        dist_path
    }
}

fn content_type_for(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
