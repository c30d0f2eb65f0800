//! Shared setup for tests that talk to a wiremock Dumpling AI stand-in.

use dumpling_core::{
    DumplingAiCredential, DumplingClient, DumplingConfig, ExecutionOptions, InputItem,
    NodeExecutor,
};

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use serde_json::Value;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "dmp_test_0123456789abcdef";
pub const TEST_BEARER: &str = "Bearer dmp_test_0123456789abcdef";

pub fn config_for(server: &MockServer) -> DumplingConfig {
    DumplingConfig {
        base_url: format!("{}/api/v1", server.uri()),
        ..DumplingConfig::default()
    }
}

pub fn client_for(server: &MockServer) -> DumplingClient {
    client_with(&config_for(server))
}

pub fn client_for_url(base_url: String) -> DumplingClient {
    client_with(&DumplingConfig {
        base_url,
        ..DumplingConfig::default()
    })
}

fn client_with(config: &DumplingConfig) -> DumplingClient {
    let credential = DumplingAiCredential::new(TEST_API_KEY).expect("test key is valid");
    DumplingClient::new(config, &credential).expect("client builds")
}

/// Base URL on a port nothing listens on. The port is taken from a listener
/// that is dropped right away.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{address}/api/v1")
}

/// Answers one request with `status_line`, announces a 64 byte body, sends
/// less and closes the connection.
pub fn truncated_body_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            drain_request(&mut stream);
            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{{\"error\":"
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{address}/api/v1")
}

fn drain_request(stream: &mut TcpStream) {
    let mut received = Vec::new();
    let mut buffer = [0u8; 1024];

    loop {
        let read = match stream.read(&mut buffer) {
            Ok(0) | Err(_) => return,
            Ok(read) => read,
        };
        received.extend_from_slice(&buffer[..read]);

        let text = String::from_utf8_lossy(&received);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if received.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}

pub fn executor_for(server: &MockServer, continue_on_fail: bool) -> NodeExecutor {
    NodeExecutor::new(client_for(server), ExecutionOptions { continue_on_fail })
}

pub fn items(values: Vec<Value>) -> Vec<InputItem> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("item is an object"))
        .collect()
}
