// File: crates/market-data/tests/eastmoney.rs
// Purpose: Request parameters, secid rule, response decoding, and fetches against a loopback server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;
use market_data::eastmoney::{date_range, decode_response, market_code, query_params, secid};
use market_data::{DataError, EastmoneySource, MarketDataSource};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn shanghai_codes_use_market_one() {
    assert_eq!(market_code("600519"), 1);
    assert_eq!(market_code("300246"), 0);
    assert_eq!(market_code("000001"), 0);
    assert_eq!(secid("600519"), "1.600519");
    assert_eq!(secid("300246"), "0.300246");
}

#[test]
fn lookback_is_calendar_days() {
    let (beg, end) = date_range(day(2024, 3, 1), 400);
    assert_eq!(beg, "20230126");
    assert_eq!(end, "20240301");
}

#[test]
fn daily_forward_adjusted_query() {
    let params = query_params("300246", day(2024, 3, 1), 30);
    let get = |k: &str| params.iter().find(|(key, _)| *key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("klt"), Some("101"));
    assert_eq!(get("fqt"), Some("1"));
    assert_eq!(get("secid"), Some("0.300246"));
    assert_eq!(get("beg"), Some("20240131"));
    assert_eq!(get("end"), Some("20240301"));
    assert_eq!(get("fields2"), Some("f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61,f116"));
}

#[test]
fn decodes_klines_in_order() {
    let body = r#"{
        "rc": 0,
        "data": {
            "code": "300246", "market": 0, "name": "X", "decimal": 2, "dktotal": 2,
            "klines": [
                "2024-02-29,10.0,10.5,10.8,9.9,1000,1,1,1,1,1",
                "2024-03-01,10.5,10.2,10.6,10.1,2000,1,1,1,1,1"
            ]
        }
    }"#;
    let bars = decode_response(body).expect("decode");
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].date, "2024-03-01");
    assert!(!bars[1].is_up());
}

#[test]
fn null_data_is_an_empty_series() {
    assert!(decode_response(r#"{"data": null}"#).expect("decode").is_empty());
    assert!(decode_response(r#"{"data": {"code": "1"}}"#).expect("decode").is_empty());
}

#[test]
fn garbage_body_is_a_decode_error() {
    assert!(matches!(decode_response("<html>"), Err(DataError::Decode(_))));
}

/// Answers one request with `status` and `body`; the join handle yields the request head.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/api/qt/stock/kline/get", listener.local_addr().expect("addr"));
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 { break; }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&head).into_owned()
    });
    (url, handle)
}

fn loopback_source(url: String) -> EastmoneySource {
    let client = reqwest::Client::builder().no_proxy().build().expect("client");
    EastmoneySource::with_client(client, url)
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let (url, server) = serve_once("503 Service Unavailable", "busy");
    let err = loopback_source(url).fetch_daily("300246", 400).await.expect_err("503");
    server.join().expect("server");
    match err {
        DataError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "busy");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_sends_the_daily_query_and_decodes_bars() {
    let body = r#"{"data":{"code":"600519","name":"Y","klines":[
        "2024-02-29,10.0,10.5,10.8,9.9,1000,1,1,1,1,1",
        "2024-03-01,10.5,10.2,10.6,10.1,2000,1,1,1,1,1"]}}"#;
    let (url, server) = serve_once("200 OK", body);
    let bars = loopback_source(url).fetch_daily("600519", 30).await.expect("fetch");
    let head = server.join().expect("server");

    let request_line = head.lines().next().unwrap_or_default();
    assert!(request_line.starts_with("GET /api/qt/stock/kline/get?"), "{request_line}");
    assert!(request_line.contains("secid=1.600519"), "{request_line}");
    assert!(request_line.contains("klt=101"), "{request_line}");
    assert!(request_line.contains("fqt=1"), "{request_line}");

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].date, "2024-02-29");
    assert_eq!(bars[1].volume, 2000.0);
}
