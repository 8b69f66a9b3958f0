//! Integration test: full pipeline over real HTTP (libcurl) against a local server.
//!
//! Area base URLs are fixed, so requests are rewritten from
//! `https://<host>/<path>` to `http://127.0.0.1:<port>/<host>/<path>`.

mod common;

use std::io::{Cursor, Write};

use encoding_rs::SHIFT_JIS;
use juyo_core::config::HttpConfig;
use juyo_core::decode::ChardetngDetector;
use juyo_core::fetch::{CurlClient, HttpGet, UserAgent};
use juyo_core::persist::OutputLayout;
use juyo_core::{Area, JuyoError, Pipeline, RequestDate};
use tempfile::tempdir;
use url::Url;

struct LocalRewrite {
    inner: CurlClient,
    base: String,
}

impl LocalRewrite {
    fn new(base: &str) -> Self {
        let cfg = HttpConfig {
            connect_timeout_secs: 5,
            timeout_secs: 10,
            ..HttpConfig::default()
        };
        Self {
            inner: CurlClient::new(&cfg),
            base: base.to_string(),
        }
    }
}

impl HttpGet for LocalRewrite {
    fn get(&self, url: &Url, agent: UserAgent) -> juyo_core::Result<Vec<u8>> {
        let local = format!(
            "{}/{}{}",
            self.base,
            url.host_str().unwrap_or_default(),
            url.path()
        );
        self.inner.get(&Url::parse(&local).unwrap(), agent)
    }
}

fn zip_of(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut w = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in members {
        w.start_file(*name, zip::write::FileOptions::default())
            .unwrap();
        w.write_all(data).unwrap();
    }
    w.finish().unwrap().into_inner()
}

fn sjis(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

const DEMAND_CSV: &str = "2024/1/15 8:00 UPDATE\r\n\
ピーク時供給力(万kW),時台,供給力情報更新日,更新時刻\r\n\
\r\n\
1234,17:00~18:00,1/15,8:30\r\n\
\r\n\
DATE,TIME,当日実績(万kW),予測値(万kW),使用率(%),供給力(万kW)\r\n\
2024/1/15,0:00,980,990,80,1200\r\n\
2024/1/15,1:00,950,960,79,1200\r\n";

#[test]
fn direct_csv_shift_jis_is_written_as_utf8_without_blank_lines() {
    let server = common::http_server::start(vec![(
        "/setsuden.nw.tohoku-epco.co.jp/common/demand/juyo_2024_tohoku.csv",
        200,
        sjis(DEMAND_CSV),
    )]);
    let out = tempdir().unwrap();
    let pipeline = Pipeline::new(
        LocalRewrite::new(&server.base),
        ChardetngDetector,
        OutputLayout::new(out.path()),
    );

    let report = pipeline
        .run(&RequestDate::parse("2024-01-15").unwrap(), Area::Tohoku)
        .expect("run");

    let path = out.path().join("juyo/toh/2024/juyo_2024_tohoku.csv");
    assert_eq!(report.written, vec![path.clone()]);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("当日実績(万kW)"));
    assert!(!text.contains("\r"));
    assert!(text.lines().all(|l| !l.trim().is_empty()));
    assert!(text.ends_with("1200\n"));

    let reqs = server.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].user_agent.as_deref(), Some("Mozilla/5.0"));
}

#[test]
fn quarterly_lookup_downloads_linked_archive() {
    let archive = zip_of(&[
        ("202404_hokkaido_denkiyohou.csv", b"A,B\n\n1,2\n".as_slice()),
        ("202405_hokkaido_denkiyohou.csv", b"A,B\n3,4\n\n".as_slice()),
    ]);
    let page = br#"<ul>
<li><a href="area/data/zip/202401-03_hokkaido_denkiyohou.zip">2024 Q1</a></li>
<li><a href="area/data/zip/202404-06_hokkaido_denkiyohou.zip">2024 Q2</a></li>
</ul>"#;
    let server = common::http_server::start(vec![
        ("/denkiyoho.hepco.co.jp/area_download.html", 200, page.to_vec()),
        (
            "/denkiyoho.hepco.co.jp/area/data/zip/202404-06_hokkaido_denkiyohou.zip",
            200,
            archive,
        ),
    ]);
    let out = tempdir().unwrap();
    let pipeline = Pipeline::new(
        LocalRewrite::new(&server.base),
        ChardetngDetector,
        OutputLayout::new(out.path()),
    );

    let report = pipeline
        .run(&RequestDate::parse("2024-05-10").unwrap(), Area::Hokkaido)
        .expect("run");

    let base = out.path().join("juyo/hok/2024");
    assert_eq!(
        report.written,
        vec![
            base.join("202404_hokkaido_denkiyohou.csv"),
            base.join("202405_hokkaido_denkiyohou.csv"),
        ]
    );
    assert_eq!(
        std::fs::read_to_string(&report.written[0]).unwrap(),
        "A,B\n1,2\n"
    );
    assert_eq!(
        std::fs::read_to_string(&report.written[1]).unwrap(),
        "A,B\n3,4\n"
    );

    let reqs = server.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].path, "/denkiyoho.hepco.co.jp/area_download.html");
    assert_eq!(reqs[0].user_agent, None);
    assert_eq!(reqs[1].user_agent.as_deref(), Some("Mozilla/5.0"));
}

#[test]
fn quarterly_lookup_without_link_makes_no_data_request() {
    let server = common::http_server::start(vec![(
        "/denkiyoho.hepco.co.jp/area_download.html",
        200,
        b"<a href=\"area/data/zip/202401-03_hokkaido_denkiyohou.zip\">Q1</a>".to_vec(),
    )]);
    let out = tempdir().unwrap();
    let pipeline = Pipeline::new(
        LocalRewrite::new(&server.base),
        ChardetngDetector,
        OutputLayout::new(out.path()),
    );

    let err = pipeline
        .run(&RequestDate::parse("2024-05-10").unwrap(), Area::Hokkaido)
        .unwrap_err();

    match err {
        JuyoError::ResourceNotFound { pattern, .. } => {
            assert_eq!(pattern, "area/data/zip/202404-06_hokkaido_denkiyohou.zip")
        }
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
    assert_eq!(server.requests().len(), 1);
    assert!(!out.path().join("juyo").exists());
}

#[test]
fn missing_monthly_archive_is_http_error() {
    let server = common::http_server::start(vec![]);
    let out = tempdir().unwrap();
    let pipeline = Pipeline::new(
        LocalRewrite::new(&server.base),
        ChardetngDetector,
        OutputLayout::new(out.path()),
    );

    let err = pipeline
        .run(&RequestDate::parse("2024-01-31").unwrap(), Area::Tokyo)
        .unwrap_err();

    match err {
        JuyoError::Http { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/www.tepco.co.jp/forecast/html/images/202401_power_usage.zip"));
        }
        other => panic!("expected Http, got {other:?}"),
    }
}
