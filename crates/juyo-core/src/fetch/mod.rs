//! Fetcher: performs the GET(s) a [`ResourceDescriptor`] calls for.
//!
//! Transport sits behind [`HttpGet`] so the pipeline can run against a
//! scripted client in tests. No retries: the first failure ends the call.

mod client;

pub use client::CurlClient;

use url::Url;

use crate::error::Result;
use crate::locator::{resolve_link, PayloadKind, ResourceDescriptor};

/// Which User-Agent a request should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAgent {
    /// Whatever the transport sends by default.
    Default,
    /// A browser-like agent; some data hosts reject default clients.
    Browser,
}

/// Blocking GET returning the body of a 2xx response.
///
/// Implementations return `JuyoError::Http` for non-2xx statuses.
pub trait HttpGet {
    fn get(&self, url: &Url, agent: UserAgent) -> Result<Vec<u8>>;
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get(&self, url: &Url, agent: UserAgent) -> Result<Vec<u8>> {
        (**self).get(url, agent)
    }
}

/// Raw bytes as retrieved, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedPayload {
    Csv { filename: String, bytes: Vec<u8> },
    Archive { filename: String, bytes: Vec<u8> },
}

impl FetchedPayload {
    pub(crate) fn len(&self) -> usize {
        match self {
            FetchedPayload::Csv { bytes, .. } | FetchedPayload::Archive { bytes, .. } => {
                bytes.len()
            }
        }
    }
}

/// Performs the request(s) described by `descriptor`.
///
/// For HTML lookups the page is fetched first and searched for the archive
/// link; when the link is absent no data request is made.
pub fn fetch<C: HttpGet>(client: &C, descriptor: &ResourceDescriptor) -> Result<FetchedPayload> {
    match descriptor {
        ResourceDescriptor::Direct {
            url,
            filename,
            kind,
        } => {
            let bytes = client.get(url, UserAgent::Browser)?;
            Ok(match kind {
                PayloadKind::Csv => FetchedPayload::Csv {
                    filename: filename.clone(),
                    bytes,
                },
                PayloadKind::Archive => FetchedPayload::Archive {
                    filename: filename.clone(),
                    bytes,
                },
            })
        }
        ResourceDescriptor::HtmlLookup {
            page_url,
            base_url,
            pattern,
            filename,
        } => {
            let page = client.get(page_url, UserAgent::Default)?;
            let html = String::from_utf8_lossy(&page);
            let data_url = resolve_link(&html, pattern, base_url, page_url.as_str())?;
            tracing::debug!(page = %page_url, data = %data_url, "resolved archive link");
            let bytes = client.get(&data_url, UserAgent::Browser)?;
            Ok(FetchedPayload::Archive {
                filename: filename.clone(),
                bytes,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JuyoError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned bodies by URL and records every request.
    #[derive(Default)]
    struct Scripted {
        routes: HashMap<String, (u32, Vec<u8>)>,
        calls: RefCell<Vec<(String, UserAgent)>>,
    }

    impl Scripted {
        fn route(mut self, url: &str, status: u32, body: &[u8]) -> Self {
            self.routes.insert(url.to_string(), (status, body.to_vec()));
            self
        }
    }

    impl HttpGet for Scripted {
        fn get(&self, url: &Url, agent: UserAgent) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push((url.to_string(), agent));
            match self.routes.get(url.as_str()) {
                Some((status, body)) if (200..300).contains(status) => Ok(body.clone()),
                Some((status, _)) => Err(JuyoError::Http {
                    status: *status,
                    url: url.to_string(),
                }),
                None => Err(JuyoError::Http {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }

    fn lookup() -> ResourceDescriptor {
        ResourceDescriptor::HtmlLookup {
            page_url: Url::parse("https://h.example/area_download.html").unwrap(),
            base_url: Url::parse("https://h.example/").unwrap(),
            pattern: "area/data/zip/202404-06_hokkaido_denkiyohou.zip".to_string(),
            filename: "202404-06_hokkaido_denkiyohou.zip".to_string(),
        }
    }

    #[test]
    fn direct_csv_uses_browser_agent() {
        let client = Scripted::default().route("https://t.example/a.csv", 200, b"x,y\n");
        let d = ResourceDescriptor::Direct {
            url: Url::parse("https://t.example/a.csv").unwrap(),
            filename: "a.csv".to_string(),
            kind: PayloadKind::Csv,
        };
        let p = fetch(&client, &d).unwrap();
        assert_eq!(
            p,
            FetchedPayload::Csv {
                filename: "a.csv".to_string(),
                bytes: b"x,y\n".to_vec()
            }
        );
        assert_eq!(client.calls.borrow()[0].1, UserAgent::Browser);
    }

    #[test]
    fn lookup_follows_link_then_fetches_archive() {
        let client = Scripted::default()
            .route(
                "https://h.example/area_download.html",
                200,
                br#"<a href="area/data/zip/202404-06_hokkaido_denkiyohou.zip">dl</a>"#,
            )
            .route(
                "https://h.example/area/data/zip/202404-06_hokkaido_denkiyohou.zip",
                200,
                b"PK",
            );
        let p = fetch(&client, &lookup()).unwrap();
        assert!(matches!(p, FetchedPayload::Archive { ref bytes, .. } if bytes == b"PK"));
        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, UserAgent::Default);
        assert_eq!(calls[1].1, UserAgent::Browser);
    }

    #[test]
    fn missing_link_is_not_found_and_skips_data_request() {
        let client = Scripted::default().route(
            "https://h.example/area_download.html",
            200,
            b"<html>nothing for this quarter</html>",
        );
        let err = fetch(&client, &lookup()).unwrap_err();
        assert!(matches!(err, JuyoError::ResourceNotFound { .. }));
        assert_eq!(client.calls.borrow().len(), 1);
    }

    #[test]
    fn page_error_is_http_error() {
        let client =
            Scripted::default().route("https://h.example/area_download.html", 503, b"");
        match fetch(&client, &lookup()).unwrap_err() {
            JuyoError::Http { status, url } => {
                assert_eq!(status, 503);
                assert_eq!(url, "https://h.example/area_download.html");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }
}
