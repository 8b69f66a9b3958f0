//! libcurl-backed blocking GET.

use std::time::Duration;
use url::Url;

use super::{HttpGet, UserAgent};
use crate::config::HttpConfig;
use crate::error::{JuyoError, Result};

/// Blocking HTTP client; one `Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlClient {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirects: u32,
    browser_agent: String,
}

impl CurlClient {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirects: cfg.max_redirects,
            browser_agent: cfg.user_agent.clone(),
        }
    }

    fn perform(&self, url: &Url, agent: UserAgent) -> std::result::Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if agent == UserAgent::Browser {
            easy.useragent(&self.browser_agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        CurlClient::new(&HttpConfig::default())
    }
}

impl HttpGet for CurlClient {
    fn get(&self, url: &Url, agent: UserAgent) -> Result<Vec<u8>> {
        let (code, body) = self.perform(url, agent).map_err(|source| JuyoError::Transport {
            url: url.to_string(),
            source,
        })?;
        if !(200..300).contains(&code) {
            return Err(JuyoError::Http {
                status: code,
                url: url.to_string(),
            });
        }
        tracing::debug!(url = %url, status = code, bytes = body.len(), "GET ok");
        Ok(body)
    }
}
