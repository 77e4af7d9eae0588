// src/core/net.rs
// Blocking HTTP behind a small trait so the pipeline can run against canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Status + body of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One authenticated conversation with the site. Cookies set by `post_form`
/// must be sent on later `get` calls made through the same value.
pub trait Transport {
    fn post_form(&mut self, url: &str, form: &[(&str, &str)]) -> Result<Response>;
    fn get(&mut self, url: &str) -> Result<Response>;
}

/// Opens a fresh session. Called once per scraped date.
pub trait Connector {
    type Session: Transport;
    fn open(&self) -> Result<Self::Session>;
}

/// Real transport: a reqwest client with its own cookie jar.
pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpSession {
    fn post_form(&mut self, url: &str, form: &[(&str, &str)]) -> Result<Response> {
        let resp = self.client.post(url).form(form).send()?;
        let status = resp.status().as_u16();
        Ok(Response { status, body: resp.text()? })
    }

    fn get(&mut self, url: &str) -> Result<Response> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        Ok(Response { status, body: resp.text()? })
    }
}

/// Connector for the live site.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    type Session = HttpSession;

    fn open(&self) -> Result<HttpSession> {
        HttpSession::new()
    }
}
