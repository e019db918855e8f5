// src/core/net.rs
// Blocking HTTP GET. One client per run; no retries.

use std::error::Error;

use reqwest::blocking::{Client, Response};

use crate::config::options::FetchOptions;

pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(opts: &FetchOptions) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout())
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` as text. Any non-2xx status is an error.
    pub fn get_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.get_ok(url)?;
        Ok(resp.text()?)
    }

    /// GET `url` as raw bytes. Any non-2xx status is an error.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let resp = self.get_ok(url)?;
        Ok(resp.bytes()?.to_vec())
    }

    fn get_ok(&self, url: &str) -> Result<Response, Box<dyn Error>> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {status} {url}").into());
        }
        Ok(resp)
    }
}
