// src/core/net.rs
//
// Blocking HTTPS GET with retries and progressive backoff.

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::{consts::USER_AGENT, Settings};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    retries: u32,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, retries: settings.retries })
    }

    /// GET `url` and return the body. Retries `retries` times, sleeping
    /// 2s, 4s, … between attempts.
    pub fn get(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.get_once(url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    let wait = backoff_secs(attempt);
                    logw!(
                        "Fetch: {} failed ({}), retrying in {}s ({}/{})",
                        url, e, wait, attempt + 1, self.retries
                    );
                    thread::sleep(Duration::from_secs(wait));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_once(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

fn backoff_secs(attempt: u32) -> u64 {
    (attempt as u64 + 1) * 2
}
