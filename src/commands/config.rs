use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::{http::HttpClient, index::PyPi, runtime::Runtime};

pub const USER_AGENT: &str = concat!("pip2arch-cli/", env!("PIP2ARCH_VERSION"));

/// Everything a command needs, built once at the start of the command.
pub struct Config<R: Runtime, I> {
    pub runtime: R,
    pub index: I,
}

impl<R: Runtime> Config<R, PyPi> {
    pub fn new(runtime: R, index_url: Option<String>) -> Result<Self> {
        let index = build_index(index_url)?;
        Ok(Self { runtime, index })
    }
}

/// Builds the HTTP-backed index client for `index_url` (PyPI when `None`).
pub fn build_index(index_url: Option<String>) -> Result<PyPi> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let index = PyPi::new(HttpClient::new(client), index_url);
    debug!("Using package index at {}", index.index_url);
    Ok(index)
}
