// source.rs
use crate::loader::{Listing, LoaderError};
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("programs_board/", env!("CARGO_PKG_VERSION"));

/// Where a view gets its listings from.
pub trait ListingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, LoaderError>;
}

/// Reads the whole listings feed with one unauthenticated `GET`.
pub struct HttpListingSource {
    client: Client,
    url: String,
}

impl HttpListingSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoaderError> {
        // No request timeout: a slow upstream keeps the table in its loading state.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| LoaderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ListingSource for HttpListingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, LoaderError> {
        debug!("GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| LoaderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoaderError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .map_err(|e| LoaderError::Network(e.to_string()))?;

        parse_listings(&text)
    }
}

/// Parses a feed body: it must be a JSON array and every element a valid listing.
pub fn parse_listings(body: &str) -> Result<Vec<Listing>, LoaderError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| LoaderError::JsonParse(e.to_string()))?;

    let arr = match data {
        Value::Array(arr) => arr,
        other => {
            return Err(LoaderError::UnexpectedShape(format!(
                "expected an array of listings, found {}",
                json_kind(&other)
            )))
        }
    };

    arr.into_iter()
        .enumerate()
        .map(|(idx, v)| {
            serde_json::from_value(v)
                .map_err(|e| LoaderError::Deserialize(format!("record {idx}: {e}")))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
