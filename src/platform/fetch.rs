// DoctorDirectory - platform/fetch.rs
//
// One-shot read of the directory payload from a URL or a local file.
// Returns the decoded JSON value; deciding what a non-list payload or a
// failure means is left to the record store.

use crate::util::constants::MAX_PAYLOAD_BYTES;
use crate::util::error::FetchError;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the directory payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` prefixes select a URL; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and decode the payload. Blocks until done or `timeout` elapses
/// (the timeout applies to URL sources only).
pub fn fetch_payload(source: &DataSource, timeout: Duration) -> Result<Value, FetchError> {
    let bytes = match source {
        DataSource::Url(url) => fetch_url(url, timeout)?,
        DataSource::File(path) => read_file(path)?,
    };
    tracing::debug!(bytes = bytes.len(), "Payload read");
    decode(&bytes)
}

fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let http_err = |e| FetchError::Http {
        url: url.to_string(),
        source: e,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(http_err)?;

    let response = client.get(url).send().map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(len) = response.content_length() {
        check_size(len)?;
    }

    let body = response.bytes().map_err(http_err)?;
    check_size(body.len() as u64)?;
    Ok(body.to_vec())
}

fn read_file(path: &Path) -> Result<Vec<u8>, FetchError> {
    let io_err = |e| FetchError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let metadata = std::fs::metadata(path).map_err(io_err)?;
    check_size(metadata.len())?;
    std::fs::read(path).map_err(io_err)
}

fn check_size(size: u64) -> Result<(), FetchError> {
    if size > MAX_PAYLOAD_BYTES {
        return Err(FetchError::TooLarge {
            size,
            max: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

/// Decode raw bytes as JSON of any shape.
pub fn decode(bytes: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Decode { source: e })
}
