use crate::errors::DataUnavailable;
use crate::models::Section;
use serde::Deserialize;
use serde_json::Value;
use std::{fmt, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

/// Where a JSON document lives: a remote URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    Url(String),
    File(PathBuf),
}

impl SourceRef {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            SourceRef::Url(raw.to_string())
        } else {
            SourceRef::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Url(url) => f.write_str(url),
            SourceRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches every source in order. The first failure aborts the whole load.
pub async fn load(
    client: &reqwest::Client,
    sources: &[SourceRef],
) -> Result<Vec<Value>, DataUnavailable> {
    let mut documents = Vec::with_capacity(sources.len());
    for source in sources {
        match load_one(client, source).await {
            Ok(document) => documents.push(document),
            Err(err) => {
                error!("failed to load {source}: {err}");
                return Err(err);
            }
        }
    }
    Ok(documents)
}

async fn load_one(client: &reqwest::Client, source: &SourceRef) -> Result<Value, DataUnavailable> {
    let bytes = match source {
        SourceRef::Url(url) => {
            let request_failed = |error: reqwest::Error| DataUnavailable::Request {
                source_ref: url.clone(),
                error,
            };
            let response = client.get(url).send().await.map_err(request_failed)?;
            let status = response.status();
            if !status.is_success() {
                return Err(DataUnavailable::Status {
                    source_ref: url.clone(),
                    status: status.as_u16(),
                });
            }
            response.bytes().await.map_err(request_failed)?.to_vec()
        }
        SourceRef::File(path) => fs::read(path).await.map_err(|error| DataUnavailable::Read {
            source_ref: source.to_string(),
            error,
        })?,
    };

    debug!("fetched {} bytes from {source}", bytes.len());
    serde_json::from_slice(&bytes).map_err(|error| DataUnavailable::Malformed {
        source_ref: source.to_string(),
        error,
    })
}

/// Pulls the `questionBank` sections out of the primary document.
pub fn question_bank(source: &SourceRef, document: &Value) -> Result<Vec<Section>, DataUnavailable> {
    let bank = document
        .get("questionBank")
        .filter(|value| value.is_array())
        .ok_or_else(|| DataUnavailable::MissingField {
            source_ref: source.to_string(),
            field: "questionBank",
        })?;

    Vec::<Section>::deserialize(bank).map_err(|error| DataUnavailable::Malformed {
        source_ref: source.to_string(),
        error,
    })
}

/// Pulls the loosely-typed `problems` records out of the secondary document.
pub fn additional_problems<'a>(
    source: &SourceRef,
    document: &'a Value,
) -> Result<&'a [Value], DataUnavailable> {
    document
        .get("problems")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| DataUnavailable::MissingField {
            source_ref: source.to_string(),
            field: "problems",
        })
}
