use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::models::{NewYogaClass, YogaClass};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Outgoing wire shape for a class create. No id; absent description and
/// teacher are sent as empty strings, not null.
#[derive(Debug, Serialize)]
struct ClassPayload<'a> {
    day: &'a str,
    time: &'a str,
    capacity: i64,
    duration: i64,
    price: f64,
    #[serde(rename = "type")]
    class_type: &'a str,
    description: &'a str,
    teacher: &'a str,
}

/// Incoming wire shape for a catalog listing; optional fields default to
/// empty strings when the service omits them.
#[derive(Debug, Deserialize)]
struct WireClass {
    id: i64,
    day: String,
    time: String,
    capacity: i64,
    duration: i64,
    price: f64,
    #[serde(rename = "type")]
    class_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    teacher: String,
}

impl From<WireClass> for YogaClass {
    fn from(wire: WireClass) -> Self {
        YogaClass {
            id: wire.id,
            day: wire.day,
            time: wire.time,
            capacity: wire.capacity,
            duration: wire.duration,
            price: wire.price,
            class_type: wire.class_type,
            description: Some(wire.description),
            teacher: Some(wire.teacher),
        }
    }
}

/// HTTP client for the remote class catalog.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteCatalog {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn classes_url(&self) -> Url {
        Url::parse(&format!(
            "{}/classes",
            self.base_url.as_str().trim_end_matches('/')
        ))
        .expect("catalog URL joins cleanly")
    }

    /// Pushes a class to the catalog without blocking the caller. The request
    /// runs as a detached task; its outcome is observable only in the logs.
    /// At-most-once, best-effort: a failed push is logged and dropped.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn add_yoga_class(&self, new: NewYogaClass) {
        let catalog = self.clone();
        tokio::spawn(async move {
            match catalog.post_yoga_class(&new).await {
                Ok(()) => {
                    tracing::info!(class_type = %new.class_type, "class pushed to remote catalog");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to push class to remote catalog");
                }
            }
        });
    }

    /// POSTs the class and expects 201 Created.
    pub(crate) async fn post_yoga_class(&self, new: &NewYogaClass) -> Result<(), CatalogError> {
        let payload = ClassPayload {
            day: &new.day,
            time: &new.time,
            capacity: new.capacity,
            duration: new.duration,
            price: new.price,
            class_type: &new.class_type,
            description: new.description.as_deref().unwrap_or(""),
            teacher: new.teacher.as_deref().unwrap_or(""),
        };
        let response = self
            .client
            .post(self.classes_url())
            .json(&payload)
            .send()
            .await?;
        if response.status() != StatusCode::CREATED {
            return Err(CatalogError::UnexpectedStatus(response.status()));
        }
        Ok(())
    }

    /// Fetches the full catalog, suspending the caller until the response
    /// arrives. Any failure is logged and masked as an empty listing; no
    /// error reaches the caller.
    pub async fn get_all_yoga_classes(&self) -> Vec<YogaClass> {
        match self.fetch_classes().await {
            Ok(classes) => classes,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch remote catalog");
                Vec::new()
            }
        }
    }

    async fn fetch_classes(&self) -> Result<Vec<YogaClass>, CatalogError> {
        let response = self.client.get(self.classes_url()).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CatalogError::UnexpectedStatus(response.status()));
        }
        let wire: Vec<WireClass> = response.json().await?;
        Ok(wire.into_iter().map(YogaClass::from).collect())
    }
}
