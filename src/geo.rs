//! GeoJSON access for the map transformer.
//!
//! A [`GeoSource`] yields one [`GeoJsonDocument`] per map name. The HTTP
//! source caches documents indefinitely (the key space is the small set of
//! deployed maps); tests pre-seed a [`StaticGeoSource`] instead of going over
//! the network. Fetch or decode failure is fatal for the calling transform:
//! a wrong region set would silently mislead the rendered output, so no
//! default map is ever substituted.

use std::sync::Mutex;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::error::{ChartError, ChartResult};

/// Feature property keys tried, in order, when resolving a region name.
const NAME_KEYS: [&str; 4] = ["name", "NAME", "Name", "id"];

/// A GeoJSON feature collection. Geometry is carried opaquely; only the
/// per-feature name properties are interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoJsonDocument {
    #[serde(rename = "type", default = "feature_collection_tag")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_collection_tag() -> String {
    "FeatureCollection".to_owned()
}

impl GeoJsonDocument {
    /// Region names in feature order. Per feature the first non-empty
    /// candidate property wins; nameless features are skipped.
    #[must_use]
    pub fn region_names(&self) -> Vec<String> {
        self.features
            .iter()
            .filter_map(|feature| {
                let properties = feature.get("properties")?.as_object()?;
                NAME_KEYS.iter().find_map(|key| {
                    match properties.get(*key) {
                        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                        Some(Value::Number(n)) => Some(n.to_string()),
                        _ => None,
                    }
                })
            })
            .collect()
    }
}

/// Source of GeoJSON documents, keyed by map name.
pub trait GeoSource {
    /// Returns the document for `map_name`, fetching it if necessary.
    fn document(&self, map_name: &str) -> ChartResult<GeoJsonDocument>;
}

/// HTTP-backed source with an internal, never-evicting cache.
///
/// The cache is check-then-fetch-then-store; two concurrent misses for the
/// same map may both fetch. That is idempotent and accepted.
#[derive(Debug)]
pub struct HttpGeoSource {
    base_url: String,
    http: reqwest::blocking::Client,
    cache: Mutex<IndexMap<String, GeoJsonDocument>>,
}

impl HttpGeoSource {
    /// Builds a source fetching `<base_url>/<map_name>.json`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("chart-options/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
            cache: Mutex::new(IndexMap::new()),
        }
    }

    fn fetch(&self, map_name: &str) -> ChartResult<GeoJsonDocument> {
        let url = format!("{}/{map_name}.json", self.base_url);
        debug!(map = map_name, url = url.as_str(), "fetching geo document");

        let response = self
            .http
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| {
                error!(map = map_name, "geo fetch failed: {e}");
                ChartError::GeoFetch {
                    map: map_name.to_owned(),
                    detail: e.to_string(),
                }
            })?;

        response.json::<GeoJsonDocument>().map_err(|e| {
            error!(map = map_name, "geo decode failed: {e}");
            ChartError::GeoDecode {
                map: map_name.to_owned(),
                detail: e.to_string(),
            }
        })
    }
}

impl GeoSource for HttpGeoSource {
    fn document(&self, map_name: &str) -> ChartResult<GeoJsonDocument> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.get(map_name) {
                return Ok(cached.clone());
            }
        }

        let document = self.fetch(map_name)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(map_name.to_owned(), document.clone());
        }
        Ok(document)
    }
}

/// Pre-seeded in-memory source for tests and offline callers.
#[derive(Debug, Default)]
pub struct StaticGeoSource {
    documents: IndexMap<String, GeoJsonDocument>,
}

impl StaticGeoSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one document under `map_name`.
    #[must_use]
    pub fn with_document(mut self, map_name: impl Into<String>, doc: GeoJsonDocument) -> Self {
        self.documents.insert(map_name.into(), doc);
        self
    }
}

impl GeoSource for StaticGeoSource {
    fn document(&self, map_name: &str) -> ChartResult<GeoJsonDocument> {
        self.documents
            .get(map_name)
            .cloned()
            .ok_or_else(|| ChartError::GeoFetch {
                map: map_name.to_owned(),
                detail: "map not seeded".to_owned(),
            })
    }
}
