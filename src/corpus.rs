use std::path::Path;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

use crate::error::{BenchError, Result};

const DEFAULT_CORPUS: &str = include_str!("../assets/car-list.json");

/// Full car list the embedded corpus was cut from.
pub const DEFAULT_CORPUS_URL: &str =
    "https://raw.githubusercontent.com/matthlavacka/car-list/master/car-list.json";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Deserialize)]
pub struct BrandEntry {
    pub brand: String,
    pub models: Vec<String>,
}

/// Brand and model names used to label generated records.
///
/// The JSON layout is a list of `{"brand": ..., "models": [...]}` objects.
#[derive(Debug, Clone)]
pub struct NameCorpus {
    brands: Vec<BrandEntry>,
}

impl NameCorpus {
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CORPUS)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BenchError::Corpus(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// Downloads the corpus. Transport failures, non-200 responses and bodies
    /// that are not a valid corpus are all `BenchError::Corpus`.
    pub fn fetch(url: &str, timeout: Duration) -> Result<Self> {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let response = agent
            .get(url)
            .call()
            .map_err(|e| BenchError::Corpus(format!("failed to fetch {}: {}", url, e)))?;
        if response.status() != 200 {
            return Err(BenchError::Corpus(format!(
                "failed to fetch {}: status {}",
                url,
                response.status()
            )));
        }
        let body = response
            .into_string()
            .map_err(|e| BenchError::Corpus(format!("failed to read body of {}: {}", url, e)))?;
        Self::from_json(&body).map_err(|e| match e {
            BenchError::Json(e) => BenchError::Corpus(format!("invalid corpus at {}: {}", url, e)),
            other => other,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let brands: Vec<BrandEntry> = serde_json::from_str(text)?;
        if brands.is_empty() {
            return Err(BenchError::Corpus("corpus contains no brands".to_string()));
        }
        if let Some(entry) = brands.iter().find(|b| b.models.is_empty()) {
            return Err(BenchError::Corpus(format!(
                "brand '{}' has no models",
                entry.brand
            )));
        }
        Ok(Self { brands })
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Picks a brand uniformly, then one of its models uniformly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        let entry = &self.brands[rng.random_range(0..self.brands.len())];
        let model = &entry.models[rng.random_range(0..entry.models.len())];
        (entry.brand.as_str(), model.as_str())
    }
}
