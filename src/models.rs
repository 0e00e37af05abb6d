/// Response shapes for the analytics API
///
/// Every field is optional and decoded leniently: a field with an unexpected
/// type is treated as missing instead of failing the whole payload, so the
/// renderer can fall back to "N/A" field by field.
use std::fmt;

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a payload, falling back to an empty model when it is absent or not
/// an object of the expected shape
pub fn parse_or_default<T: DeserializeOwned + Default>(payload: Option<&Value>) -> T {
    payload
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or_default()
}

/// A number or a string, shown as-is
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Zero and empty strings count as missing
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebsiteDetails {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Images>,
}

impl WebsiteDetails {
    pub fn screenshot(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.desktop.as_deref())
            .filter(|src| !src.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Images {
    #[serde(default, deserialize_with = "lenient")]
    pub desktop: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Traffic {
    #[serde(default, deserialize_with = "lenient")]
    pub visits: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankData {
    #[serde(default, deserialize_with = "lenient")]
    pub global_rank: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_rank: Option<CountryRank>,
    #[serde(default, deserialize_with = "lenient")]
    pub category_rank: Option<CategoryRank>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryRank {
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryRank {
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<Scalar>,
}

/// Body of the similar-sites endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimilarSitesResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub similar_sites: Option<Vec<SimilarSite>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimilarSite {
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub global_rank: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub visits: Option<f64>,
}
