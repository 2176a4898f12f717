use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};
use serde_json::{Map, Value};

pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// A search request as sent on the wire.
///
/// Build one with [`SearchRequest::new`] to get the defaults (every toggle on,
/// 20 results), or spell out every field with a struct literal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(serialize_with = "serialize_query")]
    pub query: String,
    pub auto_parameters: bool,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_images: bool,
    pub include_image_descriptions: bool,
    pub max_results: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            auto_parameters: true,
            include_answer: true,
            include_raw_content: true,
            include_images: true,
            include_image_descriptions: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn auto_parameters(mut self, enabled: bool) -> Self {
        self.auto_parameters = enabled;
        self
    }

    pub fn include_answer(mut self, enabled: bool) -> Self {
        self.include_answer = enabled;
        self
    }

    pub fn include_raw_content(mut self, enabled: bool) -> Self {
        self.include_raw_content = enabled;
        self
    }

    pub fn include_images(mut self, enabled: bool) -> Self {
        self.include_images = enabled;
        self
    }

    pub fn include_image_descriptions(mut self, enabled: bool) -> Self {
        self.include_image_descriptions = enabled;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

// The upstream API rejects blank queries; refuse to encode them at all.
fn serialize_query<S>(query: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if query.trim().is_empty() {
        return Err(S::Error::custom("query cannot be empty"));
    }
    serializer.serialize_str(query)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SiteResult>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,

    /// Top-level fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    /// Server-side latency in seconds, when the API reports it.
    pub fn response_time(&self) -> Option<f64> {
        match self.extra.get("response_time")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// One ranked hit. Anything beyond title and url is passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SiteResult {
    pub title: String,
    pub url: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> SiteResult {
        SiteResult {
            title: title.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.extra.get("content").and_then(Value::as_str)
    }

    pub fn raw_content(&self) -> Option<&str> {
        self.extra.get("raw_content").and_then(Value::as_str)
    }

    pub fn score(&self) -> Option<f64> {
        self.extra.get("score").and_then(Value::as_f64)
    }
}

/// Images come back as bare URLs, or as objects once descriptions are requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ImageResult {
    Url(String),
    Described {
        url: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl ImageResult {
    pub fn url(&self) -> &str {
        match self {
            ImageResult::Url(url) => url,
            ImageResult::Described { url, .. } => url,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ImageResult::Url(_) => None,
            ImageResult::Described { description, .. } => description.as_deref(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
