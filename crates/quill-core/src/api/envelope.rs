//! Business-level response wrapper shared by every blog endpoint.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope code the server uses for a successful operation.
pub const SUCCESS_CODE: i64 = 1;

/// `{code, msg, data}` wrapper returned by every endpoint.
///
/// Top-level fields other than the three documented ones are kept in `extra`
/// so a caller that receives the envelope sees the response intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Decode the payload into a typed model.
    ///
    /// A `null` payload only decodes into types that accept `null`, such as
    /// `Option<_>` or `()`.
    pub fn data_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.data)
    }

    /// Top-level string field outside `{code, msg, data}`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
