//! Typed view of one NDJSON event line.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field permissively: a missing, null, or mistyped value
/// becomes `None` instead of failing the whole record. Event producers
/// evolve their schemas freely; a field we cannot read should only
/// degrade the branch that needs it.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A content block within an assistant message.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// The message structure carried by assistant events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<Vec<Value>>,
}

/// One event record from the agent stream.
///
/// Only `type` is required for a line to count as an event; every other
/// field is optional and read leniently. Lines that fail to parse into
/// this shape are passed through as raw text by the transcoder.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, deserialize_with = "lenient")]
    pub subtype: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<AssistantMessage>,
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<String>,
    #[serde(default)]
    pub tool_call: Option<Value>,
}

impl StreamEvent {
    /// Collect the plain text of an assistant message.
    ///
    /// Walks `message.content`, keeps the text of every `text`-typed
    /// block with a non-empty string, and joins the pieces with
    /// newlines. Returns `None` when nothing usable is present.
    pub fn assistant_text(&self) -> Option<String> {
        let blocks = self.message.as_ref()?.content.as_deref()?;

        let parts: Vec<String> = blocks
            .iter()
            .filter_map(|item| serde_json::from_value::<ContentBlock>(item.clone()).ok())
            .filter(|block| block.type_ == "text")
            .filter_map(|block| block.text)
            .filter(|text| !text.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }
}
