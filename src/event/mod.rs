//! Parsing and summarization of coding-agent NDJSON event records.

mod record;
mod tool_call;

pub use record::{AssistantMessage, ContentBlock, StreamEvent};
pub use tool_call::summarize_tool_call;
