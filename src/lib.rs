//! agentpipe rewrites the NDJSON event stream of an interactive coding
//! agent into human-readable terminal output.
//!
//! The agent emits one JSON object per line: streamed `thinking` deltas,
//! `assistant` messages, `tool_call` lifecycle records, and a final
//! `result`. agentpipe stitches thinking deltas back into readable lines,
//! reduces tool calls to one-line summaries, hides noisy envelope events,
//! and passes anything it does not recognize through untouched. Output is
//! flushed after every chunk so it stays live while the agent is running.

pub mod event;
pub mod redact;
pub mod text;
pub mod transcode;
