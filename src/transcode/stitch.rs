//! Thinking-block stitching state.

/// Whether a streamed thinking block is currently open on the terminal,
/// i.e. the last thing written was a delta fragment with no trailing
/// newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stitch {
    /// Nothing pending; the cursor sits at the start of a line.
    #[default]
    Closed,
    /// A block is open, optionally owned by the session that streams it.
    Open { session: Option<String> },
}

/// The newlines a delta fragment requires around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaPlan {
    /// Terminate the previous block before writing (the session changed).
    pub break_before: bool,
    /// Terminate the block after writing (the fragment ended a sentence).
    pub break_after: bool,
}

impl Stitch {
    /// Close the block. Returns true if a newline is owed to the output.
    pub fn close(&mut self) -> bool {
        let was_open = matches!(self, Stitch::Open { .. });
        *self = Stitch::Closed;
        was_open
    }

    /// Apply one thinking delta and report the newlines the caller must
    /// emit around its text.
    ///
    /// A session change breaks the previous block first; a delta without
    /// a session id continues the current block and leaves ownership
    /// untouched. A fragment ending in a period closes its block, so
    /// sentence ends double as line breaks. That is a readability
    /// heuristic, and it will also split on abbreviations ("e.g.") or
    /// trailing decimals.
    pub fn on_delta(&mut self, session_id: Option<&str>, text: &str) -> DeltaPlan {
        let owner = match self {
            Stitch::Open { session } => session.clone(),
            Stitch::Closed => None,
        };

        let break_before = match (&owner, session_id) {
            (Some(current), Some(next)) => current != next,
            _ => false,
        };

        let break_after = text.ends_with('.');
        *self = if break_after {
            Stitch::Closed
        } else {
            let session = match session_id {
                Some(next) => Some(next.to_string()),
                None if !break_before => owner,
                None => None,
            };
            Stitch::Open { session }
        };

        DeltaPlan {
            break_before,
            break_after,
        }
    }
}
