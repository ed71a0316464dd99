//! Streaming rewrite of NDJSON event lines into terminal output.

mod stitch;
mod transcoder;

pub use stitch::{DeltaPlan, Stitch};
pub use transcoder::{run, Transcoder};
