//! Subprocess plumbing for the external extraction tools.

mod python;
mod runner;

pub use python::find_python;
pub use runner::{BufferSink, CapturedOutput, LineSink, ToolCommand, TracingSink};
