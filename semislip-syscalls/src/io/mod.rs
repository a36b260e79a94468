//! Host-mediated I/O paths

pub mod input;
pub mod output;
pub mod readc;

pub use input::{InputPath, StagingBuffer, StagingState};
pub use output::OutputPath;
pub use readc::CharInput;
