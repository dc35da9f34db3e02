//! Library side of the hospital directory cleaner CLI.

pub mod logging;
pub mod pipeline;
