//! Output rendering for the container entrypoint boundary.

pub mod shell;
