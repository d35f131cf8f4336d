//! Process-level services used by the command-line tool.

pub mod tracing_setup;
