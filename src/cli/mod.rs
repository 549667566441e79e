//! Command Line Interface (CLI) layer for imgpipe.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) that turns a subcommand into a pipeline and streams
//! the result to a file or stdout.
//!
//! If you are embedding imgpipe into another application, prefer the
//! high-level `imgpipe::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
