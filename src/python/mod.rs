//! Interpreter discovery and isolated-environment operations
//!
//! The provisioner and the GPU installer both go through this module: it
//! finds a bootstrap interpreter on the search path, creates the project
//! venv, and drives pip inside it. All invocations block until the
//! subprocess exits; exit statuses are surfaced verbatim, never retried.

pub mod interpreter;
pub mod venv;

pub use interpreter::find_python;
pub use venv::Venv;
