//! Interactive text shell over the stockroom inventory.
//!
//! A thin I/O loop: it collects raw values, builds products, calls the
//! inventory and snapshot store, and renders results and errors as text.

pub mod config;
pub mod shell;

pub use config::CliArgs;
pub use shell::{Shell, ShellError};
