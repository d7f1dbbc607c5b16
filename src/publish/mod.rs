//! Publish step invocation
//!
//! Renders the configured command template for a resolved docs target and
//! runs it:
//! - `command` - template rendering and `DOCS_*` environment variables
//! - `executor` - the [CommandRunner] seam and its shell implementation

pub mod command;
pub mod executor;

pub use command::PublishCommand;
pub use executor::{CommandRunner, ShellRunner};
