//! Port traits defining external boundaries.
//!
//! The parser itself does no I/O. Running odo and reading captured
//! documents happen behind these traits so they can be recorded and
//! replayed. Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{ShellExecutor, ShellOutput};
