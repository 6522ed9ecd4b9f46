//! Command implementations for OxiGIF CLI.

pub mod detect;
pub mod extract;
pub mod info;

pub use detect::cmd_detect;
pub use extract::{ExtractOptions, cmd_extract};
pub use info::cmd_info;
pub use test::cmd_test;
