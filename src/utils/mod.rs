//! Input limits and validation helpers shared by the parsers and the CLI.

pub mod validation;
