//! Output formatting for subnet results.
//!
//! - [`print_result`] - labeled terminal table with colors
//! - [`print_json`] - JSON rendering via serde

mod json;
mod terminal;

pub use json::{print_json, to_json};
pub use terminal::print_result;
