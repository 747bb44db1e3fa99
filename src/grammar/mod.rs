//! The grammar matcher (§4.3): pattern-atom language, the pattern-list
//! catalogue, and the list-in-order matching driver.

pub mod definitions;
pub mod pattern;
mod matcher;

pub use matcher::parse_tokens;
