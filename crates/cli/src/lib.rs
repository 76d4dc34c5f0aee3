//! Terminal helpers for the mural guide
//!
//! Status lines, headers, and formatting of counts, distances and colours.

pub mod output;
