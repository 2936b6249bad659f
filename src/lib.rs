//! Blank, printable wall calendars typeset with LaTeX.
//!
//! For a given year every month gets its own landscape page with a seven
//! column grid of numbered day cells. All pages share the same height, no
//! matter how many week rows a month needs.

pub mod calendar;
pub mod config;
pub mod document;
pub mod error;
pub mod grid;
pub mod render;
