//! Data processing for daily-value hydrographs.
//!
//! This crate turns raw observation series and cyclical statistics into
//! forms a chart renderer can draw directly: line segments split on gaps and
//! approval changes, a statistical step line pinned to the display window,
//! and the cursor marker position.

pub mod cursor;
pub mod legend;
pub mod points;
pub mod scale;
pub mod segments;
pub mod statistics;
pub mod window;
