//! Daily-value hydrograph state.
//!
//! `DvState` holds the fetched series, the current selection and the cursor
//! and brush offsets. It changes only through [`DvState::reduce`]. Derived
//! data (points, segments, cursor marker) is read through [`DvSelectors`],
//! which caches the expensive derivations keyed on the inputs they read.

pub mod flood;
pub mod memo;
pub mod selectors;
pub mod state;

pub use selectors::DvSelectors;
pub use state::{DvAction, DvState};
