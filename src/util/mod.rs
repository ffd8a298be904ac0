//! Shared utilities.

pub mod frame_timing;
