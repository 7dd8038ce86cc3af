//! Browser-side utility helpers.

pub mod storage;
