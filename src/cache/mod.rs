//! Demos of cache-line granularity and spatial locality.

pub mod line_stride;
pub mod locality;
pub mod pending;
