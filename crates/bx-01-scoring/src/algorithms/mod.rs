//! Sequence algorithms over numeric series.

pub mod moving_average;
