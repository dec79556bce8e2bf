//! Library components of the `gate-predictor` binary.

pub mod logging;
pub mod render;
