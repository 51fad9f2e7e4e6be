//! Library components of the `ccw-export` binary.

#![deny(unsafe_code)]

pub mod export;
pub mod logging;
pub mod report;
pub mod types;
