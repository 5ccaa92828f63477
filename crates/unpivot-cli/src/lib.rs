//! Shared pieces of the unpivot CLI: logging setup and the
//! read-reshape-write pipeline.

pub mod logging;
pub mod pipeline;
