//! Integration Test Organization
//!
//! This module organizes integration tests into focused areas:
//!
//! - `buffer/`: Ring lifecycle, wrap around and iteration order
//! - `statistics/`: Mean, variance, range detection and rescaling
//! - `rendering/`: Histogram drawing on `embedded-graphics` targets (`hist` feature)
//! - `scenarios/`: Realistic sampling workloads and property based checks

pub mod scenarios;
