//! Scenario Integration Tests
//!
//! Realistic usage of the ring as a rolling window over sensor samples.
