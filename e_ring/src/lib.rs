#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

//! A no_std append only ring buffer, when full new element replace oldest one.
//!
//! On top of the [`Ring`] the crate provides mean/variance helpers, a single pass
//! [`FindRange`] and a [`RescaleIterator`] mapping the stored values into another
//! [`Range`]. With the `hist` feature enabled, `hist::Hist` draws the ring as a
//! column histogram on any `embedded-graphics` display.
//!
//! # Example
//! ```
//! use e_ring::{FindRange, Ring};
//!
//! let mut ring: Ring<i16, 4> = Ring::new();
//! for sample in [3, 1, 4, 1, 5] {
//!     ring.append(sample);
//! }
//!
//! // the oldest sample (3) has been replaced
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1, 4, 1, 5]);
//! assert_eq!(ring.avg(), Some(2.75));
//!
//! let range = ring.range().unwrap();
//! assert_eq!((range.min, range.max), (1, 5));
//! ```

pub mod rescale;
pub mod ring;
mod stats;

#[cfg(feature = "hist")]
pub mod hist;

// Re-export commonly used types
pub use rescale::{FindRange, Range, RangeError, RescaleIterator};
pub use ring::{Ring, RingIterator};
