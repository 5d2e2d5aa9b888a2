#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![doc = include_str!("../README.md")]

#[cfg(not(feature = "equivalent"))]
mod equivalent;
pub use equivalent::Equivalent;

pub mod hash_map;
pub use hash_map::HashMap;

#[cfg(feature = "serde")]
mod serde;
