//! HTTP Header Field Toolkit.
//!
//! A [`Header`] stores the raw values observed for a single header name, one
//! group per observed case variant of that name, and supports rendering,
//! search, normalization and `Link`-style parameter parsing. [`Headers`] is
//! the collection a client keeps per message, keyed case-insensitively.
#![warn(missing_debug_implementations)]

mod matches;
mod log;

mod error;
mod name;
mod value;
mod header;
mod iter;
mod params;
mod map;

pub use error::HeaderError;
pub use name::{HeaderName, IntoHeaderName};
pub use value::{HeaderValue, IntoSlot, Slot};
pub use header::Header;
pub use iter::{Raw, Values};
pub use params::{Params, parse_params};
pub use map::Headers;

#[cfg(test)]
mod test;
