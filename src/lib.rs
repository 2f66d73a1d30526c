#![no_std]

//! A structural decoder for Garmin's Flexible and Interoperable Data
//! Transfer protocol.
//!
//! Pannier reads an activity document into a plain, fully-owned tree: the
//! file header, then every definition and data record in stream order.
//! Field values are exposed as unsigned integers widened to sixty-four
//! bits (or raw bytes, for developer fields), leaving profile semantics
//! such as unit scaling to the caller.
//!
//! Most users should begin with [`decode_slice`] or, with the `std`
//! feature, [`decode_reader`]. Both drive the codecs in [`header`],
//! [`definition`], and [`data`] over the supplied bytes; a custom byte
//! supplier can be plugged into [`decode`] through the [`Source`] trait.
//!
//! ```
//! let data = std::fs::read("afternoon-ride.fit")?;
//! let document = pannier::decode_slice(&data)?;
//!
//! for record in &document.records {
//!     if let pannier::Record::Data { header, message } = record {
//!         println!("{}: {:?}", header.local_message(), message.values);
//!     }
//! }
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod data;
pub mod decode;
pub mod definition;
pub mod header;
pub mod message;

#[cfg(feature = "std")]
pub use decode::decode_reader;
pub use decode::{Document, Error, Record, Source, decode, decode_slice};
