//! Random (version 4) and time-ordered (version 7) UUIDs with canonical text and binary codecs
//!
//! ```rust
//! let uuid = uuid47::new_v7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7000-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! println!("{:?}", uuid.timestamp()); // e.g. Some(2022-05-05T12:14:04.889Z)
//!
//! let uuid = uuid47::new_v4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! # Ok::<(), uuid47::EntropyError>(())
//! ```
//!
//! Any 8-4-4-4-12 hexadecimal string or 16-byte slice is accepted regardless of its version:
//!
//! ```rust
//! use uuid47::Uuid;
//!
//! let uuid: Uuid = "123E4567-E89B-12D3-A456-426614174000".parse()?;
//! assert_eq!(uuid.version(), 1);
//! assert_eq!(uuid.to_string(), "123e4567-e89b-12d3-a456-426614174000");
//! assert_eq!(Uuid::from_slice(uuid.as_bytes())?, uuid);
//! # Ok::<(), uuid47::ParseError>(())
//! ```
//!
//! # Field and bit layout
//!
//! Version 7 UUIDs produced by this crate have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |         zero          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `zero` field is always zero.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 62 `rand` bits are filled with a cryptographically strong random number.
//!
//! No counter is kept, so UUIDs generated within the same millisecond are ordered by their random
//! bits only. Version 4 UUIDs are random except for the `ver` field set at `0100` and the `var`
//! field set at `10`.
//!
//! # Crate features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: enables conversions from and to the [`uuid`](https://crates.io/crates/uuid) crate's
//!   type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{EntropyError, Error, ParseError};

mod id;
pub use id::{Uuid, Variant, Version};

pub mod generator;
#[doc(inline)]
pub use generator::{EntropySource, Generator, TimeSource};

mod entry;
pub use entry::{new_v4, new_v7};
