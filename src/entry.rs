//! Entry point functions backed by the operating system's random number generator.

use crate::{EntropyError, Generator, Uuid};

/// Generates a UUIDv7 object.
///
/// The first 48 bits carry the current Unix time in milliseconds, so UUIDs created in different
/// milliseconds sort by creation time. No state is shared between calls, and UUIDs created within
/// the same millisecond are ordered randomly.
///
/// # Errors
///
/// Returns an [`EntropyError`] if the operating system cannot supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid47::new_v7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7000-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// println!("{:?}", uuid.timestamp()); // creation time
///
/// let uuid_string: String = uuid47::new_v7()?.to_string();
/// # Ok::<(), uuid47::EntropyError>(())
/// ```
pub fn new_v7() -> Result<Uuid, EntropyError> {
    Generator::new().generate_v7()
}

/// Generates a UUIDv4 object.
///
/// # Errors
///
/// Returns an [`EntropyError`] if the operating system cannot supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid47::new_v4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuid47::EntropyError>(())
/// ```
pub fn new_v4() -> Result<Uuid, EntropyError> {
    Generator::new().generate_v4()
}
