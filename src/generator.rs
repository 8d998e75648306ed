//! UUID generator and the sources of randomness and time it reads from.

use crate::{EntropyError, Uuid};

pub mod with_rand08;

/// A source of cryptographically strong random bytes.
pub trait EntropySource {
    /// Fills `dest` entirely with random data, or fails without retrying.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// A source of the current wall-clock time.
pub trait TimeSource {
    /// Returns the number of milliseconds elapsed since the Unix epoch.
    fn unix_ts_ms(&mut self) -> u64;
}

/// [`EntropySource`] backed by the operating system's random number generator.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        rand::RngCore::try_fill_bytes(&mut rand::rngs::OsRng, dest).map_err(EntropyError::from)
    }
}

/// [`TimeSource`] backed by [`std::time::SystemTime`].
///
/// A system clock set before the Unix epoch reads as zero.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Represents a UUID generator that produces random (version 4) and time-ordered (version 7)
/// UUIDs from an [`EntropySource`] and a [`TimeSource`].
///
/// The generator keeps no state between calls other than the sources themselves. Version 7 UUIDs
/// sort by their millisecond timestamp; UUIDs sharing a millisecond are ordered by their random
/// bits, not by generation order.
///
/// # Examples
///
/// ```rust
/// use uuid47::Generator;
///
/// let mut g = Generator::new();
/// println!("{}", g.generate_v4()?);
/// println!("{}", g.generate_v7()?);
/// # Ok::<(), uuid47::EntropyError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R = OsEntropy, T = StdSystemTime> {
    /// The source of random bits.
    rng: R,

    /// The source of the timestamp embedded in version 7 UUIDs.
    time_source: T,
}

impl Generator {
    /// Creates a generator that reads from the operating system's random number generator and
    /// the system clock.
    pub const fn new() -> Self {
        Self::with_sources(OsEntropy, StdSystemTime)
    }
}

impl<R, T> Generator<R, T> {
    /// Creates a generator from custom entropy and time sources.
    pub const fn with_sources(rng: R, time_source: T) -> Self {
        Self { rng, time_source }
    }
}

impl<R: EntropySource, T> Generator<R, T> {
    /// Generates a new UUIDv4 object.
    ///
    /// All bits other than the version (`0100`) and variant (`10`) fields are random.
    pub fn generate_v4(&mut self) -> Result<Uuid, EntropyError> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill(&mut bytes).map_err(|err| {
            tracing::debug!(error = %err, "could not generate UUIDv4");
            err
        })?;
        bytes[6] = bytes[6] & 0x0f | 0x40;
        bytes[8] = bytes[8] & 0x3f | 0x80;
        Ok(Uuid::from(bytes))
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// The low 48 bits of `unix_ts_ms` fill the first six bytes in big-endian order. Byte 6 holds
    /// the version (`0111`) over zero bits, byte 7 is zero, and bytes 8 to 15 are random except
    /// for the variant (`10`) field.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64) -> Result<Uuid, EntropyError> {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&(unix_ts_ms << 16).to_be_bytes());
        bytes[6] = bytes[6] & 0x0f | 0x70;
        self.rng.try_fill(&mut bytes[8..]).map_err(|err| {
            tracing::debug!(error = %err, unix_ts_ms, "could not generate UUIDv7");
            err
        })?;
        bytes[8] = bytes[8] & 0x3f | 0x80;
        Ok(Uuid::from(bytes))
    }
}

impl<R: EntropySource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate_v7(&mut self) -> Result<Uuid, EntropyError> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.generate_v7_core(unix_ts_ms)
    }
}
