//! Integration with `rand` (v0.8) crate.

use super::{EntropySource, Generator};
use crate::EntropyError;
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// Failures reported by [`RngCore::try_fill_bytes`] surface as [`EntropyError`]s.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.0.try_fill_bytes(dest).map_err(EntropyError::from)
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate, reading time from the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate_v7()?);
    /// # Ok::<(), uuid47::EntropyError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_sources(Adapter(rng), super::StdSystemTime)
    }
}
