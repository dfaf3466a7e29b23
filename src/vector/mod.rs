//! Owned sample buffers for the benchmark kernels.
//!
//! A [`Vector`] is a thin wrapper over `Vec<T>` whose constructors reserve
//! memory fallibly, so an oversized run surfaces [`Error::Allocation`]
//! instead of aborting the process.
//!
//! [`Error::Allocation`]: crate::error::Error::Allocation

use crate::error::Result;

/// A heap-allocated buffer of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Create a new vector with a specific length, every element set to `value`
    ///
    /// # Examples
    /// ```
    /// use fma_bench::vector::Vector;
    ///
    /// let v = Vector::with_length(4, 0.0f32)?;
    /// assert_eq!(v.as_slice(), &[0.0; 4]);
    /// # Ok::<(), fma_bench::error::Error>(())
    /// ```
    pub fn with_length(length: usize, value: T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(length)?;
        data.resize(length, value);
        Ok(Self { data })
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the underlying data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get a mutable reference to the underlying data
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl Vector<f32> {
    /// Create a zero-filled output buffer of the given length
    pub fn zeroed(length: usize) -> Result<Self> {
        Self::with_length(length, 0.0)
    }

    /// Generate a vector of uniform random samples in `[0, 1)`
    ///
    /// Uses the thread-local RNG, so values differ between runs.
    pub fn random_unit(length: usize) -> Result<Self> {
        use rand::Rng;
        let mut data = Vec::new();
        data.try_reserve_exact(length)?;
        let mut rng = rand::thread_rng();
        data.extend((0..length).map(|_| rng.gen_range(0.0..1.0f32)));
        Ok(Self { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_length() -> Result<()> {
        let v = Vector::with_length(3, 1.5f32)?;
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1.5, 1.5, 1.5]);
        Ok(())
    }

    #[test]
    fn test_zeroed() -> Result<()> {
        let v = Vector::zeroed(8)?;
        assert_eq!(v.as_slice(), &[0.0; 8]);
        Ok(())
    }

    #[test]
    fn test_empty_vector() -> Result<()> {
        let v = Vector::<f32>::with_length(0, 0.0)?;
        assert!(v.is_empty());
        assert_eq!(v.as_slice(), &[] as &[f32]);
        Ok(())
    }

    #[test]
    fn test_random_unit_range() -> Result<()> {
        let v = Vector::random_unit(256)?;
        assert_eq!(v.len(), 256);
        assert!(v.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
        Ok(())
    }

    #[test]
    fn test_mutable_access() -> Result<()> {
        let mut v = Vector::zeroed(2)?;
        v.as_mut_slice()[1] = 4.0;
        assert_eq!(v.as_slice(), &[0.0, 4.0]);
        Ok(())
    }
}
