/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of `f32` samples in the input buffer
    pub data_size: usize,

    /// Maximum absolute difference for two results to count as equal
    pub tolerance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_size: 10_000_000,
            tolerance: 1e-6,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of samples to generate and compute over
    pub fn data_size(mut self, size: usize) -> Self {
        self.data_size = size;
        self
    }

    /// Set the comparison tolerance
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}
