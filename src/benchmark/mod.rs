//! Timing harness for the compute strategies.
//!
//! [`time_strategy`] wraps a single strategy invocation with a monotonic
//! clock and reports microsecond resolution. [`bench_strategies`] is the
//! criterion counterpart driven by the `strategies` bench target.

use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::error::Result;
use crate::fma::Strategy;
use crate::vector::Vector;

/// A single wall-clock measurement of one strategy invocation
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// The strategy that was timed
    pub strategy: Strategy,
    /// Elapsed wall-clock time of the one invocation
    pub elapsed: Duration,
}

impl Measurement {
    /// Print the measurement as a human-readable line on stdout
    pub fn report(&self) {
        println!(
            "Elapsed time for {} is {} microseconds",
            self.strategy.name(),
            self.elapsed.as_micros()
        );
    }
}

/// Run `strategy` once over `input`, timed with a monotonic clock
///
/// No retries, no repetition: the measurement covers exactly one
/// invocation of [`Strategy::run`].
pub fn time_strategy(
    strategy: Strategy,
    input: &[f32],
    output: &mut [f32],
) -> Result<Measurement> {
    let start = Instant::now();
    strategy.run(input, output)?;
    Ok(Measurement {
        strategy,
        elapsed: start.elapsed(),
    })
}

/// Criterion comparison of the three strategies across buffer sizes
pub fn bench_strategies(c: &mut Criterion) {
    let sizes = [1024, 16384, 1048576];

    for &size in &sizes {
        let input = Vector::random_unit(size).expect("bench input allocation");
        let mut output = Vector::zeroed(size).expect("bench output allocation");

        let mut group = c.benchmark_group("fma_strategies");
        group.warm_up_time(Duration::from_secs(1));
        group.measurement_time(Duration::from_secs(3));
        group.sample_size(30);
        group.throughput(Throughput::Elements(size as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, _| {
                b.iter(|| strategy.run(input.as_slice(), output.as_mut_slice()))
            });
        }

        group.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_strategy_writes_output() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let input = Vector::random_unit(32)?;
        let mut output = Vector::zeroed(32)?;

        let measurement =
            time_strategy(Strategy::Scalar, input.as_slice(), output.as_mut_slice())?;

        assert_eq!(measurement.strategy, Strategy::Scalar);
        for (x, y) in input.as_slice().iter().zip(output.as_slice()) {
            assert_eq!(*y, x * x + x);
        }
        Ok(())
    }

    #[test]
    fn test_time_strategy_propagates_length_mismatch() {
        let input = [1.0f32; 4];
        let mut output = [0.0f32; 2];
        assert!(time_strategy(Strategy::Portable, &input, &mut output).is_err());
    }
}
