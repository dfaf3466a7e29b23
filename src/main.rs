use fma_bench::benchmark::time_strategy;
use fma_bench::fma::portable;
use fma_bench::{compare_outputs, Config, Result, Strategy, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();

    println!("Portable batch width is {} x f32", portable::LANES);
    println!(
        "AVX2/FMA intrinsics are {}",
        if Strategy::Avx2.is_supported() {
            "available"
        } else {
            "unavailable, using the scalar fallback"
        }
    );

    let input = Vector::random_unit(config.data_size)?;
    let mut scalar_out = Vector::zeroed(config.data_size)?;
    let mut avx2_out = Vector::zeroed(config.data_size)?;
    let mut portable_out = Vector::zeroed(config.data_size)?;

    for (strategy, output) in [
        (Strategy::Scalar, &mut scalar_out),
        (Strategy::Avx2, &mut avx2_out),
        (Strategy::Portable, &mut portable_out),
    ] {
        let measurement = time_strategy(strategy, input.as_slice(), output.as_mut_slice())?;
        measurement.report();
    }

    let summary = compare_outputs(
        scalar_out.as_slice(),
        avx2_out.as_slice(),
        portable_out.as_slice(),
        config.tolerance,
    )?;

    println!(
        "total mismatched result(s) is {} out of {}",
        summary.mismatches, summary.total
    );

    Ok(())
}
