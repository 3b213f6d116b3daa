//! Oxygen concentration against irradiation time for a range of dose rates,
//! printed as tab separated columns.

use flashoer::*;
use ndarray::Array1;

fn main() -> Result<(), FlashError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let baseline = 0.05;
    let config = ModelConfig::default();

    // 0.1 to 100 Gy/s in half decades, 1e-7 to 1e3 s
    let dose_rates: Vec<f64> = (0..=6).map(|i| 10f64.powf(-1.0 + 0.5 * i as f64)).collect();
    let times = Array1::logspace(10.0, -7.0, 3.0, 401);

    let curves = dose_rates
        .iter()
        .map(|&dose_rate| oxygen_curve_array(&times, dose_rate, baseline, &config))
        .collect::<Result<Vec<_>, _>>()?;

    print!("time_s");
    for dose_rate in &dose_rates {
        print!("\t{:.3} Gy/s", dose_rate);
    }
    println!();

    for (i, t) in times.iter().enumerate() {
        print!("{:.3e}", t);
        for curve in &curves {
            print!("\t{:.6}", curve[i]);
        }
        println!();
    }

    Ok(())
}
