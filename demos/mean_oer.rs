//! Mean OER (1..3 scale) for a 20 Gy exposure against baseline oxygen level

use flashoer::*;

fn main() -> Result<(), FlashError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dose = 20.0;
    let config = ModelConfig::default();
    let dose_rates = [0.1, 1.0, 10.0, 100.0];
    // 25% O2 down to ~0.008%
    let oxygen: Vec<f64> = (0..700).map(|i| 0.25 / 10f64.powf(0.005 * i as f64)).collect();

    print!("o2");
    for dose_rate in &dose_rates {
        print!("\t{} Gy/s", dose_rate);
    }
    println!();

    for &o2 in &oxygen {
        print!("{:.6}", o2);
        for &dose_rate in &dose_rates {
            print!("\t{:.4}", mean_oer(dose, dose_rate, o2, &config)?);
        }
        println!();
    }

    Ok(())
}
