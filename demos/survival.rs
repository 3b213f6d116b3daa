use flashoer::*;

fn main() -> Result<(), FlashError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let lq = LQParameters::new(0.12, 0.027);
    let doses: Vec<f64> = (0..250).map(|i| i as f64 * 0.1).collect();

    // Normoxic and hypoxic cells, conventional and FLASH dose rates
    let conditions = [
        ("normoxic, conventional", 0.2, 0.2333),
        ("normoxic, FLASH", 0.2, 600.0),
        ("hypoxic, conventional", 0.016, 0.2333),
        ("hypoxic, FLASH", 0.016, 600.0),
    ];

    for config in [
        ModelConfig::concentration_dependent(),
        ModelConfig::concentration_independent(),
    ] {
        println!("# {} depletion", config.regime);
        for (label, o2, dose_rate) in conditions {
            let exposures: Vec<Exposure> = doses
                .iter()
                .map(|&dose| Exposure::new(dose, dose_rate, o2))
                .collect();
            let survival = predict_survival(&exposures, &lq, &config)?;

            // Surviving fraction every 4 Gy
            let row: Vec<String> = survival
                .iter()
                .step_by(40)
                .map(|s| format!("{:.3e}", s))
                .collect();
            println!("{}\t{}", label, row.join("\t"));
        }
    }

    // Hypoxic cells across dose rates
    let o2 = 0.016;
    let config = ModelConfig::default();
    println!("# {}% O2 by dose rate", o2 * 100.0);
    for dose_rate in [0.1, 1.0, 10.0, 100.0, 1000.0, 1e10] {
        let exposures: Vec<Exposure> = doses
            .iter()
            .map(|&dose| Exposure::new(dose, dose_rate, o2))
            .collect();
        let survival = predict_survival(&exposures, &lq, &config)?;

        let row: Vec<String> = survival
            .iter()
            .step_by(40)
            .map(|s| format!("{:.3e}", s))
            .collect();
        println!("{} Gy/s\t{}", dose_rate, row.join("\t"));
    }

    Ok(())
}
