//! Moody chart data.
//!
//! Evaluates the friction factor over a Reynolds number × relative roughness
//! grid in both explicit and implicit modes and prints the result as CSV,
//! one row per grid point, ready for a log-log plot with one curve per
//! roughness value. The `regime` column allows shading the transition band.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example moody_chart > moody.csv
//! ```

use ndarray::{Array1, Axis};
use pipe_friction::{
    models::fluid::pipe_friction::{FrictionConfig, FrictionInput, friction_factor},
    support::friction::FlowRegime,
};
use tracing_subscriber::EnvFilter;

const ROUGHNESS: [f64; 10] = [
    0.0, 1.0e-6, 1.0e-5, 1.0e-4, 5.0e-4, 1.0e-3, 5.0e-3, 0.01, 0.03, 0.05,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let re = Array1::logspace(10.0, 2.5, 8.0, 200).insert_axis(Axis(1));
    let rel_roughness = Array1::from(ROUGHNESS.to_vec());
    let input = FrictionInput::new(re.clone()).with_roughness(rel_roughness);

    let explicit = friction_factor(
        &input,
        &FrictionConfig {
            implicit: false,
            ..FrictionConfig::default()
        },
    )?;
    let config = FrictionConfig::default();
    let implicit = friction_factor(&input, &config)?;

    println!("re,regime,rel_roughness,f_explicit,f_implicit");
    for (i, &re) in re.iter().enumerate() {
        let regime = match FlowRegime::classify(re, &config.transition) {
            Some(FlowRegime::Laminar) => "laminar",
            Some(FlowRegime::Transitional) => "transitional",
            Some(FlowRegime::Turbulent) => "turbulent",
            None => "undefined",
        };
        for (j, rr) in ROUGHNESS.iter().enumerate() {
            println!(
                "{re:.6e},{regime},{rr:.1e},{:.6e},{:.6e}",
                explicit[[i, j]],
                implicit[[i, j]]
            );
        }
    }

    Ok(())
}
