use anyhow::Result;
use config::{Config, OutputFormat};
use telemetry::init_tracing;
use tracing::info;
use wind_power_curve::{config, demo, telemetry};

/// Speeds tabulated for the configured curve, 0 to 26 m/s
const TABLE_SPEEDS: std::ops::RangeInclusive<u32> = 0..=26;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    cfg.validate()?;

    info!(
        rated_power = cfg.turbine.rated_power,
        cut_in = cfg.turbine.cut_in_wind_speed,
        rated = cfg.turbine.rated_wind_speed,
        cut_out = cfg.turbine.cut_out_wind_speed,
        interpolation = %cfg.interpolation,
        "running power curve examples"
    );

    let outcomes = demo::run(&cfg.turbine);

    match cfg.output {
        OutputFormat::Json => {
            for outcome in &outcomes {
                println!("{}", serde_json::to_string(outcome)?);
            }
        }
        OutputFormat::Text => {
            for (i, outcome) in outcomes.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("--- Example {}: {} ---", i + 1, outcome.label);
                println!("{outcome}");
            }

            let curve = cfg.power_curve();
            println!();
            println!("--- Configured curve ({}) ---", curve.mode);
            for (speed, power) in curve.sample(TABLE_SPEEDS.map(f64::from)) {
                println!("{speed:>5.1} m/s  {power:>8.2}  {}", curve.region_at(speed));
            }
        }
    }

    Ok(())
}
