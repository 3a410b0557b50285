//! # Flightcalc CLI
//!
//! Command-line front-end for the flight calculator. Runs a single
//! projection and exits: no prompts, no state.
//!
//! ## Usage
//!
//! ```text
//! flight_cli [velocity_kmh] [acceleration_ms2] [time_s] [distance_km] [fuel_kg] [burn_kgs]
//! ```
//!
//! Arguments are positional; any omitted argument falls back to the demo
//! scenario (10000 km/h, 3 m/s², 3600 s, 0 km, 5000 kg, 0.5 kg/s). On
//! success the three results print to stdout and the exit code is 0; on a
//! validation failure the error prints to stderr and the exit code is
//! non-zero.

use std::env;
use std::process::ExitCode;

use flight_core::{calculate, FlightError, FlightInput, FlightResult};

/// Default demo scenario, used for any argument not given on the command line.
const DEFAULTS: [(&str, f64); 6] = [
    ("initial_velocity_kmh", 10000.0),
    ("acceleration_ms2", 3.0),
    ("elapsed_time_s", 3600.0),
    ("initial_distance_km", 0.0),
    ("initial_fuel_kg", 5000.0),
    ("fuel_burn_rate_kgs", 0.5),
];

fn parse_args() -> FlightResult<FlightInput> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > DEFAULTS.len() {
        return Err(FlightError::invalid_input(
            "argv",
            args.len().to_string(),
            "expected at most 6 positional arguments",
        ));
    }

    let mut values = [0.0; 6];
    for (i, (field, default)) in DEFAULTS.iter().enumerate() {
        values[i] = match args.get(i) {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                FlightError::invalid_input(*field, raw.clone(), "must be a real number")
            })?,
            None => *default,
        };
    }

    Ok(FlightInput {
        label: "CLI run".to_string(),
        initial_velocity_kmh: values[0],
        acceleration_ms2: values[1],
        elapsed_time_s: values[2],
        initial_distance_km: values[3],
        initial_fuel_kg: values[4],
        fuel_burn_rate_kgs: values[5],
    })
}

fn run() -> FlightResult<()> {
    let input = parse_args()?;
    let outcome = calculate(&input)?;

    println!("Flightcalc - Spacecraft Kinematics Calculator");
    println!("=============================================");
    println!();
    println!("Input:");
    println!("  Velocity:     {:.1} km/h", input.initial_velocity_kmh);
    println!("  Acceleration: {:.2} m/s²", input.acceleration_ms2);
    println!("  Time:         {:.0} s", input.elapsed_time_s);
    println!("  Distance:     {:.1} km", input.initial_distance_km);
    println!("  Fuel:         {:.1} kg", input.initial_fuel_kg);
    println!("  Burn rate:    {:.3} kg/s", input.fuel_burn_rate_kgs);
    println!();
    println!("New Velocity:   {:.1} km/h", outcome.new_velocity_kmh);
    println!("New Distance:   {:.1} km", outcome.new_distance_km);
    println!("Remaining Fuel: {:.1} kg", outcome.remaining_fuel_kg);

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&outcome) {
        println!("{}", json);
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
