use std::env;
use std::io::{self, Write};

use trajectory_rust::core::trajectory::TrajectoryModel;
use trajectory_rust::core::units::Elapsed;

#[derive(Clone, Copy, Debug)]
struct Query {
    angle_deg: f64,
    speed_mps: f64,
    elapsed_ms: f64,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_query_from_user() -> Result<Query, String> {
    Ok(Query {
        angle_deg: read_f64("Angle (degrees): ")?,
        speed_mps: read_f64("Launch speed (m/s): ")?,
        elapsed_ms: read_f64("Elapsed time (ms): ")?,
    })
}

fn get_query_from_args(args: &[String]) -> Result<Query, String> {
    if args.len() != 4 {
        return Err(
            "Expected exactly 3 arguments: <angle_deg> <speed_mps> <elapsed_ms>.".to_string(),
        );
    }

    Ok(Query {
        angle_deg: parse_f64(&args[1], "angle")?,
        speed_mps: parse_f64(&args[2], "speed")?,
        elapsed_ms: parse_f64(&args[3], "elapsed time")?,
    })
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <angle_deg> <speed_mps> <elapsed_ms>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 45 100 1000");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let query = if args.len() == 1 {
        get_query_from_user()?
    } else {
        get_query_from_args(&args)?
    };

    let model = TrajectoryModel::new(query.speed_mps, query.angle_deg)?;
    let elapsed = Elapsed::from_millis(query.elapsed_ms);

    println!("\nAt t = {:.3} s:", elapsed.as_secs_rounded());
    println!("  Horizontal position: {:.4} m", model.horizontal_position(elapsed));
    println!("  Vertical position:   {:.4} m", model.vertical_position(elapsed));
    println!("  Vertical velocity:   {:.4} m/s", model.vertical_velocity(elapsed));
    println!("  Horizontal reading:  {:.4}", model.horizontal_velocity(elapsed));
    println!("  Speed reading:       {:.3}", model.speed_reading(elapsed));

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
