use std::env;

use chrono::Local;
use plotters::prelude::*;

use trajectory_rust::core::trajectory::TrajectoryModel;
use trajectory_rust::core::units::Elapsed;
use trajectory_rust::core::window::axis_window_for_points;

const CHART_WIDTH: u32 = 1280;
const CHART_HEIGHT: u32 = 640;
const TRAJECTORY_SAMPLES: usize = 320;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn output_file_name(angle_deg: f64, speed_mps: f64, stamp: &str) -> String {
    format!("trajectory_{angle_deg:.0}deg_{speed_mps:.0}mps_{stamp}.png")
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} <angle_deg> <speed_mps> [duration_ms]");
    println!();
    println!("Omitting duration_ms plots until the projectile returns to launch height.");
    println!();
    println!("Examples:");
    println!("  {program} 45 100");
    println!("  {program} 30 80 2500");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }
    if args.len() < 3 || args.len() > 4 {
        print_usage(&args[0]);
        return Err("Expected 2 or 3 arguments: <angle_deg> <speed_mps> [duration_ms].".to_string());
    }

    let angle_deg = parse_f64(&args[1], "angle")?;
    let speed_mps = parse_f64(&args[2], "speed")?;

    let model = TrajectoryModel::new(speed_mps, angle_deg)?;

    let duration = match args.get(3) {
        Some(raw) => Elapsed::from_millis(parse_f64(raw, "duration")?),
        None => Elapsed::from_secs(model.flight_time_secs()),
    };
    if duration.as_millis() <= 0.0 {
        return Err(format!(
            "Nothing to plot: flight duration is {} ms. Pass an explicit duration_ms.",
            duration.as_millis()
        ));
    }

    let points = model.sample_flight(duration, TRAJECTORY_SAMPLES);
    let (x_span, y_span) = axis_window_for_points(&points);

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let out_path = output_file_name(angle_deg, speed_mps, &stamp);

    let root = BitMapBackend::new(&out_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to clear chart background: {e}"))?;

    let caption = format!("Trajectory: {angle_deg}° at {speed_mps} m/s");
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(18)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(|e| format!("Failed to build chart axes: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Failed to draw chart mesh: {e}"))?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|e| format!("Failed to draw trajectory series: {e}"))?;

    root.present()
        .map_err(|e| format!("Failed to write '{out_path}': {e}"))?;

    println!("Wrote {out_path}");
    println!(
        "Flight window: {:.3} s, {} samples",
        duration.as_secs_rounded(),
        TRAJECTORY_SAMPLES + 1
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::output_file_name;

    #[test]
    fn file_name_carries_launch_parameters_and_stamp() {
        let name = output_file_name(45.0, 100.0, "20260831_120000");
        assert_eq!(name, "trajectory_45deg_100mps_20260831_120000.png");
    }
}
