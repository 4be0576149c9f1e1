use macroquad::prelude::*;

use trajectory_rust::core::trajectory::TrajectoryModel;
use trajectory_rust::core::units::Elapsed;
use trajectory_rust::core::window::axis_window_for_points;

const INITIAL_WINDOW_WIDTH: i32 = 1280;
const INITIAL_WINDOW_HEIGHT: i32 = 720;
const MSAA_SAMPLES: i32 = 4;

const LEFT_MARGIN: f32 = 90.0;
const RIGHT_MARGIN: f32 = 30.0;
const TOP_MARGIN: f32 = 96.0;
const BOTTOM_MARGIN: f32 = 70.0;
const X_GRID_LINES: usize = 10;
const Y_GRID_LINES: usize = 8;

const PREVIEW_SAMPLES: usize = 240;
const ANGLE_KEY_RATE_DPS: f64 = 40.0;
const SPEED_KEY_RATE_MPS: f64 = 35.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Aiming,
    Flying,
    Landed,
}

struct FlightState {
    phase: Phase,
    launched_at: f64,
    trail: Vec<(f64, f64)>,
    status_line: String,
}

impl FlightState {
    fn new() -> Self {
        Self {
            phase: Phase::Aiming,
            launched_at: 0.0,
            trail: Vec::new(),
            status_line: "Ready".to_string(),
        }
    }

    fn launch(&mut self, now: f64) {
        self.phase = Phase::Flying;
        self.launched_at = now;
        self.trail.clear();
        self.trail.push((0.0, 0.0));
        self.status_line = "In flight".to_string();
    }

    fn reset(&mut self) {
        self.phase = Phase::Aiming;
        self.trail.clear();
        self.status_line = "Ready".to_string();
    }
}

fn world_to_screen(
    world: (f64, f64),
    world_max_x: f64,
    world_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> Vec2 {
    let plot_w = (right - left).max(1.0);
    let plot_h = (bottom - top).max(1.0);
    let x = left + ((world.0 / world_max_x.max(1.0)) as f32) * plot_w;
    let y = bottom - ((world.1 / world_max_y.max(1.0)) as f32) * plot_h;
    vec2(x, y)
}

fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

fn draw_axis_tick_labels(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    world_max_x: f64,
    world_max_y: f64,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = t as f64 * world_max_x;
        draw_text(&format!("{value:.0}"), x - 12.0, bottom + 22.0, 16.0, label_color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = t as f64 * world_max_y;
        draw_text(&format!("{value:.0}"), left - 44.0, y + 5.0, 16.0, label_color);
    }

    draw_text("Distance (m)", right - 110.0, bottom + 46.0, 18.0, label_color);
    draw_text("Height (m)", left + 8.0, top - 10.0, 18.0, label_color);
}

fn draw_path(
    points: &[(f64, f64)],
    world_max_x: f64,
    world_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    thickness: f32,
    color: Color,
) {
    for pair in points.windows(2) {
        let a = world_to_screen(pair[0], world_max_x, world_max_y, left, right, top, bottom);
        let b = world_to_screen(pair[1], world_max_x, world_max_y, left, right, top, bottom);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "TrajectoryRust Flight".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut angle_deg: f64 = 45.0;
    let mut speed_mps: f64 = 100.0;
    let mut state = FlightState::new();

    loop {
        let frame_dt = get_frame_time() as f64;
        let screen_w = screen_width();
        let screen_h = screen_height();

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        if state.phase == Phase::Aiming {
            if is_key_down(KeyCode::Up) {
                angle_deg = (angle_deg + ANGLE_KEY_RATE_DPS * frame_dt).min(90.0);
            }
            if is_key_down(KeyCode::Down) {
                angle_deg = (angle_deg - ANGLE_KEY_RATE_DPS * frame_dt).max(0.0);
            }
            if is_key_down(KeyCode::Right) {
                speed_mps += SPEED_KEY_RATE_MPS * frame_dt;
            }
            if is_key_down(KeyCode::Left) {
                speed_mps = (speed_mps - SPEED_KEY_RATE_MPS * frame_dt).max(0.0);
            }
        }

        let model = match TrajectoryModel::new(speed_mps, angle_deg) {
            Ok(model) => model,
            Err(err) => {
                state.status_line = err;
                next_frame().await;
                continue;
            }
        };

        if is_key_pressed(KeyCode::Space) && state.phase == Phase::Aiming {
            state.launch(get_time());
        }
        if is_key_pressed(KeyCode::R) {
            state.reset();
        }

        let mut elapsed = Elapsed::from_millis(0.0);
        if state.phase != Phase::Aiming {
            elapsed = Elapsed::from_secs(get_time() - state.launched_at);
        }

        if state.phase == Phase::Flying {
            let x = model.horizontal_position(elapsed);
            let y = model.vertical_position(elapsed);
            state.trail.push((x, y));
            if y <= 0.0 && elapsed.as_millis() > 0.0 {
                state.phase = Phase::Landed;
                state.status_line = format!("Landed after {:.3} s", elapsed.as_secs_rounded());
            }
        }

        let preview_duration = Elapsed::from_secs(model.flight_time_secs().max(1.0));
        let preview = model.sample_flight(preview_duration, PREVIEW_SAMPLES);

        let mut window_points = preview.clone();
        window_points.extend_from_slice(&state.trail);
        let (world_max_x, world_max_y) = axis_window_for_points(&window_points);

        clear_background(Color::new(0.96, 0.96, 0.97, 1.0));
        draw_grid(left, right, top, bottom, Color::from_rgba(222, 226, 231, 255));
        draw_axis_tick_labels(left, right, top, bottom, world_max_x, world_max_y);

        draw_path(
            &preview,
            world_max_x,
            world_max_y,
            left,
            right,
            top,
            bottom,
            1.0,
            Color::from_rgba(160, 170, 185, 255),
        );

        if state.phase != Phase::Aiming {
            draw_path(
                &state.trail,
                world_max_x,
                world_max_y,
                left,
                right,
                top,
                bottom,
                2.5,
                Color::from_rgba(26, 108, 224, 255),
            );
            if let Some(&last) = state.trail.last() {
                let dot =
                    world_to_screen(last, world_max_x, world_max_y, left, right, top, bottom);
                draw_circle(dot.x, dot.y, 6.0, Color::from_rgba(204, 64, 40, 255));
            }
        }

        let ink = Color::from_rgba(34, 40, 49, 255);
        draw_text("TrajectoryRust Flight", left, 34.0, 28.0, ink);
        draw_text(
            "Up/Down angle | Left/Right speed | Space launch | R reset",
            left,
            60.0,
            18.0,
            Color::from_rgba(105, 113, 124, 255),
        );
        draw_text(
            &format!(
                "Angle {angle_deg:.1} deg | Speed {speed_mps:.1} m/s | t = {:.3} s | Vy {:.2} m/s | Speed reading {:.3} | {}",
                elapsed.as_secs_rounded(),
                model.vertical_velocity(elapsed),
                model.speed_reading(elapsed),
                state.status_line,
            ),
            left,
            84.0,
            18.0,
            ink,
        );

        next_frame().await;
    }
}
