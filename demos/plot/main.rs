//! Curve plotter — tessellates a built-in curve and prints the segments as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example plot --features serde                    # default (circle)
//! cargo run --example plot --features serde -- spiral
//! cargo run --example plot --features serde -- lissajous '{"resolution": 2.0, "material": 1}'
//! ```
//!
//! Each segment is printed as `[material, x, y, dx, dy, nx, ny, dnx, dny]`.

use std::error::Error;
use std::f64::consts::TAU;

use curve_ribbon::math::Point2;
use curve_ribbon::{ParametricCurve, TessellateCurve, TessellationParams};

/// Scene center, in scene units.
const CX: f64 = 960.0;
const CY: f64 = 540.0;

fn circle(t: f64) -> Point2 {
    let a = TAU * t;
    Point2::new(CX + 300.0 * a.cos(), CY + 300.0 * a.sin())
}

fn spiral(t: f64) -> Point2 {
    let a = 4.0 * TAU * t;
    let r = 20.0 + 380.0 * t;
    Point2::new(CX + r * a.cos(), CY + r * a.sin())
}

fn lissajous(t: f64) -> Point2 {
    let a = TAU * t;
    Point2::new(CX + 400.0 * (3.0 * a).sin(), CY + 300.0 * (2.0 * a).cos())
}

fn pick_curve(name: &str) -> Option<&'static dyn ParametricCurve> {
    match name {
        "circle" => Some(&circle),
        "spiral" => Some(&spiral),
        "lissajous" => Some(&lissajous),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for curve_ribbon.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curve_ribbon=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("plot=info".parse().unwrap_or_default())
        .add_directive("curve_ribbon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "circle".to_owned());
    let curve = pick_curve(&name)
        .ok_or_else(|| format!("unknown curve '{name}' (expected circle, spiral or lissajous)"))?;

    let params: TessellationParams = match args.next() {
        Some(json) => serde_json::from_str(&json)?,
        None => TessellationParams::default(),
    };
    tracing::info!(curve = %name, ?params, "plotting");

    let segments = TessellateCurve::new(params).execute(curve)?;
    tracing::info!(segments = segments.len(), "done");

    println!("{}", serde_json::to_string(&segments)?);
    Ok(())
}
