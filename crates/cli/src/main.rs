#![deny(unsafe_code)]
//! CLI binary for stamp.
//!
//! Subcommands:
//! - `sequence <statement>`: print the values a parameter sequence produces
//! - `polygon <x,y>...`: print area, perimeter, centroid, and bounds
//! - `pickers`: list picker and accumulator names

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use stamp_core::params::param_opt_usize;
use stamp_core::{Accumulator, Picker, Point, Polygon, SequenceConfig};
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "stamp", about = "Geometry and parameter sequences for generative art")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first N values of a sequence.
    Sequence {
        /// Statement such as "shuffle 1-8", "yoyo 0, 45, 90", or "cycle (3) 10,20 add".
        #[arg(required_unless_present = "params", conflicts_with = "params")]
        statement: Option<String>,

        /// Sequence as JSON: {"values": [...], "picker": "...", "seed": N,
        /// "max_passes": N, "accumulator": "...", "count": N}.
        #[arg(long)]
        params: Option<String>,

        /// Number of values to print.
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// PRNG seed; overrides a seed given in --params.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print metrics of a polygon given as "x,y" vertices.
    Polygon {
        /// Vertices in traversal order, e.g. 0,0 1,0 1,1 0,1. Vertices swallow
        /// every argument after them, so give options first.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        points: Vec<String>,

        /// Offset applied first, as "dx,dy".
        #[arg(long, allow_hyphen_values = true)]
        translate: Option<String>,

        /// Rotation in radians applied after translating.
        #[arg(long, allow_negative_numbers = true)]
        rotate: Option<f64>,

        /// Rotate about the polygon's centroid instead of the origin.
        #[arg(long, requires = "rotate")]
        about_centroid: bool,
    },
    /// List picker and accumulator names.
    Pickers,
}

/// Parses "x,y" into a point.
fn parse_point(s: &str) -> Result<Point, CliError> {
    let bad = || CliError::Input(format!("expected \"x,y\", got \"{s}\""));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse::<f64>().map_err(|_| bad())?;
    let y = y.trim().parse::<f64>().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

fn run_sequence(
    json: bool,
    statement: Option<String>,
    params: Option<String>,
    count: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let (config, count) = match (statement, params) {
        (Some(stmt), _) => (SequenceConfig::from_statement(&stmt, seed)?, count),
        (None, Some(raw)) => {
            let params: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let mut config = SequenceConfig::from_json(&params)?;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let count = param_opt_usize(&params, "count")?.unwrap_or(count);
            (config, count)
        }
        (None, None) => return Err(CliError::Input("give a statement or --params".into())),
    };

    let sequence = config.build()?;
    let resolved_seed = sequence.sequence().seed();
    let values: Vec<f64> = sequence.take(count).collect();
    tracing::info!(
        picker = %config.picker,
        accumulator = %config.accumulator,
        seed = resolved_seed,
        count,
        "generated sequence"
    );

    if json {
        let info = serde_json::json!({
            "picker": config.picker,
            "accumulator": config.accumulator,
            "max_passes": config.max_passes,
            "seed": resolved_seed,
            "values": values,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        let line: Vec<String> = values.iter().map(f64::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_polygon(
    json: bool,
    points: &[String],
    translate: Option<String>,
    rotate: Option<f64>,
    about_centroid: bool,
) -> Result<(), CliError> {
    let mut polygon: Polygon = points
        .iter()
        .map(|s| parse_point(s))
        .collect::<Result<_, _>>()?;

    if let Some(offset) = translate {
        let offset = parse_point(&offset)?;
        polygon = polygon.translate(offset.x, offset.y);
    }
    if let Some(angle) = rotate {
        let origin = if about_centroid {
            polygon.centroid()
        } else {
            Point::ORIGIN
        };
        polygon = polygon.rotate_about(angle, origin);
    }

    let bounds = polygon.bounds()?;
    let centroid = polygon.centroid();
    tracing::debug!(vertices = polygon.len(), "measured polygon");

    if json {
        let info = serde_json::json!({
            "points": polygon.points(),
            "area": polygon.area(),
            "perimeter": polygon.perimeter(),
            "centroid": centroid,
            "bounds": bounds,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("area:      {}", polygon.area());
        println!("perimeter: {}", polygon.perimeter());
        println!("centroid:  ({}, {})", centroid.x, centroid.y);
        let (x, y, w, h) = bounds.as_tuple();
        println!("bounds:    x={x} y={y} width={w} height={h}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Pickers => {
            let pickers = Picker::list_names();
            let accumulators = Accumulator::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "pickers": pickers,
                    "accumulators": accumulators,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("pickers:      {}", pickers.join(" "));
                println!("accumulators: {}", accumulators.join(" "));
            }
            Ok(())
        }
        Command::Sequence {
            statement,
            params,
            count,
            seed,
        } => run_sequence(cli.json, statement, params, count, seed),
        Command::Polygon {
            points,
            translate,
            rotate,
            about_centroid,
        } => run_polygon(cli.json, &points, translate, rotate, about_centroid),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
