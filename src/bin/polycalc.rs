use std::fs;
use std::path::PathBuf;

use polygon_calc::api::{CalculationOutcome, CalculatorConfig, PolygonCalculator};
use polygon_calc::render::Renderer;

const USAGE: &str = "usage: polycalc --sides <n> --length <s> [--config <path>] [--json] [--png <path>]";

struct CliArgs {
    sides: String,
    length: String,
    config: Option<PathBuf>,
    json: bool,
    png: Option<PathBuf>,
}

fn main() {
    let _ = polygon_calc::telemetry::init_tracing_with_fallback("warn");
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when the polygon input was rejected.
fn run() -> Result<bool, String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            CalculatorConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => CalculatorConfig::default(),
    };

    match &args.png {
        Some(path) => run_with_png(&args, config, path),
        None => {
            let calculator =
                PolygonCalculator::new(polygon_calc::render::NullRenderer::default(), config)
                    .map_err(|err| err.to_string())?;
            calculate_and_report(calculator, &args).map(|(accepted, _)| accepted)
        }
    }
}

#[cfg(feature = "cairo-backend")]
fn run_with_png(
    args: &CliArgs,
    config: CalculatorConfig,
    path: &std::path::Path,
) -> Result<bool, String> {
    let width = i32::try_from(config.viewport.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(config.viewport.height).map_err(|err| err.to_string())?;
    let renderer = polygon_calc::render::CairoRenderer::new(width, height)
        .map_err(|err| err.to_string())?;
    let calculator = PolygonCalculator::new(renderer, config).map_err(|err| err.to_string())?;
    let (accepted, mut calculator) = calculate_and_report(calculator, args)?;
    if accepted {
        calculator.render().map_err(|err| err.to_string())?;
        calculator
            .renderer()
            .write_png(path)
            .map_err(|err| err.to_string())?;
    }
    Ok(accepted)
}

#[cfg(not(feature = "cairo-backend"))]
fn run_with_png(
    _args: &CliArgs,
    _config: CalculatorConfig,
    _path: &std::path::Path,
) -> Result<bool, String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn calculate_and_report<R: Renderer>(
    mut calculator: PolygonCalculator<R>,
    args: &CliArgs,
) -> Result<(bool, PolygonCalculator<R>), String> {
    calculator.set_sides_text(args.sides.as_str());
    calculator.set_side_length_text(args.length.as_str());

    match calculator.submit() {
        CalculationOutcome::Computed(_) => {
            if args.json {
                let payload = calculator
                    .snapshot_json_contract_v1_pretty()
                    .map_err(|err| err.to_string())?;
                println!("{payload}");
            } else {
                println!("{}", calculator.area_label());
                println!("{}", calculator.perimeter_label());
            }
            Ok((true, calculator))
        }
        CalculationOutcome::Rejected(notification) => {
            eprintln!("{}: {}", notification.title, notification.message);
            Ok((false, calculator))
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut sides = None::<String>;
    let mut length = None::<String>;
    let mut config = None::<PathBuf>;
    let mut json = false;
    let mut png = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--sides" => {
                sides = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --sides".to_owned())?,
                );
            }
            "--length" => {
                length = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --length".to_owned())?,
                );
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png".to_owned())?;
                png = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        sides: sides.ok_or_else(|| format!("missing --sides\n{USAGE}"))?,
        length: length.ok_or_else(|| format!("missing --length\n{USAGE}"))?,
        config,
        json,
        png,
    })
}
