//! # Bearing Capacity CLI
//!
//! Command-line front end for the calc_core bearing capacity engine.
//! Collects footing and soil parameters from arguments or a JSON file,
//! checks the field formats, runs one calculation and prints a report
//! (or JSON for LLM/API use).
//!
//! ```text
//! calc_cli calc --phi 30 --depth 3 --unit-weight 120 --width 4 --shape square
//! calc_cli calc --input footing.json --json
//! calc_cli calc --input footing.json --fs 2.5
//! calc_cli table
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use calc_core::bearing_factors::BearingFactorTable;
use calc_core::equations::bearing_calculation_equations;
use calc_core::{
    calculate, BearingCapacityInput, BearingCapacityResult, CalcError, CalcResult, FoundationShape,
};

/// Terzaghi bearing capacity of shallow foundations.
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate ultimate and allowable bearing capacity
    Calc(CalcArgs),
    /// Print the Terzaghi bearing capacity factor table
    Table {
        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Read a JSON footing definition instead of individual arguments.
    ///
    /// --label, --cohesion, --shape, --groundwater-depth and --fs override
    /// the values in the file when given.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["phi", "depth", "unit_weight", "width"]
    )]
    input: Option<PathBuf>,

    /// Footing label
    #[arg(long)]
    label: Option<String>,

    /// Cohesion c (psf) [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    cohesion: Option<f64>,

    /// Friction angle φ (whole degrees, 0-41)
    #[arg(long, required_unless_present = "input", allow_negative_numbers = true)]
    phi: Option<i32>,

    /// Embedment depth D (ft)
    #[arg(long, required_unless_present = "input", allow_negative_numbers = true)]
    depth: Option<f64>,

    /// Soil unit weight γ (pcf)
    #[arg(long, required_unless_present = "input", allow_negative_numbers = true)]
    unit_weight: Option<f64>,

    /// Footing width, or diameter for circular footings, B (ft)
    #[arg(long, required_unless_present = "input", allow_negative_numbers = true)]
    width: Option<f64>,

    /// Footing shape: square, circular, or continuous [default: continuous]
    #[arg(long)]
    shape: Option<String>,

    /// Depth to the water table D_w (ft); omit when there is no groundwater
    #[arg(long, allow_negative_numbers = true)]
    groundwater_depth: Option<f64>,

    /// Factor of safety [default: 3]
    #[arg(long, allow_negative_numbers = true)]
    fs: Option<f64>,

    /// Print JSON instead of a report
    #[arg(long)]
    json: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(get_log_level(cli.verbose, cli.quiet));

    match cli.command {
        Command::Table { json } => {
            print_table(json);
            ExitCode::SUCCESS
        }
        Command::Calc(args) => {
            let json = args.json;
            match run_calc(args) {
                Ok((input, result)) => {
                    if json {
                        print_json(&result);
                    } else {
                        print_report(&input, &result);
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Cannot evaluate bearing capacity: {}", e);
                    if json {
                        print_json(&e);
                    }
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_calc(args: CalcArgs) -> CalcResult<(BearingCapacityInput, BearingCapacityResult)> {
    let input = match &args.input {
        Some(path) => {
            let mut input = load_input(path)?;
            apply_overrides(&mut input, &args);
            input
        }
        None => input_from_args(&args)?,
    };
    validate_fields(&input)?;
    debug!(label = %input.label, "input accepted");

    let result = calculate(&input)?;
    Ok((input, result))
}

fn load_input(path: &Path) -> CalcResult<BearingCapacityInput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

/// Explicit flags win over the values read from `--input`.
fn apply_overrides(input: &mut BearingCapacityInput, args: &CalcArgs) {
    if let Some(label) = &args.label {
        input.label = label.clone();
    }
    if let Some(cohesion) = args.cohesion {
        input.cohesion_psf = cohesion;
    }
    if let Some(shape) = &args.shape {
        input.shape = FoundationShape::from_name(shape);
    }
    if let Some(dw) = args.groundwater_depth {
        input.groundwater_depth_ft = Some(dw);
    }
    if let Some(fs) = args.fs {
        input.factor_of_safety = fs;
    }
    debug!(label = %input.label, "applied command-line overrides to input file");
}

fn input_from_args(args: &CalcArgs) -> CalcResult<BearingCapacityInput> {
    Ok(BearingCapacityInput {
        label: args.label.clone().unwrap_or_default(),
        cohesion_psf: args.cohesion.unwrap_or(0.0),
        friction_angle_deg: args.phi.ok_or_else(|| missing("phi"))?,
        depth_ft: args.depth.ok_or_else(|| missing("depth"))?,
        unit_weight_pcf: args.unit_weight.ok_or_else(|| missing("unit-weight"))?,
        width_ft: args.width.ok_or_else(|| missing("width"))?,
        shape: args
            .shape
            .as_deref()
            .map(FoundationShape::from_name)
            .unwrap_or_default(),
        groundwater_depth_ft: args.groundwater_depth,
        factor_of_safety: args.fs.unwrap_or(3.0),
    })
}

fn missing(field: &str) -> CalcError {
    CalcError::invalid_input(field, "", "A value is required")
}

/// Field-format checks the engine leaves to its caller.
fn validate_fields(input: &BearingCapacityInput) -> CalcResult<()> {
    non_negative("cohesion_psf", input.cohesion_psf)?;
    non_negative("depth_ft", input.depth_ft)?;
    positive("unit_weight_pcf", input.unit_weight_pcf)?;
    positive("width_ft", input.width_ft)?;
    if let Some(dw) = input.groundwater_depth_ft {
        non_negative("groundwater_depth_ft", dw)?;
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a non-negative number",
        ));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_report(input: &BearingCapacityInput, result: &BearingCapacityResult) {
    println!("═══════════════════════════════════════");
    println!("  BEARING CAPACITY (TERZAGHI)");
    println!("═══════════════════════════════════════");
    println!();
    if !input.label.is_empty() {
        println!("Footing:  {}", input.label);
    }
    println!("Input:");
    println!("  Shape:       {}", result.shape);
    let width_label = result.shape.width_label();
    println!("  {}:{}{:.2} ft", width_label, pad(width_label), input.width_ft);
    println!("  Depth D:     {:.2} ft", input.depth_ft);
    println!("  Cohesion c:  {:.0} psf", input.cohesion_psf);
    println!("  φ:           {}°", input.friction_angle_deg);
    println!("  γ:           {:.1} pcf", input.unit_weight_pcf);
    match input.groundwater_depth_ft {
        Some(dw) => println!("  D_w:         {:.2} ft", dw),
        None => println!("  D_w:         not given (using {:.2} ft)", result.groundwater_depth_ft),
    }
    println!("  FS:          {}", input.factor_of_safety);
    println!();
    println!("Groundwater: {}", result.groundwater_condition);
    println!("  γ' = {:.2} pcf", result.effective_unit_weight_pcf);
    println!("  σ' = {:.2} psf", result.effective_stress_psf);
    println!();
    println!("Factors: Nc={} Nq={} Nγ={}", result.nc, result.nq, result.n_gamma);
    println!();
    println!("  {}", result.equation);
    println!("  {}", result.calculation);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  q_ult   = {:.0} psf ({})",
        result.ultimate_bearing_capacity_psf,
        result.ultimate_ksf()
    );
    println!(
        "  q_allow = {:.0} psf ({})",
        result.allowable_bearing_capacity_psf,
        result.allowable_ksf()
    );
    println!("═══════════════════════════════════════");
    println!();
    println!("References:");
    let groundwater_given = input.groundwater_depth_ft.is_some();
    for equation in bearing_calculation_equations(result.shape, groundwater_given) {
        let meta = equation.metadata();
        println!("  {} - {}", meta.name, meta.reference.citation());
    }
}

fn pad(label: &str) -> String {
    " ".repeat(13usize.saturating_sub(label.len() + 1))
}

fn print_table(json: bool) {
    let table = BearingFactorTable::terzaghi();
    if json {
        let rows: Vec<_> = table
            .iter()
            .map(|(phi, f)| {
                serde_json::json!({ "phi": phi, "nc": f.nc, "nq": f.nq, "n_gamma": f.n_gamma })
            })
            .collect();
        print_json(&rows);
        return;
    }

    println!("{:>4} {:>8} {:>8} {:>8}", "φ", "Nc", "Nq", "Nγ");
    for (phi, f) in table.iter() {
        println!("{:>4} {:>8.1} {:>8.1} {:>8.1}", phi, f.nc, f.nq, f.n_gamma);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_calc(argv: &[&str]) -> CalcArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Calc(args) => args,
            other => panic!("expected calc, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_from_args() {
        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "30", "--depth", "3",
            "--unit-weight", "120", "--width", "4",
        ]);
        let (input, result) = run_calc(args).unwrap();
        assert_eq!(input.shape, FoundationShape::Continuous);
        assert_eq!(input.factor_of_safety, 3.0);
        assert_eq!(result.allowable_bearing_capacity_psf, 4308.0);
    }

    #[test]
    fn test_unknown_shape_falls_back() {
        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "30", "--depth", "3",
            "--unit-weight", "120", "--width", "4",
            "--shape", "hexagon",
        ]);
        let (input, _) = run_calc(args).unwrap();
        assert_eq!(input.shape, FoundationShape::Continuous);
    }

    #[test]
    fn test_missing_required_argument() {
        assert!(Cli::try_parse_from(["calc_cli", "calc", "--phi", "30"]).is_err());
    }

    #[test]
    fn test_field_validation() {
        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "30", "--depth", "-1",
            "--unit-weight", "120", "--width", "4",
        ]);
        let err = run_calc(args).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "30", "--depth", "3",
            "--unit-weight", "120", "--width", "0",
        ]);
        assert!(run_calc(args).is_err());
    }

    #[test]
    fn test_engine_errors_pass_through() {
        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "45", "--depth", "3",
            "--unit-weight", "120", "--width", "4",
        ]);
        assert_eq!(run_calc(args).unwrap_err().error_code(), "OUT_OF_RANGE");

        let args = parse_calc(&[
            "calc_cli", "calc", "--phi", "30", "--depth", "3",
            "--unit-weight", "120", "--width", "4",
            "--fs", "0",
        ]);
        assert_eq!(run_calc(args).unwrap_err().error_code(), "INVALID_FACTOR_OF_SAFETY");
    }

    fn write_footing_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        let json = r#"{
            "label": "F-2",
            "cohesion_psf": 0.0,
            "friction_angle_deg": 30,
            "depth_ft": 3.0,
            "unit_weight_pcf": 120.0,
            "width_ft": 4.0,
            "shape": "continuous",
            "factor_of_safety": 3.0
        }"#;
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_input_file_values_used() {
        let path = write_footing_file("calc_cli_file_only");
        let args = parse_calc(&["calc_cli", "calc", "--input", path.to_str().unwrap()]);
        let (input, result) = run_calc(args).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(input.label, "F-2");
        assert_eq!(input.factor_of_safety, 3.0);
        assert_eq!(result.shape, FoundationShape::Continuous);
        assert_eq!(result.allowable_bearing_capacity_psf, 4308.0);
    }

    #[test]
    fn test_flags_override_input_file() {
        let path = write_footing_file("calc_cli_overrides");
        let args = parse_calc(&[
            "calc_cli", "calc", "--input", path.to_str().unwrap(),
            "--fs", "2", "--shape", "square",
        ]);
        let (input, result) = run_calc(args).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(input.factor_of_safety, 2.0);
        assert_eq!(input.label, "F-2");
        assert_eq!(result.shape, FoundationShape::Square);
        // 8100 + 0.4(120)(4)(20.1) = 11959.2
        assert_eq!(result.ultimate_bearing_capacity_psf, 11959.0);
        assert_eq!(result.allowable_bearing_capacity_psf, 5980.0);
    }

    #[test]
    fn test_input_file_conflicts_with_geometry_flags() {
        let argv = ["calc_cli", "calc", "--input", "footing.json", "--phi", "30"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_input_file() {
        let err = load_input(Path::new("/nonexistent/footing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(get_log_level(0, false), Level::WARN);
        assert_eq!(get_log_level(2, false), Level::DEBUG);
        assert_eq!(get_log_level(3, true), Level::ERROR);
    }
}
