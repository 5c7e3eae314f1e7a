use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tc_atmos::ambient_at;
use tc_core::units::{Pressure, Temperature, k, pa};
use tc_cycle::{
    AfterburnerSpec, AfterburningTurbojet, CycleConfig, CycleError, EngineCycle, GasModelKind,
    Turbojet, TurbojetSpec, stage,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "TurboCycle CLI - Jet engine cycle analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a dry turbojet at one operating point
    Turbojet {
        #[command(flatten)]
        design: DesignArgs,
        #[command(flatten)]
        turbojet: TurbojetArgs,
        /// Maximum turbine inlet temperature [K]
        #[arg(long, default_value_t = 1400.0)]
        max_temp: f64,
        /// Print the performance record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate an afterburning turbojet at one operating point
    Afterburning {
        #[command(flatten)]
        design: DesignArgs,
        #[command(flatten)]
        turbojet: TurbojetArgs,
        /// Maximum turbine inlet temperature [K]
        #[arg(long, default_value_t = 1400.0)]
        max_temp: f64,
        /// Afterburner exit temperature [K]
        #[arg(long, default_value_t = 1800.0)]
        afterburner_temp: f64,
        /// Afterburner combustion efficiency
        #[arg(long, default_value_t = 0.95)]
        afterburner_efficiency: f64,
        /// Additional afterburner fuel-to-air ratio
        #[arg(long, default_value_t = 0.015)]
        afterburner_fuel_ratio: f64,
        /// Print the performance record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through the Brayton cycle stage by stage with fixed inputs
    Demo,
    /// Sweep a performance map over altitude and turbine temperature
    Map {
        #[command(flatten)]
        design: CoreDesignArgs,
        #[command(flatten)]
        turbojet: TurbojetArgs,
        /// Lowest altitude [m]
        #[arg(long, default_value_t = 0.0)]
        altitude_min: f64,
        /// Highest altitude [m]
        #[arg(long, default_value_t = 11_000.0)]
        altitude_max: f64,
        /// Number of altitude grid points
        #[arg(long, default_value_t = 12)]
        altitude_steps: usize,
        /// Lowest turbine inlet temperature [K]
        #[arg(long, default_value_t = 1200.0)]
        max_temp_min: f64,
        /// Highest turbine inlet temperature [K]
        #[arg(long, default_value_t = 1800.0)]
        max_temp_max: f64,
        /// Number of temperature grid points
        #[arg(long, default_value_t = 7)]
        max_temp_steps: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Engine design flags shared by every subcommand.
#[derive(Args)]
struct CoreDesignArgs {
    /// Compressor pressure ratio
    #[arg(long, default_value_t = 10.0)]
    pressure_ratio: f64,
    /// Specific heat ratio (cp/cv)
    #[arg(long, default_value_t = 1.4)]
    gamma: f64,
    /// Specific heat at constant pressure [J/(kg·K)]
    #[arg(long, default_value_t = 1005.0)]
    cp: f64,
    /// Specific gas constant [J/(kg·K)]
    #[arg(long, default_value_t = 287.0)]
    gas_constant: f64,
    /// Use the real-gas (CoolProp) property model when available
    #[arg(long)]
    real_gas: bool,
}

impl CoreDesignArgs {
    fn gas_model(&self) -> GasModelKind {
        if self.real_gas {
            GasModelKind::Real
        } else {
            GasModelKind::Ideal
        }
    }
}

/// Single-operating-point design flags (inlet resolution).
#[derive(Args)]
struct DesignArgs {
    #[command(flatten)]
    core: CoreDesignArgs,
    /// Altitude [m] used to resolve inlet conditions from the ISA model
    #[arg(long, default_value_t = 0.0)]
    altitude: f64,
    /// Override the inlet temperature [K] instead of using ISA
    #[arg(long)]
    inlet_temp: Option<f64>,
    /// Override the inlet pressure [Pa] instead of using ISA
    #[arg(long)]
    inlet_pressure: Option<f64>,
}

impl DesignArgs {
    fn inlet_conditions(&self) -> (Temperature, Pressure) {
        let ambient = ambient_at(self.altitude);
        let t1 = self.inlet_temp.map(k).unwrap_or(ambient.temperature);
        let p1 = self.inlet_pressure.map(pa).unwrap_or(ambient.pressure);
        (t1, p1)
    }

    fn cycle_config(&self) -> CliResult<CycleConfig> {
        let (t1, p1) = self.inlet_conditions();
        Ok(
            CycleConfig::new(t1, p1, self.core.pressure_ratio, self.core.gamma)?
                .with_gas_constants(self.core.cp, self.core.gas_constant)?
                .with_gas_model(self.core.gas_model()),
        )
    }
}

/// Shared turbojet design flags.
#[derive(Args)]
struct TurbojetArgs {
    /// Fuel-to-air mass ratio
    #[arg(long, default_value_t = 0.025)]
    fuel_to_air_ratio: f64,
    /// Combustion efficiency
    #[arg(long, default_value_t = 0.98)]
    combustion_efficiency: f64,
    /// Nozzle efficiency
    #[arg(long, default_value_t = 0.95)]
    nozzle_efficiency: f64,
}

impl TurbojetArgs {
    fn spec(&self) -> CliResult<TurbojetSpec> {
        Ok(TurbojetSpec::new(
            self.fuel_to_air_ratio,
            self.combustion_efficiency,
            self.nozzle_efficiency,
        )?)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Turbojet {
            design,
            turbojet,
            max_temp,
            json,
        } => cmd_turbojet(&design, &turbojet, max_temp, json),
        Commands::Afterburning {
            design,
            turbojet,
            max_temp,
            afterburner_temp,
            afterburner_efficiency,
            afterburner_fuel_ratio,
            json,
        } => cmd_afterburning(
            &design,
            &turbojet,
            max_temp,
            afterburner_temp,
            afterburner_efficiency,
            afterburner_fuel_ratio,
            json,
        ),
        Commands::Demo => cmd_demo(),
        Commands::Map {
            design,
            turbojet,
            altitude_min,
            altitude_max,
            altitude_steps,
            max_temp_min,
            max_temp_max,
            max_temp_steps,
            output,
        } => cmd_map(
            &design,
            &turbojet,
            (altitude_min, altitude_max, altitude_steps),
            (max_temp_min, max_temp_max, max_temp_steps),
            output.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_turbojet(
    design: &DesignArgs,
    turbojet: &TurbojetArgs,
    max_temp: f64,
    json: bool,
) -> CliResult<()> {
    let engine = Turbojet::new(design.cycle_config()?, turbojet.spec()?)?;
    let perf = engine.simulate_cycle(k(max_temp))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&perf)?);
    } else {
        print_metrics("Turbojet", &perf.metrics());
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_afterburning(
    design: &DesignArgs,
    turbojet: &TurbojetArgs,
    max_temp: f64,
    afterburner_temp: f64,
    afterburner_efficiency: f64,
    afterburner_fuel_ratio: f64,
    json: bool,
) -> CliResult<()> {
    let afterburner = AfterburnerSpec::new(afterburner_efficiency, afterburner_fuel_ratio)?;
    let engine =
        AfterburningTurbojet::new(design.cycle_config()?, turbojet.spec()?, afterburner)?;
    let perf = engine.simulate_cycle(k(max_temp), k(afterburner_temp))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&perf)?);
    } else {
        print_metrics("Afterburning Turbojet", &perf.metrics());
    }
    Ok(())
}

/// Stage-by-stage Brayton cycle walk-through at sea-level standard
/// conditions, including the net specific work the aggregate records do not
/// carry.
fn cmd_demo() -> CliResult<()> {
    let config = CycleConfig::new(k(288.15), pa(101_325.0), 10.0, 1.4)?;
    let cycle = EngineCycle::new(config)?;
    let gamma = cycle.config().gamma();
    let ambient = cycle.config().inlet_pressure();

    let inlet = cycle.inlet_state();
    let compressor_exit = cycle.compressor_exit()?;
    let combustor_exit = stage::combust(compressor_exit, k(1400.0))?;
    let turbine_exit = stage::expand_to_back_pressure(combustor_exit, ambient, gamma)?;
    let exit_velocity = stage::nozzle_exit_velocity(
        turbine_exit,
        ambient,
        gamma,
        cycle.config().gas_constant(),
    )?;

    // Net specific work from enthalpy differences: turbine output minus
    // compressor input.
    let work_output = (cycle.enthalpy_at(&combustor_exit)? - cycle.enthalpy_at(&turbine_exit)?)
        - (cycle.enthalpy_at(&compressor_exit)? - cycle.enthalpy_at(&inlet)?);
    let thermal_eff = cycle.thermal_efficiency(k(1400.0))?;

    println!("--- Demo Jet Engine Cycle Results ---");
    println!(
        "Compressor exit: {:.2} K, {:.0} Pa",
        compressor_exit.temperature.value, compressor_exit.pressure.value
    );
    println!(
        "Turbine exit:    {:.2} K, {:.0} Pa",
        turbine_exit.temperature.value, turbine_exit.pressure.value
    );
    println!("Thrust (N/kg/s): {:.2}", exit_velocity.value);
    println!("Thermal Efficiency: {:.2}", thermal_eff);
    println!("Net Work Output (J/kg): {:.2}", work_output);
    Ok(())
}

fn cmd_map(
    design: &CoreDesignArgs,
    turbojet: &TurbojetArgs,
    altitude_grid: (f64, f64, usize),
    max_temp_grid: (f64, f64, usize),
    output: Option<&std::path::Path>,
) -> CliResult<()> {
    let altitudes = linspace(altitude_grid.0, altitude_grid.1, altitude_grid.2)?;
    let max_temps = linspace(max_temp_grid.0, max_temp_grid.1, max_temp_grid.2)?;
    let spec = turbojet.spec()?;

    let cells: Vec<(f64, f64)> = altitudes
        .iter()
        .flat_map(|&alt| max_temps.iter().map(move |&tmax| (alt, tmax)))
        .collect();

    // Each grid cell is an independent simulate call
    let rows: Vec<String> = cells
        .par_iter()
        .map(|&(altitude_m, max_temp_k)| -> CliResult<String> {
            let ambient = ambient_at(altitude_m);
            let config = CycleConfig::new(
                ambient.temperature,
                ambient.pressure,
                design.pressure_ratio,
                design.gamma,
            )?
            .with_gas_constants(design.cp, design.gas_constant)?
            .with_gas_model(design.gas_model());
            let engine = Turbojet::new(config, spec)?;
            let perf = engine.simulate_cycle(k(max_temp_k))?;

            let mut row = format!(
                "{},{},{},{}",
                altitude_m, ambient.temperature.value, ambient.pressure.value, max_temp_k
            );
            for (_, value) in perf.metrics() {
                row.push_str(&format!(",{value}"));
            }
            Ok(row)
        })
        .collect::<CliResult<Vec<_>>>()?;
    tracing::debug!("computed {} performance-map cells", rows.len());

    let mut header = String::from("altitude_m,ambient_temp_k,ambient_pressure_pa,max_temp_k");
    for key in [
        tc_cycle::keys::COMPRESSOR_EXIT_TEMP,
        tc_cycle::keys::COMPRESSOR_EXIT_PRESSURE,
        tc_cycle::keys::TURBINE_EXIT_TEMP,
        tc_cycle::keys::TURBINE_EXIT_PRESSURE,
        tc_cycle::keys::NOZZLE_EXIT_VELOCITY,
        tc_cycle::keys::SPECIFIC_THRUST,
        tc_cycle::keys::THERMAL_EFFICIENCY,
    ] {
        header.push(',');
        header.push_str(key);
    }

    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{header}")?;
            for row in &rows {
                writeln!(file, "{row}")?;
            }
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{header}")?;
            for row in &rows {
                writeln!(handle, "{row}")?;
            }
        }
    }
    Ok(())
}

fn print_metrics(title: &str, metrics: &[(&'static str, f64)]) {
    println!("\n{title}:");
    for (key, value) in metrics {
        println!("{key}: {value:.2}");
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> CliResult<Vec<f64>> {
    if steps == 0 {
        return Err(CliError::InvalidInput(
            "grid must have at least 1 point".to_string(),
        ));
    }
    if steps == 1 {
        return Ok(vec![start]);
    }
    let delta = (end - start) / (steps - 1) as f64;
    let mut points: Vec<f64> = (0..steps).map(|i| start + i as f64 * delta).collect();
    // Ensure exact endpoint
    points[steps - 1] = end;
    Ok(points)
}
