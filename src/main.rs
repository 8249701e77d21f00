use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rankine_cycle_simulator::{
    app::{self, AppError, OutputFormat},
    config,
    cycle::DisplayInputs,
    i18n::{self, Translator},
    units::{PressureUnit, SpecificEnthalpyUnit, SpecificEntropyUnit, TemperatureUnit},
};

#[derive(Parser)]
#[command(name = "rankine_cycle_simulator_cli")]
#[command(
    version,
    about = "Ideal Rankine cycle simulator (IAPWS-IF97 water/steam)",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the TOML configuration file (created with defaults if missing)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language: auto, en-us, ko-kr
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one cycle and print the state table
    Solve {
        /// Boiler pressure [MPa]
        #[arg(long)]
        boiler_pressure: Option<f64>,
        /// Boiler (turbine inlet) temperature [°C]
        #[arg(long)]
        boiler_temperature: Option<f64>,
        /// Condenser pressure [kPa]
        #[arg(long)]
        condenser_pressure: Option<f64>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Override the display pressure unit (Pa, kPa, MPa, bar, psi)
        #[arg(long)]
        pressure_unit: Option<String>,
        /// Override the display temperature unit (K, C, F, R)
        #[arg(long)]
        temperature_unit: Option<String>,
        /// Override the display enthalpy unit (J/kg, kJ/kg, kcal/kg, Btu/lb)
        #[arg(long)]
        enthalpy_unit: Option<String>,
        /// Override the display entropy unit (J/kgK, kJ/kgK, Btu/lbR)
        #[arg(long)]
        entropy_unit: Option<String>,
        /// Directory to write T-s / h-s diagram point series as CSV
        #[arg(long)]
        diagram_out: Option<PathBuf>,
    },
    /// Sweep the boiler pressure and print the efficiency trend
    Sweep {
        /// Start boiler pressure [MPa]
        #[arg(long)]
        from: f64,
        /// End boiler pressure [MPa]
        #[arg(long)]
        to: f64,
        /// Number of evenly spaced points (2 to 1000)
        #[arg(long, default_value_t = 10)]
        steps: usize,
        /// Boiler temperature [°C]
        #[arg(long)]
        boiler_temperature: Option<f64>,
        /// Condenser pressure [kPa]
        #[arg(long)]
        condenser_pressure: Option<f64>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Interactive menu (default)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));
    let mut cfg = config::load_or_default_from(&config_path).unwrap_or_else(|e| {
        eprintln!("config: {e}");
        config::Config::default()
    });
    app::init_logging(cli.verbose, &cfg.log_level);

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Err(err) = try_run(cli, &mut cfg, &config_path, &tr) {
        eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), err.localized(&tr));
        std::process::exit(1);
    }
}

fn try_run(
    cli: Cli,
    cfg: &mut config::Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Solve {
            boiler_pressure,
            boiler_temperature,
            condenser_pressure,
            format,
            pressure_unit,
            temperature_unit,
            enthalpy_unit,
            entropy_unit,
            diagram_out,
        } => {
            let values = DisplayInputs {
                boiler_pressure_mpa: boiler_pressure.unwrap_or(cfg.defaults.boiler_pressure_mpa),
                boiler_temperature_c: boiler_temperature
                    .unwrap_or(cfg.defaults.boiler_temperature_c),
                condenser_pressure_kpa: condenser_pressure
                    .unwrap_or(cfg.defaults.condenser_pressure_kpa),
            };
            let mut units = cfg.display_units;
            if let Some(s) = pressure_unit {
                units.pressure = PressureUnit::parse(&s)?;
            }
            if let Some(s) = temperature_unit {
                units.temperature = TemperatureUnit::parse(&s)?;
            }
            if let Some(s) = enthalpy_unit {
                units.enthalpy = SpecificEnthalpyUnit::parse(&s)?;
            }
            if let Some(s) = entropy_unit {
                units.entropy = SpecificEntropyUnit::parse(&s)?;
            }
            let sim = app::simulate(cfg, &values)?;
            print!("{}", app::render(&sim, &units, cfg.precision, format, tr)?);
            if let Some(dir) = diagram_out {
                for path in app::write_diagrams(&sim.result, &units, &dir)? {
                    eprintln!("{}", path.display());
                }
            }
        }
        Commands::Sweep {
            from,
            to,
            steps,
            boiler_temperature,
            condenser_pressure,
            format,
        } => {
            let base = DisplayInputs {
                boiler_temperature_c: boiler_temperature
                    .unwrap_or(cfg.defaults.boiler_temperature_c),
                condenser_pressure_kpa: condenser_pressure
                    .unwrap_or(cfg.defaults.condenser_pressure_kpa),
                ..cfg.defaults
            };
            let points = app::sweep(cfg, &base, from, to, steps)?;
            print!("{}", app::render_sweep(&points, format, tr)?);
        }
        Commands::Interactive => app::run(cfg, config_path, tr)?,
    }
    Ok(())
}
