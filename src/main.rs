use clap::{Parser, Subcommand};
use log::{error, info};
use primefec::app_config::AppConfig;
use primefec::fec::field;
use primefec::session::Session;
use primefec::{solve_with, telemetry, Elem, FecError, Matrix, SolveStrategy, MODULUS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encodes a message under random coefficients and decodes it again
    Run {
        /// Path to a TOML configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Upper bound on the number of coefficient matrices drawn
        #[clap(long)]
        max_attempts: Option<usize>,

        /// Seed for the coefficient generator
        #[clap(long)]
        seed: Option<u64>,

        /// Pivot policy used by the solver
        #[clap(long, value_enum)]
        pivoting: Option<SolveStrategy>,

        /// Print collected metrics after the run
        #[clap(long, default_value_t = false)]
        metrics: bool,
    },
    /// Solves a square linear system over the field
    Solve {
        /// Matrix rows separated by ';', entries by ',' (e.g. "1,2;3,4")
        #[clap(short, long, required = true)]
        matrix: String,

        /// Right-hand side entries separated by ','
        #[clap(short, long, required = true)]
        results: String,

        #[clap(long, value_enum, default_value_t = SolveStrategy::Strict)]
        pivoting: SolveStrategy,
    },
    /// Prints the multiplicative inverse of a field element
    Inverse {
        #[clap(required = true)]
        value: Elem,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            max_attempts,
            seed,
            pivoting,
            metrics,
        } => {
            let mut cfg = match config {
                Some(path) => AppConfig::from_file(&path)?,
                None => AppConfig::default(),
            };
            if let Some(n) = max_attempts {
                cfg.session.max_attempts = n;
            }
            if seed.is_some() {
                cfg.session.seed = seed;
            }
            if let Some(p) = pivoting {
                cfg.session.strategy = p;
            }
            cfg.validate()?;
            if metrics {
                telemetry::enable();
            }
            let result = run(&cfg);
            if metrics {
                print!("{}", telemetry::gather_text());
            }
            result?;
        }
        Commands::Solve {
            matrix,
            results,
            pivoting,
        } => {
            let mut a = parse_matrix(&matrix)?;
            let mut b = parse_row(&results)?;
            let x = solve_with(&mut a, &mut b, pivoting)?;
            println!("Solution: {:?}", x);
        }
        Commands::Inverse { value } => match field::inv(value % MODULUS) {
            Some(v) => println!("{}^-1 mod {} = {}", value, MODULUS, v),
            None => {
                error!("zero has no inverse");
                return Err("zero has no multiplicative inverse".into());
            }
        },
    }

    Ok(())
}

fn run(cfg: &AppConfig) -> Result<(), FecError> {
    let mut session = Session::new(cfg.message.clone(), &cfg.session)?;
    println!("Original Message: {:?}", session.message());
    match session.run() {
        Ok(report) => {
            info!("decoded after {} attempt(s)", report.attempts);
            println!("Encoded Symbols: {:?}", report.encoded);
            println!("Coefficient Matrix: {:?}", report.coefficients);
            println!("Decoded Message: {:?}", report.decoded);
            Ok(())
        }
        Err(e) => {
            println!("Decoding failed: {}", e);
            Err(e)
        }
    }
}

fn parse_row(s: &str) -> Result<Vec<Elem>, FecError> {
    s.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<Elem>()
                .map_err(|e| FecError::Config(format!("bad entry '{}': {}", t, e)))
        })
        .collect()
}

fn parse_matrix(s: &str) -> Result<Matrix, FecError> {
    s.split(';')
        .filter(|r| !r.trim().is_empty())
        .map(parse_row)
        .collect()
}
