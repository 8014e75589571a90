use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hd_chart::{CrossTable, gate_from_longitude, try_gate_from_longitude};
use hd_rs::{
    AnalyticEphemeris, BirthInput, ChartConfig, ChartReport, DesignSearchConfig, SearchStepping,
    compute_chart,
};
use hd_rs::HdError;
use hd_search::{SearchError, resolve_epochs};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hdgraph", about = "Bodygraph chart calculator")]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Stepping {
    /// Always step earlier (default)
    Backward,
    /// Step toward the target in either direction
    Signed,
}

impl From<Stepping> for SearchStepping {
    fn from(s: Stepping) -> Self {
        match s {
            Stepping::Backward => SearchStepping::BackwardOnly,
            Stepping::Signed => SearchStepping::Signed,
        }
    }
}

#[derive(clap::Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local wall-clock time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// IANA zone (Europe/Berlin), fixed offset (+05:30) or UTC
    #[arg(long, default_value = "UTC")]
    zone: String,
    /// Design search stepping rule
    #[arg(long, value_enum, default_value = "backward")]
    stepping: Stepping,
}

impl BirthArgs {
    fn birth(&self) -> BirthInput {
        BirthInput::parse(&self.date, &self.time, &self.zone).unwrap_or_else(|e| fail(e))
    }

    fn search_config(&self) -> DesignSearchConfig {
        DesignSearchConfig::default().with_stepping(self.stepping.into())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Gate and line for a tropical longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Personality and design instants for a birth
    Design {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Full chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Write the diagram SVG to this file
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// JSON cross-description table
        #[arg(long)]
        cross_table: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn fail_unresolved(e: impl std::fmt::Display, stepping: Stepping) -> ! {
    eprintln!("error: {e}");
    if matches!(stepping, Stepping::Backward) {
        eprintln!("hint: retry with --stepping signed");
    }
    std::process::exit(1);
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn print_report(report: &ChartReport) {
    println!("Type:       {}", report.chart_type);
    println!("Strategy:   {}", report.strategy);
    println!("Authority:  {}", report.authority);
    println!("Profile:    {}", report.profile);
    println!("Definition: {}", report.definition);
    println!("Not-self:   {}", report.shadow_theme);
    println!("Cross:      {}", report.cross_label);
    let centers: Vec<&str> = report.defined_centers.iter().map(|c| c.name()).collect();
    println!("Defined:    {}", or_dash(&centers.join(", ")));
    println!("Channels:   {}", or_dash(&report.channels.join(", ")));
    println!();
    println!("{:<12} {:>10} {:>12} {:>10}", "", "Design", "", "Personality");
    for (d, p) in report.design.iter().zip(&report.personality) {
        println!(
            "{:<2} {:<10} {:>5}  {:>9.4}   {:>9.4}  {:>5}",
            p.glyph, p.point, d.activation, d.longitude_deg, p.longitude_deg, p.activation
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Gate { lon } => {
            let info = try_gate_from_longitude(lon).unwrap_or_else(|e| fail(e));
            println!(
                "{} (rank {}, gate starts {:.4} deg, {:.4} deg in gate)",
                info.activation, info.gate_rank, info.start_longitude, info.degrees_in_gate
            );
            let opposite = gate_from_longitude(lon + 180.0);
            println!("opposite: {}", opposite.activation);
        }

        Commands::Design { birth } => {
            let input = birth.birth();
            let epochs = resolve_epochs(&AnalyticEphemeris::new(), &input, &birth.search_config())
                .unwrap_or_else(|e| match e {
                    SearchError::DesignEpochUnresolved { .. } => fail_unresolved(e, birth.stepping),
                    other => fail(other),
                });
            println!(
                "Personality: {}  (JD {:.6})",
                epochs.personality_utc, epochs.personality_jd
            );
            println!(
                "Design:      {}  (JD {:.6})",
                epochs.design_utc, epochs.design_jd
            );
            println!(
                "Search:      {} iterations, residual {:.5} deg",
                epochs.search.iterations, epochs.search.residual_deg
            );
        }

        Commands::Chart {
            birth,
            svg,
            json,
            cross_table,
        } => {
            let input = birth.birth();
            let table = cross_table.map(|path| {
                let text = std::fs::read_to_string(&path)
                    .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
                CrossTable::from_json(&text).unwrap_or_else(|e| fail(e))
            });
            let config = ChartConfig {
                search: birth.search_config(),
                ..ChartConfig::default()
            };
            let lookup = table.as_ref().map(|t| t as &dyn hd_chart::CrossLookup);
            let report = compute_chart(&AnalyticEphemeris::new(), &input, lookup, &config)
                .unwrap_or_else(|e| match e {
                    HdError::DesignEpochUnresolved { .. } => fail_unresolved(e, birth.stepping),
                    other => fail(other),
                });

            if let Some(path) = svg {
                std::fs::write(&path, &report.diagram.svg)
                    .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
            }
            if json {
                let text = serde_json::to_string_pretty(&report).unwrap_or_else(|e| fail(e));
                println!("{text}");
            } else {
                print_report(&report);
            }
        }
    }
}
