use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use showcase_score::config::{self, Config};
use showcase_score::gallery::Gallery;
use showcase_score::scoring::{calculate_score, FixedRoll, RandomRoll, RollSource, SeededRoll};
use showcase_score::submission::{load_submissions, validate_submission, ProjectSubmission};
use showcase_score::submit::{submit_project, SubmitOutcome};
use showcase_score::{browser, output, thumbnail};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INVALID_SUBMISSION: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single submission and show how the points add up
    Score {
        /// Project name
        #[arg(long)]
        name: String,

        /// Live URL of the deployed project
        #[arg(long)]
        url: String,

        /// Technology tag (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,

        /// Feature tag (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Apply to join the team
        #[arg(long)]
        join_team: bool,

        /// Use a fixed quality roll in [0, 1) instead of a random one
        #[arg(long, value_parser = parse_roll, conflicts_with = "seed")]
        roll: Option<f64>,

        /// Seed the quality roll for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Submit every project in a YAML file and print the ranked showcase
    Rank {
        /// YAML file with a top-level `submissions:` list
        file: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Seed the quality rolls for a reproducible ranking
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the simulated submission delay
        #[arg(long)]
        instant: bool,
    },
    /// Show the demo gallery with fetched screenshots
    Demo,
    /// Open a project URL in the browser
    Open {
        /// Project URL; bare hosts are opened over https
        url: String,
    },
    /// Write a config file with the defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Score and rank builder project submissions", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/showcase/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_roll(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("roll must be in [0, 1), got {}", value))
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SHOWCASE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn roll_source(roll: Option<f64>, seed: Option<u64>) -> Box<dyn RollSource> {
    match (roll, seed) {
        (Some(r), _) => Box::new(FixedRoll(r)),
        (None, Some(seed)) => Box::new(SeededRoll::new(seed)),
        (None, None) => Box::new(RandomRoll),
    }
}

/// Resolves on Ctrl-C; never resolves if the signal handler cannot be installed
async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Load and validate config, exiting on any problem
fn load_validated_config(path: Option<PathBuf>) -> Config {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    config
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let start_time = Instant::now();
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score {
            name,
            url,
            technologies,
            features,
            join_team,
            roll,
            seed,
        } => {
            let config = load_validated_config(cli.config);
            let scoring = config.scoring.unwrap_or_default();

            let submission = ProjectSubmission::new(name, url)
                .with_technologies(technologies)
                .with_features(features)
                .with_join_team(join_team);
            if let Err(e) = validate_submission(&submission) {
                eprintln!("Invalid submission: {}", e);
                std::process::exit(EXIT_INVALID_SUBMISSION);
            }

            let mut source = roll_source(roll, seed);
            let result = calculate_score(&submission, &scoring, &mut *source);
            println!(
                "{}",
                output::format_breakdown(&submission.name, &result, use_colors)
            );
        }
        Commands::Rank {
            file,
            format,
            seed,
            instant,
        } => {
            let config = load_validated_config(cli.config);
            run_rank(&config, &file, format, seed, instant, use_colors).await;
        }
        Commands::Demo => {
            let config = load_validated_config(cli.config);
            run_demo(&config, use_colors).await;
        }
        Commands::Open { url } => match browser::open_url(&url) {
            Ok(target) => println!("Opening {} in browser", target),
            Err(e) => {
                eprintln!("Failed to open browser: {:#}", e);
                std::process::exit(EXIT_NETWORK);
            }
        },
        Commands::Init { force } => {
            let path = match cli.config.map(Ok).unwrap_or_else(config::get_config_path) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            if let Err(e) = config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}

async fn run_rank(
    config: &Config,
    file: &Path,
    format: OutputFormat,
    seed: Option<u64>,
    instant: bool,
    use_colors: bool,
) {
    let submissions = match load_submissions(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // validate_config already checked the delay parses
    let delay = if instant {
        Duration::ZERO
    } else {
        config.submission.delay_duration().unwrap_or(Duration::ZERO)
    };

    let scoring = config.scoring.clone().unwrap_or_default();
    let mut gallery = Gallery::new(scoring, config.submission.author.clone());
    let mut source = roll_source(None, seed);

    // File order is submission order, so later entries are newer
    for submission in submissions {
        let name = submission.name.clone();
        match submit_project(&mut gallery, submission, &mut *source, delay, ctrl_c()).await {
            Ok(SubmitOutcome::Submitted { id, score }) => {
                debug!(id = %id, score, "submitted {}", name);
            }
            Ok(SubmitOutcome::Cancelled) => {
                eprintln!("Cancelled; showing projects submitted so far.");
                break;
            }
            Err(e) => {
                warn!("Skipping '{}': {}", name, e);
            }
        }
    }

    let showcase = gallery.showcase();
    match format {
        OutputFormat::Table => {
            println!("{}", output::format_showcase_table(&showcase, use_colors));
        }
        OutputFormat::Tsv => {
            let tsv = output::format_tsv(&showcase);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        OutputFormat::Json => match output::format_json(&showcase) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    }
}

async fn run_demo(config: &Config, use_colors: bool) {
    let client = match thumbnail::create_client(&config.thumbnails) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let projects = thumbnail::demo_projects();
    let cards: Vec<(&str, &str)> = projects.iter().map(|p| (p.title, p.url)).collect();
    let thumbnails = thumbnail::fetch_thumbnails(&client, &config.thumbnails, &cards).await;

    let rendered: Vec<String> = projects
        .iter()
        .zip(&thumbnails)
        .map(|(project, thumb)| output::format_demo_card(project, thumb, use_colors))
        .collect();
    println!("{}", rendered.join("\n\n"));
}
