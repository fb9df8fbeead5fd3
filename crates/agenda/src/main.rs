use agenda_core::{Minutes, TalkSource, TalkType};
use agenda_scheduler::{ConferencePlanner, ConferenceSchedule, PlannerConfig, TalkCatalog};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "agenda", about = "Conference talk scheduler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the conference and print the schedule
    Plan {
        /// Path to the talk source (JSON, or YAML with a .yaml/.yml extension)
        #[arg(long, env = "AGENDA_TALKS")]
        talks: PathBuf,
        /// Path to a YAML planner configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of conference days (overrides the configuration)
        #[arg(long)]
        days: Option<u32>,
        /// Maximum number of tracks per day (overrides the configuration)
        #[arg(long)]
        max_tracks: Option<u32>,
        /// Seed for the presentation-order shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate a talk source and configuration without planning
    Check {
        /// Path to the talk source
        #[arg(long, env = "AGENDA_TALKS")]
        talks: PathBuf,
        /// Path to a YAML planner configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> miette::Result<()> {
    // Initialize tracing; stdout is reserved for the schedule
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            talks,
            config,
            days,
            max_tracks,
            seed,
            format,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(days) = days {
                config.days = days;
            }
            if let Some(max_tracks) = max_tracks {
                config.max_tracks_per_day = max_tracks;
            }
            run_plan(&talks, config, seed, format)
        }
        Commands::Check { talks, config } => run_check(&talks, config.as_deref()),
    }
}

/// Load the talks, plan the conference and print the result
fn run_plan(
    talks_path: &Path,
    config: PlannerConfig,
    seed: Option<u64>,
    format: OutputFormat,
) -> miette::Result<()> {
    let catalog = TalkCatalog::new(load_talks(talks_path)?);

    let planner = ConferencePlanner::new(config)
        .map_err(|e| miette::miette!("Invalid planner configuration: {}", e))?;

    let seed = seed.unwrap_or_else(rand::random);
    info!("Using shuffle seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let schedule = planner
        .plan(catalog, &mut rng)
        .map_err(|e| miette::miette!("Planning failed: {}", e))?;

    let output = match format {
        OutputFormat::Text => render_text(&schedule),
        OutputFormat::Json => agenda_core::to_json_pretty(&schedule)
            .map_err(|e| miette::miette!("Failed to render schedule: {}", e))?,
    };
    println!("{}", output);

    if !schedule.is_complete() {
        for talk in &schedule.unscheduled {
            warn!("Unscheduled: {} {}", talk.talk_type(), talk.description());
        }
        return Err(miette::miette!(
            "Incomplete schedule: {} talks could not be placed",
            schedule.unscheduled.len()
        ));
    }

    Ok(())
}

/// Validate inputs and summarise the talk pool
fn run_check(talks_path: &Path, config_path: Option<&Path>) -> miette::Result<()> {
    let talks = load_talks(talks_path)?;
    let config = load_config(config_path)?;
    config
        .validate()
        .map_err(|e| miette::miette!("Invalid planner configuration: {}", e))?;

    for talk_type in TalkType::ALL {
        let count = talks.iter().filter(|t| t.talk_type() == talk_type).count();
        if count > 0 {
            println!("{:<13} {:>4}", talk_type, count);
        }
    }
    let total: Minutes = talks.iter().map(|t| t.duration()).sum();
    println!("{} talks, {} min over {} days", talks.len(), total, config.days);

    Ok(())
}

fn load_talks(path: &Path) -> miette::Result<Vec<agenda_core::Talk>> {
    let talks = TalkSource::from_path(path)
        .and_then(TalkSource::into_talks)
        .map_err(|e| miette::miette!("Failed to load talks from '{}': {}", path.display(), e))?;

    info!("Loaded {} talks from {}", talks.len(), path.display());
    Ok(talks)
}

fn load_config(path: Option<&Path>) -> miette::Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };

    let data = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read config '{}': {}", path.display(), e))?;

    PlannerConfig::from_yaml_str(&data)
        .map_err(|e| miette::miette!("Invalid config '{}': {}", path.display(), e))
}

/// Render as "Day D Track T:" blocks, one talk per line
fn render_text(schedule: &ConferenceSchedule) -> String {
    let mut out = String::new();

    for track in &schedule.tracks {
        out.push_str(&format!("\nDay {} Track {}:\n", track.day, track.track));
        for talk in &track.talks {
            out.push_str(&format!("{}\n", talk));
        }
    }

    out
}
