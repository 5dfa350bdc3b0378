use anyhow::bail;
use clap::{Parser, Subcommand};
use pcsets::{
    covering_sets_by_count, exhaustive_search, find_instances, parse_pattern, Melody, Preset,
    Universe, DEFAULT_UNIVERSE_SIZE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deficiency_search")]
#[command(about = "Finds the set classes that explain a melody", long_about = None)]
struct Cli {
    /// Melody literal, e.g. "9 11 2 (8 7) 6"
    #[arg(short, long, conflicts_with = "preset")]
    melody: Option<String>,

    /// Built-in melody: Twinkle or KlavierstuckIII
    #[arg(short, long)]
    preset: Option<Preset>,

    #[arg(short, long, default_value_t = DEFAULT_UNIVERSE_SIZE)]
    universe: i32,

    /// Onsets an instance may skip
    #[arg(short, long, default_value_t = 0)]
    deficiency: usize,

    /// Smallest cardinality in the set-class catalog
    #[arg(long, default_value_t = 3)]
    min_card: usize,

    /// Largest cardinality in the set-class catalog
    #[arg(long, default_value_t = 5)]
    max_card: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explanatory set classes at each deficiency down to 0
    Exhaustive,
    /// Explanatory set classes grouped by instance count
    Covering,
    /// Every instance of one pattern
    Instances {
        #[arg(long)]
        pattern: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let universe = Universe::new(cli.universe)?;
    let melody = match (&cli.melody, cli.preset) {
        (Some(literal), _) => literal.parse::<Melody>()?,
        (None, Some(preset)) => preset.melody(),
        (None, None) => bail!("Supply either --melody or --preset"),
    };
    if cli.min_card > cli.max_card {
        bail!("--min-card {} exceeds --max-card {}", cli.min_card, cli.max_card);
    }
    info!("melody: {melody}");

    match cli.command {
        Commands::Exhaustive => {
            let catalog = universe.set_classes_by_cardinality(cli.min_card, cli.max_card);
            for round in exhaustive_search(universe, &catalog, &melody, cli.deficiency) {
                print!("{round}");
            }
        }
        Commands::Covering => {
            let catalog = universe.set_classes_by_cardinality(cli.min_card, cli.max_card);
            for group in covering_sets_by_count(universe, &catalog, &melody, cli.deficiency) {
                print!("{group}");
            }
        }
        Commands::Instances { pattern } => {
            let pattern = parse_pattern(&pattern)?;
            let found = find_instances(universe, &pattern, &melody, cli.deficiency);
            println!("{} instances of {:?}", found.len(), universe.prime_form(&pattern));
            for instance in found {
                println!("{instance}");
            }
        }
    }
    Ok(())
}
