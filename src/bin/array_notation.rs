use clap::Parser;
use pcsets::Ratio;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "array_notation")]
#[command(about = "Prints frequency ratios as prime exponent vectors", long_about = None)]
struct Cli {
    /// Ratios such as 3/2 or 7/8
    #[arg(required = true)]
    ratios: Vec<Ratio>,

    #[arg(short, long)]
    keep_trailing_zeroes: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    for ratio in cli.ratios {
        println!("{ratio}: {:?}", ratio.array_notation(!cli.keep_trailing_zeroes)?);
    }
    Ok(())
}
