use anyhow::Result;
use clap::{Parser, Subcommand};
use veldt::app::App;
use veldt::SimConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation seed; overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// World size in hex rows; overrides the config file
    #[arg(long)]
    map_size: Option<i32>,

    /// Initial herbivore count
    #[arg(long)]
    herbivores: Option<usize>,

    /// Initial carnivore count
    #[arg(long)]
    carnivores: Option<usize>,

    /// Initial omnivore count
    #[arg(long)]
    omnivores: Option<usize>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Dump final stats as JSON instead of a text summary
    #[arg(long)]
    stats_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the simulation for a number of turns
    Run {
        #[arg(long, default_value_t = 1000)]
        turns: u64,
    },
    /// Advance a handful of turns and stop
    Step {
        #[arg(default_value_t = 1)]
        count: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = SimConfig::load(&args.config);
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    if let Some(map_size) = args.map_size {
        config.world.map_size = map_size;
    }
    if let Some(herbivores) = args.herbivores {
        config.world.herbivores = herbivores;
    }
    if let Some(carnivores) = args.carnivores {
        config.world.carnivores = carnivores;
    }
    if let Some(omnivores) = args.omnivores {
        config.world.omnivores = omnivores;
    }

    let turns = match args.command {
        Some(Command::Run { turns }) => turns,
        Some(Command::Step { count }) => count,
        None => 1000,
    };

    let mut app = App::new(config)?;
    app.run(turns)?;

    let stats = app.world.stats();
    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "turn {}: {} alive ({} herbivores, {} carnivores, {} omnivores), \
             max generation {}, avg age {:.1}",
            stats.turn,
            stats.population.total,
            stats.population.herbivores,
            stats.population.carnivores,
            stats.population.omnivores,
            stats.population.max_generation,
            stats.population.average_age,
        );
    }

    Ok(())
}
