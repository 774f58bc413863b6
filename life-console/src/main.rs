#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use life_grid::{Grid, Random, Ruleset};

/// Conway's Game of Life on the console.
#[derive(Debug, Parser)]
#[command(name = "life-console")]
struct Args {
    /// Snapshot file to load the starting grid from, instead of a random fill.
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Grid width for random initialization.
    #[arg(long, default_value_t = 80, conflicts_with = "load")]
    width: u32,

    /// Grid height for random initialization.
    #[arg(long, default_value_t = 20, conflicts_with = "load")]
    height: u32,

    /// Percent chance for each cell to start alive (0-100).
    #[arg(long, default_value_t = 20, conflicts_with = "load")]
    fill: i32,

    /// Seed for the random fill; omitted means OS-seeded.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to run.
    #[arg(long, default_value_t = 30)]
    steps: u32,

    /// Delay between generations, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Use the alternative rule table (survive on 2 or 4, birth on 3 or 4).
    #[arg(long)]
    alt_rules: bool,

    /// Keep the starting dimensions instead of growing at live borders.
    #[arg(long)]
    no_growth: bool,

    /// Save the final grid to this path ("txt" extension appended if missing).
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Save every frame to "<PREFIX><step>.txt".
    #[arg(long, value_name = "PREFIX")]
    frame_prefix: Option<String>,

    /// Skip console rendering (useful with --save or --frame-prefix).
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = build_grid(&args)?;
    let rules = if args.alt_rules {
        Ruleset::Alternative
    } else {
        Ruleset::Classic
    };
    let delay = Duration::from_millis(args.delay_ms);

    for step in 0..=args.steps {
        if !args.quiet {
            clear_console();
            println!("{grid}");
            println!("Iteration: {step} / {}", args.steps);
        }
        if let Some(prefix) = &args.frame_prefix {
            let path = grid
                .save_to_file(format!("{prefix}{step}"))
                .with_context(|| format!("saving frame {step}"))?;
            log::debug!("saved frame to {}", path.display());
        }
        if step == args.steps {
            break;
        }
        thread::sleep(delay);
        grid.step(rules, !args.no_growth);
    }

    if let Some(path) = &args.save {
        let written = grid.save_to_file(path).context("saving final grid")?;
        log::info!("final grid saved to {}", written.display());
        println!("Final grid saved to {}", written.display());
    }
    Ok(())
}

fn build_grid(args: &Args) -> anyhow::Result<Grid> {
    if let Some(path) = &args.load {
        return Grid::from_file(path)
            .with_context(|| format!("loading grid from {}", path.display()));
    }
    let mut rand = match args.seed {
        Some(seed) => Random::from_seed(seed),
        None => Random::new(),
    };
    Ok(Grid::random(args.width, args.height, args.fill, &mut rand))
}

fn clear_console() {
    // ANSI clear-and-home, same effect as `clear`.
    print!("\x1b[2J\x1b[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }
}
