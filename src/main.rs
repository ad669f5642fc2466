use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::time::Duration;
use wordgrid_solver::{BonusCell, Grid, Puzzle, Rack, SearchConfig, Solver, Wordlist};

/// Find the best scoring placement of a rack of letters on a 5x5 board with bonus cells.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Wordlist with one word per line
    #[arg(short, long, value_name = "PATH")]
    wordfile: PathBuf,

    /// Letters to place
    #[arg(short, long, conflicts_with = "seed")]
    rack: Option<String>,

    /// Bonus cell as KIND=ROW,COL, KIND is one of DL, TL, DW, TW
    #[arg(short, long, value_name = "KIND=ROW,COL", conflicts_with = "seed")]
    bonus: Vec<BonusCell>,

    /// Generate a random puzzle from this seed instead
    #[arg(long)]
    seed: Option<u64>,

    /// Number of letters in a generated puzzle
    #[arg(long, default_value_t = 7)]
    rack_size: usize,

    /// Search without upper bound pruning
    #[arg(long)]
    no_bound: bool,

    /// Repeat the search without pruning and check the best score
    #[arg(long)]
    verify: bool,

    /// Stop after about this many search nodes
    #[arg(long, value_name = "N")]
    node_limit: Option<u64>,

    /// Stop after about this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<f64>,

    /// Search the choices for the first cell in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Result<SearchConfig> {
        let mut config = SearchConfig::default()
            .with_bound_pruning(!self.no_bound)
            .with_verify(self.verify);
        if let Some(node_limit) = self.node_limit {
            config = config.with_node_limit(node_limit);
        }
        if let Some(secs) = self.time_limit {
            let limit = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid time limit {}", secs))?;
            config = config.with_time_limit(limit);
        }
        Ok(config)
    }

    fn puzzle(&self) -> Result<(Rack, Grid)> {
        if let Some(seed) = self.seed {
            let puzzle = Puzzle::generate(seed, self.rack_size);
            println!("{}", puzzle);
            return Ok((*puzzle.rack(), puzzle.grid().clone()));
        }
        match &self.rack {
            Some(letters) => {
                let rack: Rack = letters.parse()?;
                Ok((rack, Grid::from_bonuses(&self.bonus)))
            }
            None => bail!("either --rack or --seed is required"),
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let wordfile = cli.wordfile.to_string_lossy();
    let wordlist = Wordlist::from_file(&wordfile)?;
    info!("{}, {} entries skipped", wordlist, wordlist.skipped);
    let (rack, grid) = cli.puzzle()?;
    let solver = Solver::new(&wordlist)
        .with_grid(grid)
        .with_config(cli.config()?);

    let result = if cli.parallel {
        solver.solve_parallel(&rack)?
    } else {
        solver.solve(&rack)?
    };

    println!("rack: {}\n{}\n", rack, solver.grid());
    match &result.solution {
        Some(solution) => {
            println!("{}\n", solution.board);
            for word in &solution.words {
                println!("{}", word);
            }
            println!("score: {}", solution.score);
        }
        None => println!("no board found"),
    }
    if !result.complete {
        println!("search stopped early, the score may not be the best");
    }
    println!("{} in {:?}", result.stats, result.elapsed);
    Ok(())
}
