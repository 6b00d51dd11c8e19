//! tritree CLI: grow, prune, print, and cross-validate a vote tree.

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use tritree::prelude::*;
use tritree::research::DEFAULT_SEED;

#[derive(Parser)]
#[command(name = "tritree")]
#[command(about = "Ternary decision trees over yea/nay/present vote records")]
#[command(version)]
struct Cli {
    /// Record file (`id<TAB>party<TAB>votes` per line)
    file: PathBuf,

    /// Every N-th remaining record goes to the tuning sample
    #[arg(long, default_value_t = DEFAULT_TUNE_EVERY, value_parser = parse_stride)]
    tune_every: usize,

    /// Do not print the tree grown on the whole data
    #[arg(long)]
    no_tree: bool,

    /// Do not run the leave-one-out cross validation
    #[arg(long)]
    no_cv: bool,

    /// Shuffle the records before cross validation
    #[arg(long)]
    shuffle: bool,

    /// Random seed for the shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Write the tree in Graphviz dot format
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Print the cross validation report as JSON
    #[arg(long)]
    json: bool,

    /// Print the pruning outcome and every fold
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".bold().red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let sample = SampleReader::default()
        .file(&cli.file)
        .read()?;

    if cli.verbose {
        let (n_records, n_issues) = sample.shape();
        println!(
            "{}    {}",
            format!("[RECORDS {n_records:>5}]").bold().green(),
            format!("[ISSUES {n_issues:>3}]").bold().yellow(),
        );
    }

    if !cli.no_tree || cli.dot.is_some() {
        let tree = whole_data_tree(&sample, cli.tune_every, cli.verbose)?;
        if !cli.no_tree {
            print!("{tree}");
        }
        if let Some(path) = cli.dot.as_deref() {
            write_dot(&tree, path)?;
        }
    }

    if cli.no_cv { return Ok(()); }

    let mut cv = CrossValidation::new(&sample)
        .tune_every(cli.tune_every)
        .seed(cli.seed)
        .verbose(cli.verbose);
    if cli.shuffle {
        cv = cv.shuffle();
    }
    let report = cv.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Grows the tree on the whole data, keeping every record
/// in either the training or the tuning sample.
fn whole_data_tree(sample: &Sample, tune_every: usize, verbose: bool)
    -> tritree::Result<DecisionTreeClassifier>
{
    let (train, tune) = sample.split(None, tune_every);
    DecisionTreeBuilder::new(&train)
        .tune(&tune)
        .verbose(verbose)
        .build()
        .fit()
}

fn write_dot(tree: &DecisionTreeClassifier, path: &Path)
    -> tritree::Result<()>
{
    tree.to_dot_file(path)?;
    println!("{} {}", "Wrote".bold().green(), path.display());
    Ok(())
}

fn parse_stride(s: &str) -> Result<usize, String> {
    let stride = s.parse::<usize>().map_err(|e| e.to_string())?;
    if stride == 0 {
        return Err("the stride must be positive".to_string());
    }
    Ok(stride)
}
