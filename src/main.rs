use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use bwt_index::index::{inverse, FmIndex, IndexOpt};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "bwt-index", author, version, about = "Burrows-Wheeler transform and FM-index search", arg_required_else_help = true)]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Worker threads for batch search (0 = rayon default)
    #[arg(short = 't', long = "threads", default_value_t = 0, global = true)]
    threads: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the BWT and suffix array of a text ('$' is appended)
    Transform {
        text: String,
        #[arg(long = "block", default_value_t = 64)]
        occ_block: usize,
        #[arg(long)]
        json: bool,
    },
    /// Recover the original text from a BWT string
    Invert {
        bwt: String,
    },
    /// Find every occurrence of the patterns in a text
    Search {
        text: String,
        #[arg(required = true)]
        patterns: Vec<String>,
        #[arg(long = "block", default_value_t = 64)]
        occ_block: usize,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TransformReport {
    text: String,
    bwt: String,
    suffix_array: Vec<u32>,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    pattern: &'a str,
    count: usize,
    positions: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger_builder(cli.verbose, std::env::var("RUST_LOG").ok().as_deref()).init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("cannot configure thread pool")?;
    }

    match cli.command {
        Commands::Transform { text, occ_block, json } => run_transform(&text, IndexOpt { occ_block }, json),
        Commands::Invert { bwt } => run_invert(&bwt),
        Commands::Search { text, patterns, occ_block, json } => {
            run_search(&text, &patterns, IndexOpt { occ_block }, json)
        }
    }
}

/// Default level is info (debug with `-v`); RUST_LOG directives take precedence.
fn logger_builder(verbose: bool, filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info });
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder.format_timestamp(None).format_target(false);
    builder
}

fn build_index(text: &str, opt: IndexOpt) -> Result<FmIndex> {
    let fm = FmIndex::build_with_opt(text.as_bytes(), opt)
        .with_context(|| format!("cannot build index for '{}'", text))?;
    log::info!("indexed {} symbols (alphabet size {})", fm.text_len(), fm.alphabet().sigma());
    Ok(fm)
}

fn run_transform(text: &str, opt: IndexOpt, json: bool) -> Result<()> {
    let fm = build_index(text, opt)?;
    let report = TransformReport {
        text: String::from_utf8_lossy(&fm.decode()?).into_owned(),
        bwt: String::from_utf8_lossy(&fm.bwt()).into_owned(),
        suffix_array: fm.suffix_array().to_vec(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("text: {}", report.text);
        println!("bwt: {}", report.bwt);
        println!("sa: {:?}", report.suffix_array);
    }
    Ok(())
}

fn run_invert(bwt: &str) -> Result<()> {
    let text = inverse::decode(bwt.as_bytes()).with_context(|| format!("cannot invert '{}'", bwt))?;
    println!("{}", String::from_utf8_lossy(&text));
    Ok(())
}

fn run_search(text: &str, patterns: &[String], opt: IndexOpt, json: bool) -> Result<()> {
    let fm = build_index(text, opt)?;
    let results = fm.search_batch(patterns);

    let mut reports = Vec::with_capacity(patterns.len());
    for (pattern, res) in patterns.iter().zip(results) {
        let positions = res.with_context(|| format!("search for '{}' failed", pattern))?;
        reports.push(SearchReport { pattern, count: positions.len(), positions });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            println!("{}\t{}\t{:?}", r.pattern, r.count, r.positions);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn logger_honours_rust_log() {
        assert_eq!(logger_builder(false, None).build().filter(), LevelFilter::Info);
        assert_eq!(logger_builder(false, Some("debug")).build().filter(), LevelFilter::Debug);
        assert_eq!(logger_builder(false, Some("trace")).build().filter(), LevelFilter::Trace);
        assert_eq!(logger_builder(false, Some("warn")).build().filter(), LevelFilter::Warn);
        assert_eq!(logger_builder(true, None).build().filter(), LevelFilter::Debug);
        assert_eq!(logger_builder(true, Some("trace")).build().filter(), LevelFilter::Trace);
    }
}
