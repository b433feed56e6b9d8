// src/bin/derive_bench.rs - Cost of deriving engines, concrete vs. type-erased
//
// For every engine kind, derive `iterations` children from one parent and draw
// a single uniform integer from each.  An optional parallel pass gives every
// worker its own derived stream and reports per-worker means.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Uniform};
use rand_pcg::{Pcg32, Pcg64};
use rayon::prelude::*;

use spmd_random::{derive, erase_as_32, erase_as_64, Derivable, RandomEngine, RootSeed};

#[derive(Parser)]
struct Cli {
    /// Derived engines per benchmark
    #[arg(long, default_value = "1000000")]
    iterations: usize,

    /// Root key: up to four comma-separated words, decimal or 0x-hex
    #[arg(long, default_value = "0")]
    seed: RootSeed,

    /// Workers in the parallel substream pass (0 skips it)
    #[arg(long, default_value = "0")]
    workers: usize,

    /// Draws per worker in the parallel pass
    #[arg(long, default_value = "10000")]
    draws: usize,

    /// Write timings to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One timing result.
#[derive(Debug)]
struct Row {
    engine: &'static str,
    iterations: usize,
    millis: u128,
    junk: u64,
}

fn bench_derive<E>(engine: &'static str, parent: &E, iterations: usize) -> Row
where
    E: Derivable + RngCore,
{
    let dist = Uniform::new_inclusive(0u64, u64::MAX);
    let mut junk = 0u64;

    let start = Instant::now();
    for i in 0..iterations {
        let mut child = derive(parent, i as u64);
        junk = junk.wrapping_add(dist.sample(&mut child));
    }
    let millis = start.elapsed().as_millis();

    Row { engine, iterations, millis, junk }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    println!("Root seed: {}", args.seed);
    println!("Generation of {} derived engines per engine kind", args.iterations);

    let seed_bytes = {
        let mut bytes = [0u8; 32];
        args.seed.root_engine().fill_bytes(&mut bytes);
        bytes
    };
    let threefry = args.seed.root_engine();
    let chacha = ChaCha20Rng::from_seed(seed_bytes);
    let pcg64 = Pcg64::from_seed(seed_bytes);
    let pcg32 = Pcg32::from_seed(seed_bytes[..16].try_into()?);
    let small = SmallRng::from_rng(args.seed.root_engine())?;

    let n = args.iterations;
    let bar = ProgressBar::new(10);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}",
    )?);

    let mut rows = Vec::with_capacity(10);
    let mut record = |row: Row| {
        bar.set_message(row.engine);
        bar.println(format!("{}: {} ms", row.engine, row.millis));
        bar.inc(1);
        rows.push(row);
    };

    record(bench_derive("chacha20", &chacha, n));
    record(bench_derive("abstract_chacha20", &erase_as_32(chacha.clone()), n));
    record(bench_derive("pcg32", &pcg32, n));
    record(bench_derive("abstract_pcg32", &erase_as_32(pcg32.clone()), n));
    record(bench_derive("pcg64", &pcg64, n));
    record(bench_derive("abstract_pcg64", &erase_as_64(pcg64.clone()), n));
    record(bench_derive("small", &small, n));
    record(bench_derive("abstract_small", &erase_as_64(small.clone()), n));
    record(bench_derive("threefry", &threefry, n));
    record(bench_derive("abstract_threefry", &erase_as_64(threefry), n));
    bar.finish_and_clear();

    let junk = rows.iter().fold(0u64, |acc, r| acc.wrapping_add(r.junk));
    println!("end junk {junk}");

    if args.workers > 0 {
        substream_pass(&args.seed, args.workers, args.draws);
    }

    if let Some(path) = &args.output {
        let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
        wtr.write_record(["engine", "iterations", "millis", "junk"])?;
        for r in &rows {
            wtr.write_record(&[
                r.engine.to_string(),
                r.iterations.to_string(),
                r.millis.to_string(),
                r.junk.to_string(),
            ])?;
        }
        wtr.flush()?;
        println!("Timings written to {}", path.display());
    }

    Ok(())
}

/// Every worker derives its own engine from the root and draws uniforms in
/// [0, 1); the per-worker means should all sit near 0.5.
fn substream_pass(seed: &RootSeed, workers: usize, draws: usize) {
    let start = Instant::now();
    let results: Vec<(u64, f64)> = (0..workers as u64)
        .into_par_iter()
        .map(|rank| {
            let mut engine = seed.worker_engine(rank);
            let first = engine.next_word();
            let mean = (0..draws).map(|_| engine.gen::<f64>()).sum::<f64>() / draws as f64;
            (first, mean)
        })
        .collect();

    let distinct: HashSet<u64> = results.iter().map(|&(first, _)| first).collect();
    let (lo, hi) = results
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, m)| (lo.min(m), hi.max(m)));

    println!(
        "Substreams: {workers} workers × {draws} draws in {} ms",
        start.elapsed().as_millis()
    );
    println!("  distinct first words: {}/{workers}", distinct.len());
    println!("  per-worker mean range: [{lo:.4}, {hi:.4}]");
}
