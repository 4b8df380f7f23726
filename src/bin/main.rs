use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lutmorton::{decode, encode, NormalizedKey};
use morton_key::{exhaustive_key_check, round_trip, sweep, SweepConfig, Verdict};

fn main() -> Result<()> {
    let args = Args::parse();

    debug_logs::init(args.verbose);

    match args.command {
        Command::Map { x, y } => {
            println!("{}", encode(x, y));
        }
        Command::ReverseMap { key } => {
            let (x, y) = decode(key);
            println!("({x}, {y})");
        }
        Command::RoundTrip { x, y } => {
            let trip = round_trip(x, y)?;

            println!("map({x}, {y}) = {}", trip.key);
            println!("reverse_map({}) = ({}, {})", trip.key, trip.decoded.0, trip.decoded.1);
            println!("{}", trip.verdict);

            if trip.verdict == Verdict::Ko {
                bail!("({x}, {y}) did not survive the round trip");
            }
        }
        Command::Sweep {
            seed,
            samples,
            exhaustive,
        } => {
            let report = sweep(&SweepConfig { seed, samples })?;
            log::info!(
                "checked {} pairs (seed {seed}), {} failed",
                report.checked,
                report.failures.len()
            );

            if exhaustive {
                log::info!("checking every 32-bit code");
                let mismatches = exhaustive_key_check();
                log::info!("{mismatches} codes did not survive normalization");

                if mismatches != 0 {
                    bail!("{mismatches} codes lost to normalization");
                }
            }

            if !report.passed() {
                bail!("{} pairs did not survive the round trip", report.failures.len());
            }

            println!("{}", Verdict::Ok);
        }
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Maps 16-bit coordinate pairs to Z-order keys in [0, 1] and back")]
struct Args {
    /// log debug output. `RUST_LOG` overrides the level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the key for a coordinate pair
    Map { x: u16, y: u16 },

    /// print the coordinate pair behind a key
    ReverseMap {
        #[arg(allow_hyphen_values = true)]
        key: NormalizedKey,
    },

    /// map, print, parse and reverse a pair, then print OK or KO
    RoundTrip { x: u16, y: u16 },

    /// round trip the boundary pairs plus a seeded sample of random pairs
    Sweep {
        #[arg(long, default_value_t = SweepConfig::default().seed)]
        seed: u64,

        #[arg(long, default_value_t = SweepConfig::default().samples)]
        samples: usize,

        /// also check normalization for all 2^32 codes
        #[arg(long)]
        exhaustive: bool,
    },
}
