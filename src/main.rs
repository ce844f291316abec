use clap::{Parser, Subcommand};

use prng_breaker::lcg::{self, Params};
use prng_breaker::mersenne::{self, mt19937};

#[derive(Parser)]
#[command(version, about = "State and parameter recovery attacks on weak PRNGs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clone an MT19937 generator from 624 consecutive outputs
    MtClone {
        /// Seed of the attacked generator (random if omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of future outputs to predict and check
        #[arg(short, long, default_value_t = 1000)]
        predict: usize,
    },
    /// Recover an LCG seed with known parameters
    LcgKnown {
        #[arg(short, long)]
        modulus: u64,

        #[arg(short = 'a', long)]
        multiplier: u64,

        #[arg(short = 'c', long)]
        increment: u64,

        #[arg(short, long)]
        seed: u64,

        /// Length of the observed sequence
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,
    },
    /// Recover LCG parameters and seed from an observed sequence
    LcgBlind {
        /// Observed consecutive terms, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        values: Vec<u64>,

        /// Number of terms to walk back from the last one (defaults to the sequence length)
        #[arg(short = 'n', long)]
        steps: Option<usize>,
    },
}

fn mt_clone(seed: u32, predict: usize) -> Result<(), prng_breaker::Error> {
    let mut generator = mt19937::Mt19937::new(seed);

    let captured: Vec<u32> = generator.by_ref().take(mt19937::N).collect();
    let mut recovered = mersenne::reconstruct_from_slice(&captured)?;

    if recovered.state() != generator.state() {
        log::warn!("reconstructed state differs from the attacked generator");
    }

    // replay the captured window, then predict new outputs
    mersenne::verify_prediction(&mut recovered, &captured)?;

    let observed: Vec<u32> = generator.by_ref().take(predict).collect();
    mersenne::verify_prediction(&mut recovered, &observed)?;

    println!(
        "cloned MT19937 (seed {}) and predicted {} outputs",
        seed, predict
    );

    Ok(())
}

fn lcg_known(params: Params, seed: u64, count: usize) -> Result<(), prng_breaker::Error> {
    let sequence = lcg::generate(&params, seed, count);
    println!("sequence: {:?}", sequence);

    let last = sequence.last().copied().unwrap_or(seed);
    let recovered = lcg::walk_back(last, &params, count)?;
    println!("recovered seed: {}", recovered);
    println!("regenerated: {:?}", lcg::generate(&params, recovered, count));

    Ok(())
}

fn lcg_blind(values: &[u64], steps: usize) -> Result<(), prng_breaker::Error> {
    let recovered = lcg::recover(values, steps)?;
    let params = recovered.params;

    println!(
        "m: {}, a: {}, c: {}, seed: {}",
        params.modulus(),
        params.multiplier(),
        params.increment(),
        recovered.seed
    );

    let regenerated = lcg::generate(&params, recovered.seed, values.len());
    if regenerated[..] != values[..] {
        log::warn!("recovered parameters do not reproduce the observed sequence");
    }
    println!("regenerated: {:?}", regenerated);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::MtClone { seed, predict } => {
            let seed = seed.unwrap_or_else(rand::random::<u32>);
            log::info!("attacking MT19937 seeded with {}", seed);
            mt_clone(seed, predict)?;
        }
        Command::LcgKnown {
            modulus,
            multiplier,
            increment,
            seed,
            count,
        } => {
            let params = Params::new(modulus, multiplier, increment)?;
            lcg_known(params, seed, count)?;
        }
        Command::LcgBlind { values, steps } => {
            let steps = steps.unwrap_or(values.len());
            lcg_blind(&values, steps)?;
        }
    }

    Ok(())
}
