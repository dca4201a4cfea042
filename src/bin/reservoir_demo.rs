use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use reservoir_sampler::{Offer, ReservoirSampler, Result};

/// Stream the integers 1..=COUNT through a reservoir and narrate the sample
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// reservoir size k
    #[arg(long, env = "RESERVOIR_SIZE", default_value_t = 10)]
    size: usize,

    /// number of stream items
    #[arg(long, env = "RESERVOIR_COUNT", default_value_t = 1000)]
    count: u64,

    /// seed for the index source; entropy when omitted
    #[arg(long, env = "RESERVOIR_SEED")]
    seed: Option<u64>,

    /// processed counts that are always reported
    #[arg(
        long,
        env = "RESERVOIR_MILESTONES",
        value_delimiter = ',',
        default_value = "10,50,100,500,1000"
    )]
    milestones: Vec<u64>,
}

/// Final sample plus the processed counts at which the sample was logged.
#[derive(Debug)]
struct Narration {
    sample: Vec<u64>,
    reported: Vec<u64>,
}

/// A line is logged whenever the reservoir changed, and at every milestone.
fn should_report(offer: Offer, processed: u64, milestones: &[u64]) -> bool {
    offer.is_kept() || milestones.contains(&processed)
}

fn run(args: &Args) -> Result<Narration> {
    let mut sampler = match args.seed {
        Some(s) => ReservoirSampler::with_seed(args.size, s)?,
        None => ReservoirSampler::new(args.size)?,
    };

    let mut reported = Vec::new();
    for item in 1..=args.count {
        let offer = sampler.offer(item);
        let processed = sampler.items_processed();
        if should_report(offer, processed, &args.milestones) {
            info!(
                "Processed {} elements. S= {:?}",
                processed,
                sampler.current_sample()
            );
            reported.push(processed);
        }
    }

    Ok(Narration {
        sample: sampler.into_sample(),
        reported,
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(Narration { sample, .. }) => {
            info!(
                "Final sample of {} from {} items: {:?}",
                sample.len(),
                args.count,
                sample
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
