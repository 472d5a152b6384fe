use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::event;
use tracing_subscriber::EnvFilter;

use holdem_bot::holdem::{EquityConfig, EquityEstimator};
use holdem_bot::learning::{CutoffLearner, EPOCHS, LEARNING_RATE, TrainingConfig};

/// Train the two cutoffs of a level classifier and save them as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Training data where 1 marks hands worth playing
    lower: PathBuf,
    /// Training data where 1 marks hands worth betting
    upper: PathBuf,
    /// Where to write the level weights
    output: PathBuf,
    #[arg(long, default_value_t = EPOCHS)]
    epochs: usize,
    #[arg(long, default_value_t = LEARNING_RATE)]
    learning_rate: f64,
    /// Seed for the initial weights, random when not given
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let estimator = EquityEstimator::new(EquityConfig::default());
    let learner = CutoffLearner::new(
        &estimator,
        TrainingConfig {
            learning_rate: args.learning_rate,
            epochs: args.epochs,
        },
    );

    let learned = learner.learn_levels(&args.lower, &args.upper, &mut rng);
    let (classifier, [lower, upper]) = match learned {
        Ok(result) => result,
        Err(error) => {
            event!(tracing::Level::ERROR, %error, "Unable to train");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = classifier.save(&args.output) {
        event!(
            tracing::Level::ERROR,
            path = %args.output.display(),
            %error,
            "Unable to save weights"
        );
        return ExitCode::FAILURE;
    }

    event!(
        tracing::Level::INFO,
        path = %args.output.display(),
        lower_error = ?lower.best_error(),
        upper_error = ?upper.best_error(),
        "Saved level weights"
    );
    ExitCode::SUCCESS
}
