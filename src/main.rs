// Trains a perceptron on a CSV of `x1,x2,label` rows and prints the
// decision boundary found after each epoch.
//
//   cargo run -- data.csv [config.json]
use std::process::ExitCode;
use std::sync::mpsc;

use nn_primer::{data::load_points_csv, train_loop, BoundaryLine, TrainConfig};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(data_path) = args.first() else {
        eprintln!("usage: nn-primer <data.csv> [config.json]");
        return ExitCode::from(2);
    };

    match run(data_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(data_path: &str, config_path: Option<&str>) -> nn_primer::Result<()> {
    let dataset = load_points_csv(data_path)?;
    let mut config = match config_path {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };

    let (tx, rx) = mpsc::channel();
    config.progress_tx = Some(tx);

    println!(
        "Training on {} points: learn_rate = {}, epochs = {}, seed = {}",
        dataset.len(), config.learn_rate, config.num_epochs, config.seed
    );

    let boundary_lines = train_loop(&dataset, &config, &mut config.rng())?;
    drop(config);

    for stats in rx {
        match stats.boundary {
            BoundaryLine::Sloped { slope, intercept } => println!(
                "Epoch {}/{}: {} corrections, x2 = {:.4} * x1 + {:.4}",
                stats.epoch, stats.total_epochs, stats.corrections, slope, intercept
            ),
            other => println!(
                "Epoch {}/{}: {} corrections, degenerate boundary {:?}",
                stats.epoch, stats.total_epochs, stats.corrections, other
            ),
        }
    }

    println!("{}", serde_json::to_string_pretty(&boundary_lines)?);
    Ok(())
}
