use anyhow::{Context, Result};
use datasplit::pipeline::{SplitConfig, run};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    // An optional JSON file replaces the built-in settings
    let config = match std::env::args().nth(1) {
        Some(path) => SplitConfig::from_json_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => SplitConfig::default(),
    };
    info!("Splitting {}", config.input.display());

    let report = run(&config).context("splitting dataset")?;

    println!(
        "train: {} rows, test: {} rows",
        report.train_rows, report.test_rows
    );
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    if let Some(accuracy) = report.accuracy {
        println!("knn accuracy: {:.2}%", accuracy * 100.0);
    }

    Ok(())
}
