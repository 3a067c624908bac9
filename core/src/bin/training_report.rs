use anyhow::{Context, Result};

use training_core::cli::{print_reports, sample_workouts};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let workouts = sample_workouts();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_reports(&workouts, &mut out).context("writing training reports to stdout")?;
    Ok(())
}
