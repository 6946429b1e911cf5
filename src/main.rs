use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Simulated seconds between game ticks
    #[arg(long, default_value = "0.1")]
    tick_interval: f64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_interval_secs = cli.tick_interval;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
