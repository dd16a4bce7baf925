use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snake_sim::game::{ConfigOverrides, GameConfig};
use snake_sim::logging::{self, LogTarget};
use snake_sim::modes::{HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "snake_sim")]
#[command(version, about = "Tick-driven snake simulation")]
struct Cli {
    /// Run mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Timing accumulator step per frame
    #[arg(long)]
    tick_step: Option<u8>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore 180-degree turns
    #[arg(long)]
    reversal_guard: bool,

    /// Wrap the head around the board edges
    #[arg(long)]
    wrap: bool,

    /// Never place food on the snake
    #[arg(long)]
    food_avoids_snake: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Steer toward the food in headless mode
    #[arg(long)]
    autopilot: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal with the keyboard
    Human,
    /// Simulate a fixed number of frames and print a JSON report
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        let overrides = ConfigOverrides {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            tick_step: self.tick_step,
            seed: self.seed,
            reversal_guard: self.reversal_guard,
            wrap: self.wrap,
            food_avoids_snake: self.food_avoids_snake,
        };
        let config = base.with_overrides(&overrides);

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = LogTarget::choose(cli.log_file.clone(), cli.mode == Mode::Human);
    logging::init(&target)?;

    let config = cli.game_config()?;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config, cli.autopilot);
            let report = headless_mode.run(cli.frames);
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}
