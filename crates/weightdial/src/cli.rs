use clap::Parser;
use dialkit::ScaleConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weightdial", version, about, long_about = None)]
pub struct Cli {
    /// Lowest selectable value (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Highest selectable value (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Value shown before the first drag (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<i32>,

    /// Read this config file instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the default config file, print its path and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    pub fn apply(&self, config: &mut ScaleConfig) {
        let range = &mut config.range;
        range.min = self.min.unwrap_or(range.min);
        range.max = self.max.unwrap_or(range.max);
        range.initial = self.initial.unwrap_or(range.initial);
    }
}
