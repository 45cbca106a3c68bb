use clap::Parser;
use dialkit::ScaleDial;
use relm4::prelude::*;
use weightdial::cli::Cli;
use weightdial::config;
use weightdial::gui::app::AppModel;
use weightdial::sys::runtime;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let scale = config::load_or_default(&cli);
    let dial = ScaleDial::new(scale)?;
    log::info!(
        "Dial range [{}, {}], starting at {}",
        scale.range.min,
        scale.range.max,
        scale.range.initial
    );

    let (tx, rx) = async_channel::bounded(32);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::get_config_path()?,
    };
    runtime::start_background_services(config_path, tx);

    // GTK must not see our own flags
    let app = RelmApp::new("org.dicedev.weightdial").with_args(Vec::new());
    app.run::<AppModel>((dial, cli, rx));
    Ok(())
}
