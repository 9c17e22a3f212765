//! Main application entry point (native).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "turtlepad", about = "Run the TurtlePad demo headlessly and dump the result")]
struct Cli {
    /// Canvas width in pixels.
    #[arg(long, env = "TURTLEPAD_WIDTH")]
    width: Option<f64>,

    /// Canvas height in pixels.
    #[arg(long, env = "TURTLEPAD_HEIGHT")]
    height: Option<f64>,

    /// JSON file with library settings.
    #[arg(long, env = "TURTLEPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the JSON snapshot. Defaults to stdout.
    #[arg(long, env = "TURTLEPAD_OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting TurtlePad");

    let result = turtlepad_app::load_config(cli.config.as_deref(), cli.width, cli.height)
        .and_then(|config| turtlepad_app::run(&config))
        .and_then(|snapshot| turtlepad_app::write_snapshot(&snapshot, cli.output.as_deref()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("turtlepad: {e}");
            ExitCode::FAILURE
        }
    }
}
