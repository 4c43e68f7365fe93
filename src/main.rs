use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::Result;
use color_eyre::eyre::eyre;

use proctop::app::App;
use proctop::config::Config;
use proctop::dashboard;
use proctop::event::CrosstermInput;
use proctop::logging;

#[derive(Parser)]
#[command(name = "proctop", version, about = "Terminal process monitor")]
struct Cli {
    /// Seconds between refreshes, clamped to 1..=30
    #[arg(short, long, allow_negative_numbers = true)]
    interval: Option<i64>,

    /// Initial sort column: cpu, mem or pid
    #[arg(short, long)]
    sort: Option<String>,

    /// Write structured JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let rendered = err.to_string();
            eprintln!("{}", rendered.lines().next().unwrap_or("error: invalid arguments"));
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    color_eyre::install()?;

    let config = Config::new(cli.interval, cli.sort.as_deref(), cli.log_file);
    if let Some(path) = &config.log_file {
        logging::init_file_logging(path)?;
    }
    tracing::info!(
        interval = config.refresh_interval.seconds(),
        sort = config.sort_mode.label(),
        "starting"
    );

    let mut terminal =
        ratatui::try_init().map_err(|e| eyre!("cannot initialize terminal: {e}"))?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut app = App::new(config);
    let mut input = CrosstermInput::new();
    let result = dashboard::run(&mut terminal, &mut app, &mut input).await;

    ratatui::restore();
    tracing::info!("stopped");

    result
}
