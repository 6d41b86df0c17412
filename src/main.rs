// strideview: size, stride and alignment in the terminal

use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;

use strideview::cli::Cli;
use strideview::error::Result;
use strideview::ui::terminal::TerminalGuard;
use strideview::ui::App;

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("strideview=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    // The TUI owns the terminal, so logs only go to a file when asked for
    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let (layout_info, title) = cli.layout()?;
    tracing::info!(
        size = layout_info.size(),
        stride = layout_info.stride(),
        alignment = layout_info.alignment(),
        %title,
        "starting"
    );

    // Set up terminal; dropping the guard restores it on every path
    let mut guard = TerminalGuard::enter()?;

    // Create and run app
    let mut app = App::new(layout_info, title);
    let res = app.run(guard.terminal());
    drop(guard);

    res?;
    tracing::info!("exited");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
