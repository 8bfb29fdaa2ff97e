use std::fs;
use std::panic;
use std::path;

use anyhow::Result;
use phrasedeck_term::application::cli;
use phrasedeck_term::configuration::Config;
use phrasedeck_term::configuration::ConfigKey;
use phrasedeck_term::destruct_terminal_for_panic;
use phrasedeck_term::start_loop;
use tracing_appender::non_blocking::WorkerGuard;

fn setup_panic_handler() {
    panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}

// The guard must stay alive until exit or buffered log lines are dropped.
fn setup_tracing() -> Result<WorkerGuard> {
    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let log_dir = log_file
        .parent()
        .map(path::Path::to_path_buf)
        .unwrap_or_else(|| path::PathBuf::from("."));
    fs::create_dir_all(&log_dir)?;
    let file_name = log_file
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_else(|| "phrasedeck.log".into());

    let appender = tracing_appender::rolling::never(log_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    return Ok(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let cmd = cli::build();
    let matches = cmd.clone().get_matches();
    Config::load(cmd, vec![&matches]).await?;

    let _guard = setup_tracing()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting phrasedeck");

    start_loop().await?;

    return Ok(());
}
