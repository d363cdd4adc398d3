use chatpane::core::config;
use chatpane::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "chatpane", about = "Multi-room terminal chat interface")]
struct Args {
    /// Nickname used for your own messages
    #[arg(short, long)]
    nick: Option<String>,

    /// Room to join on startup (repeatable)
    #[arg(short, long = "room")]
    rooms: Vec<String>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; falling back to defaults");
            config::ChatpaneConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.nick.as_deref(),
        &args.rooms,
        args.log_file.as_deref(),
    );

    // Initialize file logger - the terminal itself belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Chatpane starting up as {}", resolved.nickname);

    tui::run(resolved)
}
