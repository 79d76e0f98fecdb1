use charstats::OutputFormat;
use charstats::core::config::{self, CliOverrides};
use charstats::core::state::App;
use charstats::shell::{self, ShellOptions};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "charstats", about = "Character stats simulator")]
struct Args {
    /// Config file to use instead of ~/.charstats/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Panel output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Refresh tick in milliseconds
    #[arg(long)]
    refresh_ms: Option<u64>,

    /// Start with the stats panel hidden
    #[arg(long)]
    hidden: bool,

    /// Log file path
    #[arg(long, default_value = "charstats.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger only: stdout belongs to the panel
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            eprintln!("warning: {e}, using defaults");
            config::StatsConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            refresh_interval_ms: args.refresh_ms,
            output: args.output,
            hide_panel: args.hidden,
        },
    );

    log::info!("charstats starting up with {:?}", resolved);

    let mut app = App::new(resolved.profile, resolved.show_panel);
    let options = ShellOptions {
        refresh_interval: resolved.refresh_interval,
        output: resolved.output,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    shell::run(&mut app, stdin, &mut stdout, options).await
}
