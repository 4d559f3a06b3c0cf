use std::io::IsTerminal;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tokio_util::sync::CancellationToken;

use digitlens::config::{self, OutputFormat};
use digitlens::engine::AnalysisOptions;
use digitlens::loader;
use digitlens::report::{AnalysisMode, render_json, render_table};
use digitlens::worker::{AnalysisRequest, AnalysisResponse, spawn_worker};

/// Benford's Law first-digit analyzer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Tests numeric datasets against Benford's Law with a chi-squared verdict"
)]
struct Args {
    /// Input file of whitespace-separated numeric tokens (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Where the tokens came from; selects interpretive wording only
    #[arg(long, value_enum, default_value_t = AnalysisMode::Text)]
    mode: AnalysisMode,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Tokens folded per scheduling turn (overrides the config file)
    #[arg(long)]
    batch_size: Option<NonZeroUsize>,

    /// p-value threshold for the anomalous verdict (overrides the config file)
    #[arg(long)]
    significance: Option<f64>,
}

fn main() -> Result<()> {
    // Writes to /tmp/digitlens-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/digitlens-debug.log")
            .expect("Failed to open /tmp/digitlens-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DIGITLENS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so CLI overrides layer on top of it
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let options = analysis_options(&args, &config_result.config)?;
    let format = args.format.unwrap_or(config_result.config.output.format);

    let tokens = match &args.input {
        Some(path) => loader::load_file(path)?,
        None => loader::load_stdin()?,
    };

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(request_rx, response_tx);

    request_tx
        .send(AnalysisRequest {
            tokens,
            options,
            mode: args.mode,
            request_id: 1,
            cancel_token: CancellationToken::new(),
        })
        .map_err(|_| eyre!("analysis worker is not running"))?;

    // Progress only belongs on an interactive stderr
    let show_progress = std::io::stderr().is_terminal();

    loop {
        match response_rx.recv() {
            Ok(AnalysisResponse::Progress { progress, .. }) => {
                if show_progress {
                    eprint!("\r{}", progress);
                }
            }
            Ok(AnalysisResponse::Complete {
                histogram,
                result,
                mode,
                ..
            }) => {
                if show_progress {
                    eprintln!();
                }
                match format {
                    OutputFormat::Table => print!("{}", render_table(&histogram, &result, mode)),
                    OutputFormat::Json => println!("{}", render_json(&histogram, &result, mode)?),
                }
                break;
            }
            Ok(AnalysisResponse::Cancelled { .. }) => {
                if show_progress {
                    eprintln!();
                }
                return Err(eyre!("analysis was cancelled"));
            }
            Ok(AnalysisResponse::Error { message, .. }) => {
                if show_progress {
                    eprintln!();
                }
                return Err(eyre!(message));
            }
            Err(_) => return Err(eyre!("analysis worker disconnected")),
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== DIGITLENS DEBUG SESSION ENDED ===");

    Ok(())
}

/// Merge CLI overrides onto the loaded config and validate the result.
fn analysis_options(args: &Args, config: &config::Config) -> Result<AnalysisOptions> {
    let significance_level = args
        .significance
        .unwrap_or(config.analysis.significance_level);
    if significance_level <= 0.0 || significance_level >= 1.0 {
        return Err(eyre!(
            "significance level must be strictly between 0 and 1, got {}",
            significance_level
        ));
    }

    Ok(AnalysisOptions {
        batch_size: args.batch_size.unwrap_or(config.analysis.batch_size),
        significance_level,
    })
}
