//! Interactive Chart.js data generator
//!
//! Prompts for a chart kind (or takes `--chart`), generates one random
//! dataset, saves it as pretty JSON in the working directory, then serves
//! a browser preview on localhost until Ctrl+C.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chartgen::errors::ChartGenError;
use chartgen::registry::ChartKind;
use chartgen::server;
use chartgen::session::Session;

#[derive(Parser, Debug)]
#[command(name = "chartgen", version, about)]
struct Args {
    /// Chart kind (menu key, kind word, or display name); skips the prompt
    #[arg(long)]
    chart: Option<String>,

    /// Number of points/categories/slices; defaults depend on the chart kind
    #[arg(long)]
    count: Option<usize>,

    /// Port the preview server listens on
    #[arg(long, env = "CHARTGEN_PORT", default_value_t = 5000)]
    port: u16,

    /// Directory the JSON file is written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Do not open the preview page in a browser
    #[arg(long)]
    no_browser: bool,
}

/// How a run ended, for the final user-facing message
enum Outcome {
    /// Ran to completion (including the no-server fallback path)
    Completed,
    /// Stopped by Ctrl+C, at the prompt or during serving
    Interrupted,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args).await {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            println!("\nProgram terminated by user.");
            // The prompt's blocking stdin read cannot be cancelled; exiting
            // here keeps the runtime from waiting on it during shutdown.
            std::process::exit(0)
        }
        Err(err) => {
            println!("An unexpected error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> chartgen::Result<Outcome> {
    println!("Welcome to the Chart.js Data Generator!");
    println!("Please select the type of chart you want to generate data for:");
    for kind in ChartKind::ALL {
        println!("{}. {}", kind.key(), kind.display_name());
    }

    let kind = match &args.chart {
        Some(flag) => ChartKind::parse(flag)?,
        None => {
            // Prompt on a blocking task so Ctrl+C still wins the race
            tokio::select! {
                selection = tokio::task::spawn_blocking(|| {
                    let stdin = io::stdin();
                    select_chart_kind(&mut stdin.lock(), &mut io::stdout())
                }) => selection.map_err(io::Error::other)??,
                _ = tokio::signal::ctrl_c() => return Ok(Outcome::Interrupted),
            }
        }
    };

    let session = Session::generate(kind, args.count);

    println!("\nGenerated data for {}:", kind.display_name());
    println!("{}", session.to_json_pretty()?);

    match session.persist(&args.output_dir) {
        Ok(path) => println!("\nData saved to {}", path.display()),
        Err(err) => println!("Error saving data to file: {err}"),
    }

    println!("\nStarting web server to preview the chart...");

    if !args.no_browser {
        let url = format!("http://127.0.0.1:{}/", args.port);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if let Err(err) = webbrowser::open(&url) {
                tracing::warn!("failed to open {url} in a browser: {err}");
            }
        });
    }

    match server::serve(Arc::new(session), args.port).await {
        // Graceful shutdown means the user hit Ctrl+C
        Ok(()) => Ok(Outcome::Interrupted),
        Err(err @ ChartGenError::ServerStart { .. }) => {
            println!("Error starting web server: {err}");
            println!("You can still view the generated data in the JSON file.");
            Ok(Outcome::Completed)
        }
        Err(err) => Err(err),
    }
}

/// Prompt until the input names a valid menu key
///
/// Invalid entries are reported and re-prompted; EOF before a valid choice is
/// an error for the caller.
fn select_chart_kind(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<ChartKind> {
    loop {
        write!(output, "Enter your choice (1-8): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a chart was chosen",
            ));
        }
        match ChartKind::from_key(line.trim()) {
            Ok(kind) => return Ok(kind),
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
