mod config;
mod dsp;
mod types;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use config::SignalConfig;
use types::parameters::{WaveformParameters, DEFAULT_INTERVAL_SECONDS};
use types::waveform::Waveform;
use ui::{app::App, events, render};

/// Sine, square, sawtooth and triangle sweep generator
#[derive(Parser, Debug)]
#[command(name = "waveform-generator")]
#[command(about = "Generate and plot one sweep of each basic waveform", long_about = None)]
struct Args {
    /// Amplitude [default: 1.0]
    #[arg(long = "am", allow_negative_numbers = true)]
    amplitude: Option<f64>,

    /// Frequency [default: 1.0]
    #[arg(long = "fr", allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Phase as a fraction of one period [default: 0.0]
    #[arg(long = "ph", allow_negative_numbers = true)]
    phase: Option<f64>,

    /// Parameter file (YAML); flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<std::path::PathBuf>,

    /// Print samples to stdout instead of plotting
    #[arg(short = 'p', long = "print")]
    print: bool,
}

impl Args {
    /// Merge config file (if any) and flags into the final parameters
    fn parameters(&self) -> Result<WaveformParameters> {
        let config = match &self.config {
            Some(path) => SignalConfig::load(path)?,
            None => SignalConfig::default(),
        };

        let config = config.with_overrides(self.amplitude, self.frequency, self.phase);
        config.validate().context("Invalid command line parameters")?;

        Ok(config.parameters())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    let params = args.parameters()?;
    log::info!(
        "Generating sweeps: amplitude={} frequency={} phase={}",
        params.amplitude,
        params.frequency,
        params.phase
    );

    let app = App::new(params, DEFAULT_INTERVAL_SECONDS)?;
    if app.sample_count() == 0 {
        log::warn!("Degenerate sweep: frequency {} yields no samples", params.frequency);
    }

    if args.print {
        print_sweeps(&app);
        return Ok(());
    }

    run_plot(app)
}

/// Write one line per timestamp with every waveform's value
fn print_sweeps(app: &App) {
    let header: Vec<&str> = Waveform::ALL.iter().map(|wf| wf.name()).collect();
    println!("ts\t{}", header.join("\t"));

    for ts in 0..app.sample_count() {
        let values: Vec<String> = app
            .traces
            .iter()
            .map(|trace| format!("{:.6}", trace.points[ts].1))
            .collect();
        println!("{}\t{}", ts, values.join("\t"));
    }
}

/// Plot the sweeps in the terminal until the user quits
fn run_plot(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run UI loop
    let result = run_ui_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run UI loop
fn run_ui_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| render::render(f, app))?;

        // Handle events
        events::handle_events(app)?;

        // Check if should quit
        if app.should_quit {
            break;
        }

        // Small sleep to reduce CPU usage
        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
