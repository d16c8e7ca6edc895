// ABOUTME: Demo binary for termtour
//
// Binary: termtour
// Usage: termtour [OPTIONS]
// - No options: runs the built-in demo tour
// - --tour <FILE>: runs a tour defined in a TOML file
// - --no-bell: silence advance cues

#![allow(missing_docs)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ratatui::style::Color;

use termtour::app::run_tour;
use termtour::components::Backdrop;
use termtour::config::load_tour;
use termtour::feedback::NoFeedback;
use termtour::flow::{Screen, TourConfig};
use termtour::theme::Theme;
use termtour::Tour;

#[derive(Parser, Debug)]
#[command(name = "termtour", about = "Paginated onboarding tours for the terminal")]
struct Cli {
    /// Path to a TOML tour definition
    #[arg(long)]
    tour: Option<PathBuf>,

    /// Silence the advance cues
    #[arg(long)]
    no_bell: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = Cli::parse();

    let config = match &args.tour {
        Some(path) => load_tour(path)?,
        None => demo_tour(),
    };

    let completed = Arc::new(AtomicBool::new(false));
    let completed_flag = Arc::clone(&completed);

    let mut tour = Tour::new(config, move || {
        completed_flag.store(true, Ordering::SeqCst);
    })?;
    if args.no_bell {
        tour = tour.with_dispatcher(NoFeedback);
    }

    run_tour(&mut tour).await?;

    if completed.load(Ordering::SeqCst) {
        println!("Tour complete. Enjoy!");
    } else {
        println!("Tour abandoned.");
    }

    Ok(())
}

/// The built-in three-screen demo.
fn demo_tour() -> TourConfig {
    let waves = vec![
        "  ~    ~~   ~  ".to_string(),
        "~~   ~    ~~   ".to_string(),
        "   ~~   ~    ~~".to_string(),
    ];

    let screens = vec![
        Screen::new("Welcome to termtour")
            .with_subtitle("A tiny onboarding flow for terminal apps."),
        Screen::new("Screens are just records")
            .with_subtitle("Title, optional subtitle, optional backdrop. Order matters.")
            .with_backdrop(Backdrop::art(waves, Color::Rgb(100, 149, 237)).with_shade(0.6)),
        Screen::new("That's it")
            .with_subtitle("Press Enter one more time to finish."),
    ];

    TourConfig::new(Theme::default(), screens)
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".termtour").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".termtour/logs"));

    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_file = log_dir.join(format!(
        "termtour-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "termtour=info".into()),
        )
        .init();
}

/// Restore the terminal before the default panic output so the message is
/// readable instead of being swallowed by the alternate screen.
fn setup_panic_handler() {
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
