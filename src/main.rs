// algotrace: step-by-step algorithm visualizer with time-travel playback

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotrace::config::{Cli, Mode, RunConfig};
use algotrace::registry::Registry;
use algotrace::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Silent unless RUST_LOG is set, so logs never draw over the TUI
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = match RunConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let registry = Registry::new();

    match config.mode {
        Mode::List => {
            for category in registry.categories() {
                println!("{}:", category);
                for d in registry.list_by_category(category) {
                    println!("  {:<24} {} ({})", d.id, d.name, d.time_complexity);
                }
            }
            return Ok(());
        }
        Mode::Search(query) => {
            let hits = registry.search(&query);
            if hits.is_empty() {
                println!("No algorithm mentions {:?}", query);
            }
            for d in hits {
                println!("  {:<24} {} [{}]", d.id, d.name, d.category);
            }
            return Ok(());
        }
        Mode::Json => {
            let steps = match registry.generate(&config.algorithm, &config.input) {
                Ok(steps) => steps,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    eprintln!("Run with --list to see the available algorithms");
                    std::process::exit(1);
                }
            };
            println!("{}", serde_json::to_string_pretty(&steps)?);
            return Ok(());
        }
        Mode::Interactive => {}
    }

    let mut app = match App::new(registry, config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --list to see the available algorithms");
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
