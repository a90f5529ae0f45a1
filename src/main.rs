mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Priority;
use logging::{init_tracing, LogSink};
use persistence::{get_data_dir, init_local_data_dir, load_tasks, log_file, save_tasks, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "petalboard")]
#[command(about = "A three-column task board for the terminal", long_about = None)]
struct Cli {
    /// Use this directory for board data instead of .petalboard lookup
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .petalboard directory in the current directory
    Init,
    /// Add a task to the To Do column
    Add {
        /// Task title
        title: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },
    /// Write a Markdown summary of the board
    Report {
        /// Output file path. Defaults to report-YYYY-MM-DD.md in the data directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            init_tracing(cli.verbose, LogSink::Stderr)?;
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&cwd)?;
            info!(dir = %data_dir.display(), "initialized board directory");
            println!("Initialized board directory: {}", data_dir.display());
            println!();
            println!("petalboard will now use this local directory for task storage.");
            println!("Run 'petalboard' to open the board.");
            Ok(())
        }
        Some(Commands::Add {
            title,
            description,
            priority,
        }) => {
            init_tracing(cli.verbose, LogSink::Stderr)?;
            let data_dir = get_data_dir(cli.data_dir.as_deref())?;
            let mut store = FileStore::open(&data_dir)?;
            let mut tasks = load_tasks(&mut store);

            match domain::add_task(&mut tasks, &title, &description, priority, Utc::now()) {
                Some(id) => {
                    save_tasks(&mut store, &tasks)?;
                    info!(%id, priority = priority.key(), "task added from the command line");
                    println!("Added task: {}", title.trim());
                    Ok(())
                }
                None => {
                    eprintln!("Error: task title cannot be empty");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Report { output }) => {
            init_tracing(cli.verbose, LogSink::Stderr)?;
            let data_dir = get_data_dir(cli.data_dir.as_deref())?;
            let mut store = FileStore::open(&data_dir)?;
            let tasks = load_tasks(&mut store);

            println!("Generating report for {} tasks...", tasks.len());
            let report_path = report::generate_report(&tasks, &Local::now(), store.dir(), output)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui(cli.data_dir, cli.verbose)
        }
    }
}

fn run_tui(data_dir: Option<PathBuf>, verbose: u8) -> Result<()> {
    let data_dir = get_data_dir(data_dir.as_deref())?;
    let store = FileStore::open(&data_dir)?;

    // The terminal belongs to the board, so logs go to a file
    let log_path = log_file(&data_dir);
    init_tracing(verbose, LogSink::File(&log_path))?;
    info!(dir = %data_dir.display(), "starting board");

    let mut app = AppState::load(Box::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        error!(error = %e, "final save failed");
        eprintln!("Error saving board: {:#}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    info!("board closed");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        let mut key_handled = false;
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if input::handle_key(app, key) {
                        return Ok(());
                    }
                    key_handled = true;
                }
            }
        }

        // Expire entry highlights
        app.tick();

        // Autosave if needed; after a failure, retry on the next key press
        if app.needs_save() && (app.last_error.is_none() || key_handled) {
            if let Err(e) = app.save() {
                error!(error = %e, "autosave failed");
                app.last_error = Some(format!("{:#}", e));
            }
        }
    }
}
