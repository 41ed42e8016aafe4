//! Coleta - Collection Point Location Picker
//!
//! A terminal screen for choosing a state and city from the IBGE
//! localidades directory. On confirm the choice is printed as a JSON line
//! for the collection points screen to pick up.

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use coleta::application::{App, Navigator};
use coleta::domain::{Destination, DirectoryService, FetchOutcome};
use coleta::infrastructure::{init_logging, Config, FetchWorker, IbgeDirectory, JsonLineNavigator};
use coleta::presentation::{render_ui, InputHandler};

/// Everything the event loop reacts to, from any producer thread.
enum AppEvent {
    Key(KeyEvent),
    Fetched(FetchOutcome),
}

impl From<FetchOutcome> for AppEvent {
    fn from(outcome: FetchOutcome) -> Self {
        AppEvent::Fetched(outcome)
    }
}

/// Entry point for the location picker.
///
/// Parses the command line, sets up logging and the terminal, runs the
/// screen, and forwards the chosen location once the terminal is restored.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the HTTP client cannot
/// be built, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config.log_path())?;
    let directory = Arc::new(IbgeDirectory::new(&config.base_url, config.timeout())?);
    tracing::info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "starting location picker");

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());
    let res = run_app(&mut terminal, directory, tx, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(destination)) => JsonLineNavigator::new(io::stdout()).navigate(destination)?,
        Ok(None) => tracing::info!("closed without choosing a location"),
        Err(err) => {
            tracing::error!(%err, "terminal failure");
            println!("{err:?}");
        }
    }

    Ok(())
}

/// Restores the terminal before the default panic output is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Forwards terminal key events onto the event channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

/// Main event loop.
///
/// Dispatches queued lookups, redraws, then blocks on the next key press or
/// lookup result. Lookup results are posted on `tx`; key events are expected
/// on the same channel. Returns the destination if the user confirmed, or
/// `None` if they quit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    directory: Arc<S>,
    tx: mpsc::Sender<AppEvent>,
    rx: mpsc::Receiver<AppEvent>,
) -> io::Result<Option<Destination>>
where
    B: Backend,
    S: DirectoryService + Send + Sync + 'static,
{
    let worker = FetchWorker::new(directory, tx);
    let mut app = App::new();

    loop {
        for request in app.take_requests() {
            worker.dispatch(request);
        }

        terminal.draw(|f| render_ui(f, &app))?;

        if let Some(destination) = app.take_destination() {
            return Ok(Some(destination));
        }
        if app.should_quit {
            return Ok(None);
        }

        match rx.recv() {
            Ok(AppEvent::Key(key)) => {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(&mut app, key.code, key.modifiers);
                }
            }
            Ok(AppEvent::Fetched(outcome)) => app.apply_outcome(outcome),
            Err(_) => return Ok(None),
        }
    }
}
