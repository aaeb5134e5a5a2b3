use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::catalog::TrackCatalog;
use crate::error::{Error, Result};
use crate::router;
use crate::store::MusicStore;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<()> {
    let (settings, config_problem) = settings::load_settings();
    let log_path = logging::init_tracing(&settings.logging);
    if let Some(problem) = config_problem {
        eprintln!("nocturne: {problem}");
        warn!("{problem}");
    }
    info!(log = ?log_path, "starting nocturne {}", env!("CARGO_PKG_VERSION"));

    let start_path = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.ui.start_path.clone());
    let start = router::resolve(&start_path).ok_or(Error::UnknownRoute(start_path))?;

    let catalog = settings.catalog().unwrap_or_else(|e| {
        eprintln!("nocturne: {e}; using the built-in catalog");
        warn!("{e}; using the built-in catalog");
        TrackCatalog::builtin()
    });
    info!(tracks = catalog.len(), page = start.name(), "catalog ready");

    let store = MusicStore::new();
    let audio_player = AudioPlayer::new(catalog.clone(), settings.audio.clone());
    let _ = audio_player.send(AudioCmd::SetVolume(store.read(|s| s.volume)));
    let mut app = App::new(catalog, store, start);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    run_result
}
