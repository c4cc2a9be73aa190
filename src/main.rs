//! Cursor-Trajektorien-Editor, Stdio-Host.
//!
//! Referenz-Implementierung der Prozessgrenze: liest pro Stdin-Zeile einen
//! `AppIntent` als JSON, führt ihn über den Controller aus und schreibt
//! jedes `EditorEvent` als JSON-Zeile auf Stdout. Replay-Capabilities sind
//! Headless-Stubs (Systemuhr, kein UI-Baum, kein Injector); die Grenze
//! selbst ist der Zweck dieser Binary, nicht ein Browser.

use std::io::{BufRead, Write};

use cursor_trajectory_editor::{
    AppController, AppIntent, AppState, EditorEvent, EditorOptions, Notifier, ReplayEngine,
    SystemClock,
};
use cursor_trajectory_editor::replay::{NullResolver, NullSink};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Cursor-Trajektorien-Editor v{} startet (Stdio-Host)...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let editor_options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::new();
    state.options = editor_options;

    let replay = ReplayEngine::new(
        Box::new(SystemClock::new()),
        Box::new(NullResolver),
        Box::new(NullSink),
        None,
    );
    let mut controller = AppController::new(Box::new(StdoutNotifier::new()), replay);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let intent: AppIntent = match serde_json::from_str(&line) {
            Ok(intent) => intent,
            Err(e) => {
                log::warn!("Intent nicht lesbar, Zeile übersprungen: {}", e);
                continue;
            }
        };

        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
        }
    }

    log::info!("Stdin geschlossen, Host beendet sich");
    Ok(())
}

/// Notifier, der Events als JSON-Zeilen auf Stdout schreibt.
/// I/O-Fehler werden geschluckt (fire-and-forget).
struct StdoutNotifier {
    out: std::io::Stdout,
}

impl StdoutNotifier {
    fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Notifier for StdoutNotifier {
    fn notify(&mut self, event: EditorEvent) {
        let Ok(json) = serde_json::to_string(&event) else {
            log::warn!("Event nicht serialisierbar: {:?}", event);
            return;
        };
        let mut lock = self.out.lock();
        if writeln!(lock, "{}", json).is_err() || lock.flush().is_err() {
            log::warn!("Event-Ausgabe fehlgeschlagen (Stdout geschlossen?)");
        }
    }
}
