// ============================================================================
// Draftboard : cotes de la draft NFL dans le terminal
// ============================================================================
// Trois vues routées (draft board, joueur, rankings) alimentées par l'API
// des cotes. L'UI tourne dans le thread principal, les requêtes HTTP dans
// un worker thread qui possède le runtime tokio.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : résultats -> rendu -> événement -> tick
// 3. Async dans sync : le worker reçoit des FetchRequest et spawn une tâche par requête
// 4. Channels mpsc : FetchRequest vers le worker, FetchOutcome vers l'UI
// ============================================================================

use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

use draftboard::api::OddsApiClient;
use draftboard::app::{execute as execute_request, App, FetchOutcome, FetchRequest};
use draftboard::cli::Args;
use draftboard::config::Config;
use draftboard::router::Route;
use draftboard::ui::{events::Event, render, EventHandler};

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier, rotation quotidienne
// ============================================================================

/// Initialise le logging vers `<log_dir>/draftboard.log`
///
/// ```bash
/// tail -f logs/draftboard.log
/// RUST_LOG=draftboard=trace cargo run
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "draftboard.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour draftboard, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draftboard=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.apply(Config::from_env()?);

    init_logging(&config.log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(base_url = %config.base_url, route = %args.route, "Draftboard starting up");

    let client = OddsApiClient::new(config.client_config())
        .context("Impossible de construire le client HTTP")?;
    let runtime = Runtime::new().context("Impossible de créer le runtime tokio")?;

    // Channels : requêtes vers le worker, résultats vers l'UI
    let (command_tx, command_rx) = mpsc::channel::<FetchRequest>();
    let (result_tx, result_rx) = mpsc::channel::<FetchOutcome>();

    info!("Spawning background worker thread");
    let worker = spawn_background_worker(runtime, client, command_rx, result_tx);

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::new().with_refetch_interval(config.refetch_interval);
    app.route = args.route.clone();

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, &command_tx, &result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    // Ferme le channel : le worker sort de sa boucle
    drop(command_tx);
    if worker.join().is_err() {
        error!("Worker thread panicked");
    }

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Thread + runtime tokio
// - Le thread possède le runtime (Runtime est Send)
// - Une tâche tokio par requête : les vues se chargent en parallèle
// - Chaque tâche renvoie son FetchOutcome par le channel
// ============================================================================

fn spawn_background_worker(
    runtime: Runtime,
    client: OddsApiClient,
    command_rx: mpsc::Receiver<FetchRequest>,
    result_tx: mpsc::Sender<FetchOutcome>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        // recv() échoue quand l'UI a fermé le channel
        while let Ok(request) = command_rx.recv() {
            debug!(ticket = ?request.ticket, kind = ?request.kind, "Worker received request");

            let client = client.clone();
            let result_tx = result_tx.clone();

            runtime.spawn(async move {
                let outcome = execute_request(&client, request).await;
                if result_tx.send(outcome).is_err() {
                    debug!("UI gone, dropping outcome");
                }
            });
        }

        info!("Worker thread exiting (channel closed)");
    })
}

// ============================================================================
// Event Loop Principal
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    command_tx: &mpsc::Sender<FetchRequest>,
    result_rx: &mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    send_all(command_tx, app.start(Instant::now()))?;

    while app.is_running() {
        // ========================================
        // 0. RÉSULTATS : intègre tout ce que le worker a renvoyé
        // ========================================
        loop {
            match result_rx.try_recv() {
                Ok(outcome) => {
                    app.apply(outcome, Instant::now());
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    anyhow::bail!("Worker thread disconnected");
                }
            }
        }

        // ========================================
        // 1. RENDER
        // ========================================
        terminal.draw(|frame| render(frame, app))?;

        // ========================================
        // 2. INPUT
        // ========================================
        match events.next() {
            Ok(event) => {
                let requests = handle_event(app, event, Instant::now());
                send_all(command_tx, requests)?;
            }
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }

        // ========================================
        // 3. UPDATE : refetch périodique
        // ========================================
        send_all(command_tx, app.tick(Instant::now()))?;
    }

    Ok(())
}

fn send_all(command_tx: &mpsc::Sender<FetchRequest>, requests: Vec<FetchRequest>) -> Result<()> {
    for request in requests {
        command_tx
            .send(request)
            .context("Le worker thread ne reçoit plus de requêtes")?;
    }
    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et retourne les requêtes à envoyer au worker
///
/// CONCEPT RUST : Pattern matching avec guards
/// - Le mode input capture toutes les touches
/// - Toute touche autre que 'q' annule la confirmation de quit
fn handle_event(app: &mut App, event: Event, now: Instant) -> Vec<FetchRequest> {
    use draftboard::ui::events::{
        get_name_char, is_backspace_event, is_board_event, is_down_event, is_enter_event,
        is_escape_event, is_quit_event, is_rankings_event, is_retry_event, is_search_event,
        is_up_event,
    };

    if let Event::Tick = event {
        return Vec::new();
    }

    // ========================================
    // Input Mode : saisie d'un nom de joueur
    // ========================================
    if app.is_in_input_mode() {
        if is_escape_event(&event) {
            debug!("User cancelled input");
            app.cancel_input();
        } else if is_enter_event(&event) {
            let name = app.submit_input().trim().to_string();
            if !name.is_empty() {
                info!(player = %name, "User opened player from input");
                return app.navigate(Route::Player(name), now);
            }
            debug!("Empty player name, ignoring");
        } else if is_backspace_event(&event) {
            app.backspace();
        } else if let Some(c) = get_name_char(&event) {
            app.append_char(c);
        }
        return Vec::new();
    }

    if is_quit_event(&event) {
        if app.is_awaiting_quit_confirmation() {
            info!("User confirmed quit");
            app.quit();
        } else {
            info!("User requested quit (awaiting confirmation)");
            app.request_quit();
        }
        return Vec::new();
    }

    app.cancel_quit();

    match event {
        Event::Key(_) if is_board_event(&event) => app.navigate(Route::DraftBoard, now),
        Event::Key(_) if is_rankings_event(&event) => app.navigate(Route::Rankings, now),
        Event::Key(_) if is_search_event(&event) => {
            app.start_input("Player: ".to_string());
            Vec::new()
        }
        Event::Key(_) if is_retry_event(&event) => app.retry(now),
        Event::Key(_) if is_escape_event(&event) => app.back(now),
        Event::Key(_) if is_up_event(&event) => {
            app.navigate_up();
            Vec::new()
        }
        Event::Key(_) if is_down_event(&event) => {
            app.navigate_down();
            Vec::new()
        }
        Event::Key(_) if is_enter_event(&event) => match app.selected_player() {
            Some(name) => {
                info!(player = %name, "User opened player");
                app.navigate(Route::Player(name), now)
            }
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Impossible d'activer le raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Impossible d'initialiser le terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
