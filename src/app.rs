// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Horloge injectée : chaque méthode reçoit `now: Instant` (tests déterministes)
//
// PATTERN : App ne fait jamais d'I/O
// - navigate() / tick() / retry() renvoient des FetchRequest
// - Le worker exécute les requêtes et renvoie des FetchOutcome
// - apply() intègre le résultat, ou le jette s'il est périmé
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::api::{ApiError, OddsApiClient};
use crate::models::{DraftBoardData, OddsEntry};
use crate::query::{
    consensus_rankings_query, draft_board_query, latest_odds_query, player_odds_chart_query,
    player_odds_history_query, run_player_detail, run_query, PlayerDetail, QueryCache, QueryData,
    QueryKey, QuerySpec, RefetchScheduler, RetryPolicy, ViewState,
};
use crate::query::options::REFETCH_INTERVAL;
use crate::router::Route;
use crate::transform::{rankings_sorted, RankedPlayer};

// ============================================================================
// Vues et requêtes
// ============================================================================

/// Nombre de prospects listés (et sélectionnables) sous le graphique du draft board
pub const TOP_PROSPECTS: usize = 10;

/// Zone d'affichage alimentée par une requête
///
/// Le draft board monte deux vues : le graphique et le panneau "latest odds"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    DraftBoard,
    LatestOdds,
    Rankings,
    PlayerDetail,
}

/// Identifie une requête émise pour une vue
///
/// CONCEPT : Generation counter
/// - Chaque nouvelle requête d'une vue incrémente sa génération
/// - Une réponse dont la génération n'est plus la dernière est périmée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub view: View,
    pub generation: u64,
}

/// Ce que le worker doit aller chercher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Single(QueryKey),
    /// Historique + graphique en parallèle, succès joint
    PlayerDetail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub kind: FetchKind,
    pub retry: RetryPolicy,
}

/// Résultat renvoyé par le worker
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub ticket: Ticket,
    pub result: Result<Vec<(QueryKey, QueryData)>, ApiError>,
}

/// Exécute une requête (appelé depuis le worker thread)
pub async fn execute(client: &OddsApiClient, request: FetchRequest) -> FetchOutcome {
    let result = match &request.kind {
        FetchKind::Single(key) => run_query(client, key, request.retry)
            .await
            .map(|data| vec![(key.clone(), data)]),
        FetchKind::PlayerDetail(name) => run_player_detail(client, name, request.retry)
            .await
            .map(|detail| {
                vec![
                    (QueryKey::PlayerOdds(name.clone()), QueryData::PlayerOdds(detail.history)),
                    (QueryKey::PlayerOddsChart(name.clone()), QueryData::PlayerOddsChart(detail.chart)),
                ]
            }),
    };

    FetchOutcome {
        ticket: request.ticket,
        result,
    }
}

/// Mode de saisie
///
/// CONCEPT : Modal input mode (Vim-like)
/// - '/' ouvre la saisie d'un nom de joueur
/// - Enter valide, ESC annule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input,
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Route actuellement montée
    pub route: Route,

    /// Routes précédentes (ESC revient en arrière)
    pub history: Vec<Route>,

    pub draft_board: ViewState<Vec<DraftBoardData>>,
    pub latest_odds: ViewState<Vec<OddsEntry>>,
    pub rankings: ViewState<Vec<RankedPlayer>>,
    pub player: ViewState<PlayerDetail>,

    /// Index sélectionné dans la liste de la vue courante
    pub selected_index: usize,

    pub mode: Mode,
    pub input_buffer: String,
    pub input_prompt: String,

    /// Two-step quit : première pression de 'q' arme, la seconde quitte
    pub confirm_quit: bool,

    /// Intervalle de refetch des vues globales
    pub refetch_interval: Duration,

    cache: QueryCache<QueryKey, QueryData>,
    scheduler: RefetchScheduler<QueryKey>,
    generations: HashMap<View, u64>,
    pending: HashSet<View>,
}

impl App {
    /// Crée une App sur le draft board, rien n'est encore monté
    pub fn new() -> Self {
        Self {
            running: true,
            route: Route::DraftBoard,
            history: Vec::new(),
            draft_board: ViewState::Loading,
            latest_odds: ViewState::Loading,
            rankings: ViewState::Loading,
            player: ViewState::Loading,
            selected_index: 0,
            mode: Mode::Normal,
            input_buffer: String::new(),
            input_prompt: String::new(),
            confirm_quit: false,
            refetch_interval: REFETCH_INTERVAL,
            cache: QueryCache::new(),
            scheduler: RefetchScheduler::new(),
            generations: HashMap::new(),
            pending: HashSet::new(),
        }
    }

    pub fn with_refetch_interval(mut self, interval: Duration) -> Self {
        self.refetch_interval = interval;
        self
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========================================================================
    // Montage des routes
    // ========================================================================

    /// Monte la route initiale
    pub fn start(&mut self, now: Instant) -> Vec<FetchRequest> {
        info!(route = %self.route, "Mounting initial route");
        self.mount(now)
    }

    /// Navigue vers une route
    ///
    /// CONCEPT : Mount / unmount
    /// - Les refetch de l'ancienne route sont désenregistrés
    /// - Ceux de la nouvelle sont enregistrés
    /// - Le cache frais est servi sans requête
    pub fn navigate(&mut self, route: Route, now: Instant) -> Vec<FetchRequest> {
        if route != self.route {
            let previous = std::mem::replace(&mut self.route, route);
            self.history.push(previous);
        }
        self.remount(now)
    }

    /// Revient à la route précédente (aucun effet s'il n'y en a pas)
    pub fn back(&mut self, now: Instant) -> Vec<FetchRequest> {
        match self.history.pop() {
            Some(previous) => {
                self.route = previous;
                self.remount(now)
            }
            None => Vec::new(),
        }
    }

    /// Tick : refetch des requêtes dont l'intervalle est écoulé
    ///
    /// CONCEPT : Background refetch
    /// - L'affichage courant est conservé (pas de Loading)
    /// - Une requête déjà en vol pour la vue n'est pas doublée
    pub fn tick(&mut self, now: Instant) -> Vec<FetchRequest> {
        let mut requests = Vec::new();

        for key in self.scheduler.due(now) {
            let view = match view_for_key(&key) {
                Some(view) => view,
                None => continue,
            };

            // Requête déjà en vol : la clé reste due pour le prochain tick
            if self.pending.contains(&view) {
                debug!(query = %key, "Refetch deferred, request already in flight");
                self.scheduler.mark_due(&key, now);
                continue;
            }

            debug!(query = %key, "Background refetch");
            let retry = query_spec(&key).options.retry;
            requests.push(self.issue(view, FetchKind::Single(key), retry));
        }

        requests
    }

    /// Retry manuel : vide le cache de la route et relance ses requêtes
    pub fn retry(&mut self, now: Instant) -> Vec<FetchRequest> {
        info!(route = %self.route, "User requested retry");
        for spec in self.route_queries() {
            self.cache.invalidate(&spec.key);
        }
        self.mount(now)
    }

    fn remount(&mut self, now: Instant) -> Vec<FetchRequest> {
        // Démonte tout : seule la route courante doit être refetchée
        for key in [QueryKey::DraftBoard, QueryKey::LatestOdds, QueryKey::ConsensusRankings] {
            self.scheduler.deregister(&key);
        }
        self.selected_index = 0;
        self.cancel_quit();
        info!(route = %self.route, "Navigated");
        self.mount(now)
    }

    /// Requêtes de la route courante
    fn route_queries(&self) -> Vec<QuerySpec> {
        match &self.route {
            Route::DraftBoard => vec![
                draft_board_query().with_refetch_interval(self.refetch_interval),
                latest_odds_query().with_refetch_interval(self.refetch_interval),
            ],
            Route::Rankings => {
                vec![consensus_rankings_query().with_refetch_interval(self.refetch_interval)]
            }
            Route::Player(name) => vec![player_odds_history_query(name), player_odds_chart_query(name)],
        }
    }

    fn mount(&mut self, now: Instant) -> Vec<FetchRequest> {
        let specs = self.route_queries();

        for spec in &specs {
            if let (true, Some(interval)) = (spec.options.enabled, spec.options.refetch_interval) {
                self.scheduler.register(spec.key.clone(), interval, now);
            }
        }

        match self.route.clone() {
            Route::Player(name) => self.mount_player(name, &specs, now).into_iter().collect(),
            _ => specs
                .into_iter()
                .filter_map(|spec| self.load_single(spec, now))
                .collect(),
        }
    }

    fn load_single(&mut self, spec: QuerySpec, now: Instant) -> Option<FetchRequest> {
        let view = view_for_key(&spec.key)?;

        if let Some(data) = self.cache.get_at(&spec.key, now) {
            debug!(query = %spec.key, "Serving from cache");
            self.cancel_pending(view);
            self.present(view, vec![(spec.key, data)]);
            return None;
        }

        self.set_loading(view);
        Some(self.issue(view, FetchKind::Single(spec.key), spec.options.retry))
    }

    fn mount_player(&mut self, name: String, specs: &[QuerySpec], now: Instant) -> Option<FetchRequest> {
        // Requêtes désactivées : nom vide
        if specs.iter().any(|spec| !spec.options.enabled) {
            debug!("Player route without a name, queries disabled");
            self.cancel_pending(View::PlayerDetail);
            self.player = ViewState::Empty;
            return None;
        }

        let cached: Vec<(QueryKey, QueryData)> = specs
            .iter()
            .filter_map(|spec| self.cache.get_at(&spec.key, now).map(|data| (spec.key.clone(), data)))
            .collect();

        if cached.len() == specs.len() {
            debug!(player = %name, "Serving player detail from cache");
            self.cancel_pending(View::PlayerDetail);
            self.present(View::PlayerDetail, cached);
            return None;
        }

        let retry = specs.first().map(|spec| spec.options.retry).unwrap_or_default();
        self.set_loading(View::PlayerDetail);
        Some(self.issue(View::PlayerDetail, FetchKind::PlayerDetail(name), retry))
    }

    /// Émet une requête avec une nouvelle génération
    fn issue(&mut self, view: View, kind: FetchKind, retry: RetryPolicy) -> FetchRequest {
        let generation = self.generations.entry(view).or_insert(0);
        *generation += 1;
        self.pending.insert(view);

        FetchRequest {
            ticket: Ticket {
                view,
                generation: *generation,
            },
            kind,
            retry,
        }
    }

    /// Rend périmée toute requête en vol pour cette vue
    fn cancel_pending(&mut self, view: View) {
        if self.pending.remove(&view) {
            *self.generations.entry(view).or_insert(0) += 1;
        }
    }

    fn set_loading(&mut self, view: View) {
        match view {
            View::DraftBoard => self.draft_board = ViewState::Loading,
            View::LatestOdds => self.latest_odds = ViewState::Loading,
            View::Rankings => self.rankings = ViewState::Loading,
            View::PlayerDetail => self.player = ViewState::Loading,
        }
    }

    fn set_failed(&mut self, view: View, message: String) {
        match view {
            View::DraftBoard => self.draft_board = ViewState::Failed(message),
            View::LatestOdds => self.latest_odds = ViewState::Failed(message),
            View::Rankings => self.rankings = ViewState::Failed(message),
            View::PlayerDetail => self.player = ViewState::Failed(message),
        }
    }

    // ========================================================================
    // Intégration des résultats
    // ========================================================================

    /// Intègre le résultat d'une requête
    ///
    /// Retourne false si le résultat est périmé et a été ignoré
    pub fn apply(&mut self, outcome: FetchOutcome, now: Instant) -> bool {
        let Ticket { view, generation } = outcome.ticket;

        if self.generations.get(&view) != Some(&generation) {
            debug!(?view, generation, "Discarding stale response");
            return false;
        }

        if let (Ok(entries), Route::Player(current)) = (&outcome.result, &self.route) {
            let mismatch = entries
                .iter()
                .filter_map(|(key, _)| key.player_name())
                .any(|name| name != current);
            if view == View::PlayerDetail && mismatch {
                debug!(player = %current, "Discarding response for another player");
                return false;
            }
        }

        self.pending.remove(&view);

        match outcome.result {
            Ok(entries) => {
                for (key, data) in &entries {
                    let stale_time = query_spec(key).options.stale_time;
                    self.cache.set_at(key.clone(), data.clone(), stale_time, now);
                }
                self.present(view, entries);
                info!(?view, "View updated");
            }
            Err(err) => {
                warn!(?view, error = %err, "Query failed");
                self.set_failed(view, err.user_message());
            }
        }

        true
    }

    /// Remplace l'état d'une vue par des données fraîches
    ///
    /// CONCEPT : Empty n'est pas une erreur
    /// - Une liste vide donne ViewState::Empty
    fn present(&mut self, view: View, entries: Vec<(QueryKey, QueryData)>) {
        let mut history = None;
        let mut chart = None;

        for (_, data) in entries {
            match (view, data) {
                (View::DraftBoard, QueryData::DraftBoard(board)) => {
                    self.draft_board = ViewState::from_data(board, Vec::is_empty);
                }
                (View::LatestOdds, QueryData::LatestOdds(odds)) => {
                    self.latest_odds = ViewState::from_data(odds, Vec::is_empty);
                }
                (View::Rankings, QueryData::ConsensusRankings(map)) => {
                    self.rankings = ViewState::from_data(rankings_sorted(&map), Vec::is_empty);
                }
                (View::PlayerDetail, QueryData::PlayerOdds(data)) => history = Some(data),
                (View::PlayerDetail, QueryData::PlayerOddsChart(data)) => chart = Some(data),
                (view, data) => warn!(?view, ?data, "Payload does not match view"),
            }
        }

        if view == View::PlayerDetail {
            let name = match &self.route {
                Route::Player(name) => name.clone(),
                _ => String::new(),
            };

            self.player = match (history, chart) {
                (Some(history), Some(chart)) => ViewState::from_data(
                    PlayerDetail { name, history, chart },
                    |detail| detail.history.is_empty(),
                ),
                _ => ViewState::Failed(ApiError::Unexpected.user_message()),
            };
        }
    }

    /// Vrai si une requête est en vol
    pub fn is_fetching(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Vues montées par la route courante
    pub fn route_views(&self) -> &'static [View] {
        match self.route {
            Route::DraftBoard => &[View::DraftBoard, View::LatestOdds],
            Route::Rankings => &[View::Rankings],
            Route::Player(_) => &[View::PlayerDetail],
        }
    }

    /// Message de chargement affiché dans le header (vues de la route courante)
    pub fn loading_message(&self) -> Option<String> {
        let mut labels: Vec<&str> = self
            .route_views()
            .iter()
            .filter(|view| self.pending.contains(*view))
            .map(|view| match view {
                View::DraftBoard => "draft board",
                View::LatestOdds => "latest odds",
                View::Rankings => "rankings",
                View::PlayerDetail => "player odds",
            })
            .collect();
        if labels.is_empty() {
            return None;
        }
        labels.sort_unstable();

        Some(format!("Loading {}...", labels.join(", ")))
    }

    // ========================================================================
    // Sélection
    // ========================================================================

    /// Nombre de lignes sélectionnables dans la vue courante
    pub fn selectable_len(&self) -> usize {
        match &self.route {
            // Seul le top affiché sous le graphique est sélectionnable
            Route::DraftBoard => self
                .draft_board
                .data()
                .map_or(0, |board| board.len().min(TOP_PROSPECTS)),
            Route::Rankings => self.rankings.data().map_or(0, Vec::len),
            Route::Player(_) => self.player.data().map_or(0, |detail| detail.history.len()),
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let max_index = self.selectable_len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    /// Joueur sélectionné (draft board ou rankings)
    pub fn selected_player(&self) -> Option<String> {
        match &self.route {
            Route::DraftBoard => self
                .draft_board
                .data()
                .and_then(|board| board.get(self.selected_index))
                .map(|item| item.player_name.clone()),
            Route::Rankings => self
                .rankings
                .data()
                .and_then(|rankings| rankings.get(self.selected_index))
                .map(|ranked| ranked.name.clone()),
            Route::Player(_) => None,
        }
    }

    // ========================================================================
    // Two-step quit
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Input Mode Management
    // ========================================================================

    pub fn start_input(&mut self, prompt: String) {
        self.mode = Mode::Input;
        self.input_buffer.clear();
        self.input_prompt = prompt;
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
        self.input_buffer.clear();
        self.input_prompt.clear();
    }

    /// Récupère la valeur saisie et repasse en mode normal
    pub fn submit_input(&mut self) -> String {
        let value = std::mem::take(&mut self.input_buffer);
        self.mode = Mode::Normal;
        self.input_prompt.clear();
        value
    }

    pub fn append_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn is_in_input_mode(&self) -> bool {
        self.mode == Mode::Input
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Vue alimentée par une requête simple
fn view_for_key(key: &QueryKey) -> Option<View> {
    match key {
        QueryKey::DraftBoard => Some(View::DraftBoard),
        QueryKey::LatestOdds => Some(View::LatestOdds),
        QueryKey::ConsensusRankings => Some(View::Rankings),
        QueryKey::PlayerOdds(_) | QueryKey::PlayerOddsChart(_) => None,
    }
}

/// Politique associée à une clé
fn query_spec(key: &QueryKey) -> QuerySpec {
    match key {
        QueryKey::PlayerOdds(name) => player_odds_history_query(name),
        QueryKey::PlayerOddsChart(name) => player_odds_chart_query(name),
        QueryKey::ConsensusRankings => consensus_rankings_query(),
        QueryKey::DraftBoard => draft_board_query(),
        QueryKey::LatestOdds => latest_odds_query(),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartData, ConsensusRanking, OddsMovementData, RankingsMap};

    fn board(names: &[&str]) -> Vec<DraftBoardData> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| DraftBoardData {
                player_name: name.to_string(),
                consensus_position: i as f64 + 1.0,
                standard_deviation: 0.5,
            })
            .collect()
    }

    fn chart(name: &str) -> ChartData {
        ChartData {
            title: format!("Odds Movement for {}", name),
            x_axis_label: "Date".to_string(),
            y_axis_label: "American Odds".to_string(),
            data: vec![],
        }
    }

    fn movement() -> OddsMovementData {
        OddsMovementData {
            timestamp: "2025-04-01T12:00:00".to_string(),
            odds: "+150".to_string(),
            draft_position: 1,
            sportsbook: "DraftKings".to_string(),
            market_type: "first_overall".to_string(),
        }
    }

    fn success(request: &FetchRequest, data: QueryData) -> FetchOutcome {
        let key = match &request.kind {
            FetchKind::Single(key) => key.clone(),
            FetchKind::PlayerDetail(_) => panic!("single request expected"),
        };
        FetchOutcome {
            ticket: request.ticket,
            result: Ok(vec![(key, data)]),
        }
    }

    fn player_success(request: &FetchRequest, history: Vec<OddsMovementData>) -> FetchOutcome {
        let name = match &request.kind {
            FetchKind::PlayerDetail(name) => name.clone(),
            FetchKind::Single(_) => panic!("player request expected"),
        };
        FetchOutcome {
            ticket: request.ticket,
            result: Ok(vec![
                (QueryKey::PlayerOdds(name.clone()), QueryData::PlayerOdds(history)),
                (QueryKey::PlayerOddsChart(name.clone()), QueryData::PlayerOddsChart(chart(&name))),
            ]),
        }
    }

    fn request_for<'a>(requests: &'a [FetchRequest], view: View) -> &'a FetchRequest {
        requests.iter().find(|r| r.ticket.view == view).unwrap()
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert_eq!(app.route, Route::DraftBoard);
        assert!(!app.is_fetching());
    }

    #[test]
    fn test_start_mounts_board_and_latest_odds() {
        let now = Instant::now();
        let mut app = App::new();

        let requests = app.start(now);

        assert_eq!(requests.len(), 2);
        assert_eq!(request_for(&requests, View::DraftBoard).kind, FetchKind::Single(QueryKey::DraftBoard));
        assert_eq!(request_for(&requests, View::LatestOdds).kind, FetchKind::Single(QueryKey::LatestOdds));
        assert!(app.draft_board.is_loading());
        assert!(app.is_fetching());
        assert_eq!(
            app.loading_message(),
            Some("Loading draft board, latest odds...".to_string())
        );
    }

    #[test]
    fn test_empty_board_is_empty_state() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.start(now);

        let applied = app.apply(
            success(request_for(&requests, View::DraftBoard), QueryData::DraftBoard(vec![])),
            now,
        );

        assert!(applied);
        assert_eq!(app.draft_board, ViewState::Empty);
        // L'autre requête est toujours en vol
        assert!(app.latest_odds.is_loading());
    }

    #[test]
    fn test_failure_surfaces_message() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.start(now);

        app.apply(
            FetchOutcome {
                ticket: request_for(&requests, View::DraftBoard).ticket,
                result: Err(ApiError::Timeout),
            },
            now,
        );

        assert_eq!(app.draft_board.error(), Some("Request timed out. Please try again."));
    }

    #[test]
    fn test_rankings_are_sorted_on_arrival() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);

        let mut map = RankingsMap::new();
        for (name, position) in [("A", 3.0), ("B", 1.0), ("C", 2.0)] {
            map.insert(
                name.to_string(),
                ConsensusRanking {
                    consensus_position: position,
                    standard_deviation: 0.0,
                    number_of_markets: 1,
                },
            );
        }

        app.apply(success(&requests[0], QueryData::ConsensusRankings(map)), now);

        let names: Vec<&str> = app.rankings.data().unwrap().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_stale_player_response_is_discarded() {
        let now = Instant::now();
        let mut app = App::new();

        let first = app.navigate(Route::Player("Cam Ward".into()), now);
        let second = app.navigate(Route::Player("Travis Hunter".into()), now);

        // La réponse pour le premier joueur arrive après la navigation
        assert!(!app.apply(player_success(&first[0], vec![movement()]), now));
        assert!(app.player.is_loading());

        assert!(app.apply(player_success(&second[0], vec![movement()]), now));
        assert_eq!(app.player.data().unwrap().name, "Travis Hunter");
    }

    #[test]
    fn test_player_joint_failure() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Player("Cam Ward".into()), now);

        app.apply(
            FetchOutcome {
                ticket: requests[0].ticket,
                result: Err(ApiError::Server),
            },
            now,
        );

        assert_eq!(app.player.error(), Some("Server error. Please try again later."));
    }

    #[test]
    fn test_player_empty_history() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Player("Cam Ward".into()), now);

        app.apply(player_success(&requests[0], vec![]), now);

        assert_eq!(app.player, ViewState::Empty);
    }

    #[test]
    fn test_empty_player_name_issues_nothing() {
        let now = Instant::now();
        let mut app = App::new();

        let requests = app.navigate(Route::Player(String::new()), now);

        assert!(requests.is_empty());
        assert_eq!(app.player, ViewState::Empty);
    }

    #[test]
    fn test_fresh_cache_is_served_without_request() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.start(now);
        app.apply(
            success(request_for(&requests, View::DraftBoard), QueryData::DraftBoard(board(&["Cam Ward"]))),
            now,
        );
        app.apply(
            success(request_for(&requests, View::LatestOdds), QueryData::LatestOdds(vec![])),
            now,
        );

        app.navigate(Route::Rankings, now);
        let back = app.back(now + Duration::from_secs(10));

        assert!(back.is_empty());
        assert_eq!(app.route, Route::DraftBoard);
        assert_eq!(app.draft_board.data().unwrap().len(), 1);
        assert_eq!(app.latest_odds, ViewState::Empty);
    }

    #[test]
    fn test_expired_cache_refetches() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);
        app.apply(success(&requests[0], QueryData::ConsensusRankings(RankingsMap::new())), now);

        app.navigate(Route::DraftBoard, now);
        let again = app.navigate(Route::Rankings, now + Duration::from_secs(301));

        assert_eq!(again.len(), 1);
        assert!(app.rankings.is_loading());
    }

    #[test]
    fn test_background_refetch_keeps_display() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);
        let mut map = RankingsMap::new();
        map.insert(
            "Cam Ward".to_string(),
            ConsensusRanking {
                consensus_position: 1.0,
                standard_deviation: 0.2,
                number_of_markets: 4,
            },
        );
        app.apply(success(&requests[0], QueryData::ConsensusRankings(map)), now);

        assert!(app.tick(now + Duration::from_secs(100)).is_empty());

        let refetch = app.tick(now + Duration::from_secs(300));
        assert_eq!(refetch.len(), 1);
        assert_eq!(refetch[0].kind, FetchKind::Single(QueryKey::ConsensusRankings));
        // Les données restent affichées pendant le refetch
        assert!(app.rankings.data().is_some());

        // Échec du refetch : l'erreur est affichée
        app.apply(
            FetchOutcome {
                ticket: refetch[0].ticket,
                result: Err(ApiError::Network),
            },
            now + Duration::from_secs(301),
        );
        assert!(app.rankings.error().is_some());
    }

    #[test]
    fn test_refetch_deferred_while_in_flight() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);

        // La requête initiale est encore en vol à l'échéance
        assert!(app.tick(now + Duration::from_secs(300)).is_empty());

        let arrived = now + Duration::from_secs(302);
        app.apply(success(&requests[0], QueryData::ConsensusRankings(RankingsMap::new())), arrived);

        let refetch = app.tick(arrived);
        assert_eq!(refetch.len(), 1);
        assert_eq!(refetch[0].kind, FetchKind::Single(QueryKey::ConsensusRankings));
    }

    #[test]
    fn test_leaving_route_stops_its_refetch() {
        let now = Instant::now();
        let mut app = App::new();
        app.start(now);

        app.navigate(Route::Player("Cam Ward".into()), now);
        assert!(app.tick(now + Duration::from_secs(600)).is_empty());
    }

    #[test]
    fn test_custom_refetch_interval() {
        let now = Instant::now();
        let mut app = App::new().with_refetch_interval(Duration::from_secs(60));
        let requests = app.navigate(Route::Rankings, now);
        app.apply(success(&requests[0], QueryData::ConsensusRankings(RankingsMap::new())), now);

        assert_eq!(app.tick(now + Duration::from_secs(60)).len(), 1);
    }

    #[test]
    fn test_retry_reissues_after_failure() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);
        app.apply(
            FetchOutcome {
                ticket: requests[0].ticket,
                result: Err(ApiError::Server),
            },
            now,
        );

        let retried = app.retry(now);

        assert_eq!(retried.len(), 1);
        assert_eq!(retried[0].kind, requests[0].kind);
        assert!(retried[0].ticket.generation > requests[0].ticket.generation);
        assert!(app.rankings.is_loading());
    }

    #[test]
    fn test_retry_bypasses_cache() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.navigate(Route::Rankings, now);
        app.apply(success(&requests[0], QueryData::ConsensusRankings(RankingsMap::new())), now);

        assert_eq!(app.retry(now).len(), 1);
    }

    #[test]
    fn test_navigation_and_selection() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.start(now);
        app.apply(
            success(
                request_for(&requests, View::DraftBoard),
                QueryData::DraftBoard(board(&["Cam Ward", "Travis Hunter", "Abdul Carter"])),
            ),
            now,
        );

        app.navigate_down();
        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.selected_player(), Some("Abdul Carter".to_string()));

        app.navigate_up();
        assert_eq!(app.selected_player(), Some("Travis Hunter".to_string()));
    }

    #[test]
    fn test_board_selection_stops_at_top_prospects() {
        let now = Instant::now();
        let mut app = App::new();
        let requests = app.start(now);
        let names: Vec<String> = (1..=12).map(|i| format!("Player {}", i)).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        app.apply(
            success(request_for(&requests, View::DraftBoard), QueryData::DraftBoard(board(&names))),
            now,
        );

        for _ in 0..15 {
            app.navigate_down();
        }

        assert_eq!(app.selectable_len(), TOP_PROSPECTS);
        assert_eq!(app.selected_index, TOP_PROSPECTS - 1);
        assert_eq!(app.selected_player(), Some("Player 10".to_string()));
    }

    #[test]
    fn test_two_step_quit() {
        let mut app = App::new();

        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_input_mode() {
        let mut app = App::new();
        app.start_input("Player: ".to_string());
        assert!(app.is_in_input_mode());

        for c in "Cam Wardx".chars() {
            app.append_char(c);
        }
        app.backspace();

        assert_eq!(app.submit_input(), "Cam Ward");
        assert!(!app.is_in_input_mode());
        assert!(app.input_buffer.is_empty());
    }
}
