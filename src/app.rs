use async_channel::{Receiver, Sender};
use tokio::time::{sleep_until, Instant};

use crate::{
    api::{DynAPI, MapSurface, ResultsView},
    config::Config,
    engine::{DebounceTimer, RequestSequence},
    entities::{CategoryFilter, SearchOutcome, SearchState},
    presenter::present,
    synchronizer::MarkerSynchronizer,
};

#[derive(Debug)]
pub enum UiEvent {
    Submit {
        query: String,
        category: CategoryFilter,
    },
    /// Selector change; re-runs the search with the text currently in the form.
    CategoryChanged(CategoryFilter),
    Input {
        query: String,
        category: CategoryFilter,
    },
    Clear,
    Activate(String),
    SearchCompleted {
        seq: u64,
        outcome: SearchOutcome,
    },
    Shutdown,
}

/// Event wiring: routes form events through the engine into the synchronizer
/// and the results view. All state changes happen on the task running `run`.
pub struct App<M: MapSurface, V: ResultsView> {
    api: DynAPI,
    synchronizer: MarkerSynchronizer<M>,
    view: V,
    debounce: DebounceTimer,
    sequence: RequestSequence,
    category: CategoryFilter,
    query: String,
    state: SearchState,
    sender: Sender<UiEvent>,
}

impl<M: MapSurface, V: ResultsView> App<M, V> {
    pub fn new(
        api: DynAPI,
        synchronizer: MarkerSynchronizer<M>,
        view: V,
        config: &Config,
        sender: Sender<UiEvent>,
    ) -> Self {
        Self {
            api,
            synchronizer,
            view,
            debounce: DebounceTimer::new(config.debounce, config.min_query_len),
            sequence: RequestSequence::default(),
            category: CategoryFilter::All,
            query: String::new(),
            state: SearchState::default(),
            sender,
        }
    }

    pub fn synchronizer(&self) -> &MarkerSynchronizer<M> {
        &self.synchronizer
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[tracing::instrument(skip_all)]
    pub async fn start(&mut self) {
        let places = self.api.initial_places();

        tracing::info!("showing {} initial places", places.len());

        self.synchronizer.sync(&places).await;
        self.synchronizer.reset_view(&places).await;
    }

    pub async fn run(mut self, events: Receiver<UiEvent>) {
        self.start().await;

        loop {
            let deadline = self.debounce.deadline();

            tokio::select! {
                event = events.recv() => match event {
                    Ok(UiEvent::Shutdown) | Err(_) => break,
                    Ok(event) => self.handle(event).await,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(query) = self.debounce.fire(Instant::now()) {
                        let category = self.category.clone();
                        self.dispatch(query, category);
                    }
                }
            }
        }

        tracing::info!("event loop stopped");
    }

    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit { query, category } => {
                self.debounce.cancel();
                self.query = query.clone();
                self.category = category.clone();
                self.dispatch(query, category);
            }
            UiEvent::CategoryChanged(category) => {
                self.debounce.cancel();
                self.category = category.clone();
                self.dispatch(self.query.clone(), category);
            }
            UiEvent::Input { query, category } => {
                self.category = category;
                self.debounce.input(&query, Instant::now());
                self.query = query;
            }
            UiEvent::Clear => self.clear().await,
            UiEvent::Activate(place_id) => self.activate(&place_id).await,
            UiEvent::SearchCompleted { seq, outcome } => self.apply(seq, outcome).await,
            UiEvent::Shutdown => {}
        }
    }

    fn dispatch(&mut self, query: String, category: CategoryFilter) {
        if !self.api.accepts(&query) {
            tracing::debug!("ignoring query {:?}", query);
            return;
        }

        let seq = self.sequence.next();
        let api = self.api.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let outcome = api.search(query, category).await;

            if sender
                .send(UiEvent::SearchCompleted { seq, outcome })
                .await
                .is_err()
            {
                tracing::debug!("event loop gone, dropping search {}", seq);
            }
        });
    }

    async fn apply(&mut self, seq: u64, outcome: SearchOutcome) {
        if !self.sequence.is_current(seq) {
            tracing::debug!("discarding stale search {}", seq);
            return;
        }

        let results = &outcome.state.results;
        self.synchronizer.sync(results).await;

        match &outcome.resolved {
            Some(location) => {
                self.synchronizer.show_location(location).await;
                if results.len() == 1 {
                    self.synchronizer.focus(&results[0]).await;
                }
            }
            None => self.synchronizer.fit_results(results).await,
        }

        self.view.show(&present(&outcome));
        self.state = outcome.state;
    }

    async fn clear(&mut self) {
        self.sequence.invalidate();
        self.debounce.cancel();
        self.category = CategoryFilter::All;
        self.query.clear();
        self.state = SearchState::default();

        self.view.reset_form();
        self.view.hide();

        let places = self.api.initial_places();
        self.synchronizer.sync(&places).await;
        self.synchronizer.reset_view(&places).await;
    }

    async fn activate(&mut self, place_id: &str) {
        match self.state.find(place_id).cloned() {
            Some(place) => {
                self.synchronizer.focus(&place).await;
            }
            None => tracing::debug!("no result with id {}", place_id),
        }
    }
}
