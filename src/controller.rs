use crate::api::ApiClient;
use crate::chart::BarChart;
use crate::errors::ClientError;
use crate::notify::Notifier;
use crate::ui;
use crate::view::{CloseVia, CompletionForm, HabitForm, Tab, ViewState};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// A load older than this is refreshed by the auto-refresh tick.
pub const STALE_AFTER: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSlot {
    /// Nothing drawn: analytics never loaded, or the snapshot had no totals.
    Idle,
    NoData,
    Drawn(BarChart),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    DeleteHabit { id: i64 },
}

impl Confirmation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DeleteHabit { .. } => "Are you sure you want to stop tracking this habit?",
        }
    }
}

/// The in-memory document: view state plus the rendered regions.
#[derive(Debug, Clone)]
pub struct Page {
    pub view: ViewState,
    pub habits_html: String,
    pub stats_html: String,
    pub chart: ChartSlot,
    pub history_html: Option<String>,
    pub pending: Option<Confirmation>,
    pub habits_loaded_at: Option<Instant>,
}

impl Page {
    fn new(today: NaiveDate) -> Self {
        Self {
            view: ViewState::new(today),
            habits_html: String::new(),
            stats_html: String::new(),
            chart: ChartSlot::Idle,
            history_html: None,
            pending: None,
            habits_loaded_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub active_tab: Tab,
    pub modal_open: bool,
    pub scroll_locked: bool,
    pub completion_date: String,
    pub craving_level: String,
    pub resistance_level: String,
    pub pending_confirmation: bool,
    pub history_open: bool,
    pub chart_generation: Option<u64>,
    pub notifications: Vec<crate::notify::Notification>,
}

/// Application context shared by every event handler. The page lock is never
/// held across an API call, so a render during a request sees the loading state.
pub struct Controller {
    api: ApiClient,
    notifier: Notifier,
    page: Mutex<Page>,
    chart_generation: AtomicU64,
}

impl Controller {
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            page: Mutex::new(Page::new(today())),
            chart_generation: AtomicU64::new(0),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn init(&self) {
        self.show_tab(Tab::Habits).await;
    }

    pub async fn show_tab(&self, tab: Tab) {
        self.page.lock().await.view.select_tab(tab);
        match tab {
            Tab::Habits => self.load_habits().await,
            Tab::Analytics => self.load_analytics().await,
        }
    }

    pub async fn load_habits(&self) {
        self.page.lock().await.habits_html = ui::render_loading("Loading habits...");

        let result = self.api.list_habits().await;
        let mut page = self.page.lock().await;
        match result {
            Ok(habits) => {
                info!(count = habits.len(), "habits loaded");
                page.habits_html = ui::render_habits(&habits);
                page.habits_loaded_at = Some(Instant::now());
            }
            Err(err) => {
                error!("failed to load habits: {err}");
                page.habits_html = ui::render_habits(&[]);
                drop(page);
                self.notifier.error("Could not load habits").await;
            }
        }
    }

    pub async fn load_analytics(&self) {
        self.page.lock().await.stats_html = ui::render_loading("Loading analytics...");

        let result = self.api.analytics().await;
        let mut page = self.page.lock().await;
        // The previous chart never survives a reload.
        page.chart = ChartSlot::Idle;
        match result {
            Ok(analytics) => {
                page.stats_html = ui::render_analytics(&analytics);
                if analytics.has_totals() {
                    let generation = self.chart_generation.fetch_add(1, Ordering::Relaxed) + 1;
                    page.chart = match BarChart::from_stats(generation, &analytics.habit_stats) {
                        Some(chart) => ChartSlot::Drawn(chart),
                        None => ChartSlot::NoData,
                    };
                }
                info!(habits = analytics.habit_stats.len(), "analytics loaded");
            }
            Err(err) => {
                error!("failed to load analytics: {err}");
                page.stats_html = ui::render_no_analytics();
                drop(page);
                self.notifier.error("Could not load analytics").await;
            }
        }
    }

    pub async fn submit_habit(&self, form: HabitForm) {
        let habit = form.to_new_habit();
        self.page.lock().await.view.habit_form = form;

        let habit = match habit {
            Ok(habit) => habit,
            Err(err) => return self.report(err, None).await,
        };

        match self.api.create_habit(&habit).await {
            Ok(()) => {
                info!(name = %habit.name, "habit created");
                self.notifier.success("Bad habit added for tracking!").await;
                self.page.lock().await.view.reset_habit_form();
                self.show_tab(Tab::Habits).await;
            }
            Err(err) => self.report(err, Some("Could not add habit")).await,
        }
    }

    /// Asks for confirmation; nothing is sent until [`Controller::answer`] says yes.
    pub async fn request_delete(&self, id: i64) {
        self.page.lock().await.pending = Some(Confirmation::DeleteHabit { id });
    }

    pub async fn answer(&self, confirmed: bool) {
        let pending = self.page.lock().await.pending.take();
        let Some(confirmation) = pending else {
            return;
        };
        if !confirmed {
            return;
        }
        match confirmation {
            Confirmation::DeleteHabit { id } => self.delete_habit(id).await,
        }
    }

    async fn delete_habit(&self, id: i64) {
        match self.api.delete_habit(id).await {
            Ok(()) => {
                info!(id, "habit deleted");
                self.notifier.success("Habit removed from tracking!").await;
                self.load_habits().await;
            }
            Err(err) => self.report(err, Some("Could not delete habit")).await,
        }
    }

    pub async fn open_completion(&self, habit_id: i64) {
        self.page.lock().await.view.open_modal(habit_id);
    }

    pub async fn close_modal(&self, via: CloseVia) {
        let was_open = self.page.lock().await.view.close_modal(via, today());
        if was_open {
            info!(?via, "completion modal closed");
        }
    }

    pub async fn submit_completion(&self, form: CompletionForm) {
        let request = form.to_request();
        self.page.lock().await.view.completion_form = form;

        let request = match request {
            Ok(request) => request,
            Err(err) => return self.report(err, None).await,
        };

        match self.api.record_completion(&request).await {
            Ok(()) => {
                info!(habit_id = request.habit_id, date = %request.completion_date, "completion recorded");
                self.notifier.success("Your day has been saved!").await;
                self.close_modal(CloseVia::Close).await;
                self.load_habits().await;
                let active = self.page.lock().await.view.active_tab;
                if active == Tab::Analytics {
                    self.load_analytics().await;
                }
            }
            Err(err) => self.report(err, Some("Could not save the day")).await,
        }
    }

    pub async fn view_history(&self, habit_id: i64) {
        match self.api.completion_history(habit_id).await {
            Ok(records) if records.is_empty() => {
                self.page.lock().await.history_html = None;
                self.notifier.info("No history recorded for this habit yet").await;
            }
            Ok(records) => {
                self.page.lock().await.history_html = Some(ui::render_history(&records));
            }
            Err(err) => {
                self.page.lock().await.history_html = None;
                self.report(err, Some("Could not load history")).await;
            }
        }
    }

    pub async fn close_history(&self) {
        self.page.lock().await.history_html = None;
    }

    pub async fn dismiss_notification(&self, id: u64) {
        self.notifier.dismiss(id).await;
    }

    /// Auto-refresh tick: re-fetch the habit list unless it was loaded recently.
    pub async fn refresh_if_stale(&self) -> bool {
        let loaded_at = self.page.lock().await.habits_loaded_at;
        let stale = loaded_at.is_none_or(|at| at.elapsed() > STALE_AFTER);
        if stale {
            self.load_habits().await;
        }
        stale
    }

    pub async fn render(&self) -> String {
        let notifications = self.notifier.snapshot().await;
        let page = self.page.lock().await;
        ui::render_page(&page, &notifications)
    }

    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let notifications = self.notifier.snapshot().await;
        let page = self.page.lock().await;
        ViewSnapshot {
            active_tab: page.view.active_tab,
            modal_open: page.view.modal_open,
            scroll_locked: page.view.scroll_locked,
            completion_date: page.view.completion_form.completion_date.clone(),
            craving_level: page.view.completion_form.craving_level.clone(),
            resistance_level: page.view.completion_form.resistance_level.clone(),
            pending_confirmation: page.pending.is_some(),
            history_open: page.history_html.is_some(),
            chart_generation: match &page.chart {
                ChartSlot::Drawn(chart) => Some(chart.generation),
                _ => None,
            },
            notifications,
        }
    }

    /// Validation failures are shown as-is; request failures get a context prefix.
    async fn report(&self, err: ClientError, context: Option<&str>) {
        let message = match context {
            Some(context) => {
                error!("{context}: {err}");
                format!("{context}: {}", err.detail())
            }
            None => {
                warn!("rejected before sending: {err}");
                err.detail()
            }
        };
        self.notifier.error(message).await;
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
