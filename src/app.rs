use crate::carousel::Carousel;
use crate::chat::{ChatPanel, ChatResponder};
use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::i18n::{Language, Strings};
use crate::insights::{InsightsClient, InsightsResolver, Resolution};
use crate::preferences::PreferenceStore;
use crate::theme::{Theme, ThemeController};
use crate::util::database::Database;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Page sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    Dashboard,
    Onboarding,
    Brand,
    BackendTest,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Features,
        Section::Dashboard,
        Section::Onboarding,
        Section::Brand,
        Section::BackendTest,
    ];

    fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Number key `1`..`6`.
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn title(&self, strings: &Strings) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => strings.features,
            Section::Dashboard => strings.dashboard,
            Section::Onboarding => strings.onboarding,
            Section::Brand => strings.brand,
            Section::BackendTest => strings.test_backend,
        }
    }
}

/// Dashboard data as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightsState {
    Loading,
    Ready(Resolution),
}

/// Tracks the latest insights request so an older, slower one cannot
/// overwrite a newer result.
#[derive(Debug)]
pub struct InsightsFeed {
    generation: u64,
    state: InsightsState,
    task: Option<JoinHandle<()>>,
}

impl Default for InsightsFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightsFeed {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: InsightsState::Loading,
            task: None,
        }
    }

    pub fn state(&self) -> &InsightsState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Supersedes any in-flight request and returns the new generation.
    pub fn begin(&mut self) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation += 1;
        self.state = InsightsState::Loading;
        self.generation
    }

    /// Starts a resolution whose outcome arrives as [`AppEvent::InsightsResolved`].
    pub fn refresh(&mut self, resolver: Arc<InsightsResolver>, sender: UnboundedSender<Event>) -> u64 {
        let generation = self.begin();
        self.task = Some(tokio::spawn(async move {
            let resolution = resolver.resolve(None).await;
            if sender
                .send(Event::App(AppEvent::InsightsResolved(generation, resolution)))
                .is_err()
            {
                error!("event loop closed before insights resolved");
            }
        }));
        generation
    }

    /// Applies a result only if it belongs to the latest request.
    pub fn apply(&mut self, generation: u64, resolution: Resolution) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale insights");
            return false;
        }
        self.task = None;
        self.state = InsightsState::Ready(resolution);
        true
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub section: Section,
    pub language: Language,
    pub theme: ThemeController,
    pub insights: InsightsFeed,
    pub carousel: Carousel,
    pub chat: ChatPanel,
    /// Advances while insights are loading.
    pub spinner_frame: usize,
    /// Event handler.
    pub events: EventHandler,

    resolver: Arc<InsightsResolver>,
    seen_messages: usize,
}

impl App {
    /// Constructs a new instance of [`App`] and starts the first insights fetch.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let database = Database::open(&config.db_path)?;
        Ok(Self::with_store(config, Arc::new(database)))
    }

    pub fn with_store(config: &AppConfig, store: Arc<dyn PreferenceStore>) -> Self {
        let resolver = InsightsResolver::new(InsightsClient::new(), config.backend_url.clone());
        let chat = ChatPanel::new(ChatResponder::default());
        let seen_messages = chat.conversation().len();

        let mut app = Self {
            running: true,
            section: Section::Home,
            language: config.language,
            theme: ThemeController::load(store),
            insights: InsightsFeed::new(),
            carousel: Carousel::onboarding(Instant::now()),
            chat,
            spinner_frame: 0,
            events: EventHandler::new(),
            resolver: Arc::new(resolver),
            seen_messages,
        };
        app.spawn_insights();
        app
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => needs_redraw = self.tick(),
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event)
                        if key_event.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        self.handle_key_events(key_event)?;
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        // Chat captures typing while open
        if self.chat.open {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::ToggleChat),
                KeyCode::Enter => self.events.send(AppEvent::ChatSubmit),
                KeyCode::Backspace => self.events.send(AppEvent::ChatBackspace),
                KeyCode::Char(ch) => self.events.send(AppEvent::ChatInput(ch)),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Right | KeyCode::Tab => self.events.send(AppEvent::NextSection),
            KeyCode::Left | KeyCode::BackTab => self.events.send(AppEvent::PrevSection),
            KeyCode::Char('g') => self.events.send(AppEvent::GoTo(Section::Dashboard)),
            KeyCode::Char('d') => self.events.send(AppEvent::GoTo(Section::Features)),
            KeyCode::Char('t') => self.events.send(AppEvent::ToggleTheme),
            KeyCode::Char('l') => self.events.send(AppEvent::ToggleLanguage),
            KeyCode::Char('c') => self.events.send(AppEvent::ToggleChat),
            KeyCode::Char('r') => self.events.send(AppEvent::RefreshInsights),
            KeyCode::Char(ch) => {
                if let Some(section) = Section::from_digit(ch) {
                    self.events.send(AppEvent::GoTo(section));
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::NextSection => self.section = self.section.next(),
            AppEvent::PrevSection => self.section = self.section.prev(),
            AppEvent::GoTo(section) => self.section = section,
            AppEvent::ToggleTheme => {
                let theme = self.theme.toggle();
                debug!(theme = theme.as_str(), "theme toggled");
            }
            AppEvent::ToggleLanguage => self.language = self.language.next(),
            AppEvent::RefreshInsights => self.spawn_insights(),
            AppEvent::InsightsResolved(generation, resolution) => {
                let live = resolution.is_live();
                if self.insights.apply(generation, resolution) {
                    info!(live, generation, "insights resolved");
                }
            }
            AppEvent::ToggleChat => self.chat.toggle(),
            AppEvent::ChatInput(ch) => self.chat.handle_input(ch),
            AppEvent::ChatBackspace => self.chat.backspace(),
            AppEvent::ChatSubmit => {
                self.chat.submit();
                self.seen_messages = self.chat.conversation().len();
            }
            AppEvent::Quit => self.quit(),
        }
    }

    /// Handles the tick event. Returns whether anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.carousel.tick(Instant::now());

        if *self.insights.state() == InsightsState::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            changed = true;
        }

        // Deferred chat replies land outside the event loop
        let messages = self.chat.conversation().len();
        if messages != self.seen_messages {
            self.seen_messages = messages;
            changed = true;
        }

        changed
    }

    /// Resolves insights in the background, superseding any request still in flight.
    pub fn spawn_insights(&mut self) {
        let generation = self
            .insights
            .refresh(Arc::clone(&self.resolver), self.events.sender());
        debug!(generation, "insights requested");
    }

    pub fn insights(&self) -> &InsightsState {
        self.insights.state()
    }

    pub fn backend_url(&self) -> String {
        self.resolver.effective_base_url(None)
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
