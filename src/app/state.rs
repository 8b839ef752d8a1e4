// ABOUTME: Application state for the AML Lab TUI
// Holds the scenario draft, the latest wizard snapshot, panel navigation, and notifications

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::catalog::CodeBlock;
use crate::components::LayoutComponent;
use crate::clipboard::{copy_text, ClipboardSink, CopyFeedback, MemoryClipboard, SystemClipboard};
use crate::config::{AppConfig, ClipboardBackend};
use crate::scenario::ScenarioText;
use crate::wizard::{RunHandle, RunPhase, WizardController, WizardError, WizardState};

/// Notification system for TUI messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    fn with_type(message: String, notification_type: NotificationType, secs: u64) -> Self {
        Self {
            message,
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(secs),
        }
    }

    pub fn success(message: String) -> Self {
        Self::with_type(message, NotificationType::Success, 3)
    }

    pub fn error(message: String) -> Self {
        Self::with_type(message, NotificationType::Error, 5)
    }

    pub fn info(message: String) -> Self {
        Self::with_type(message, NotificationType::Info, 3)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Which part of the screen receives plain keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Navigation,
}

/// Result panel tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    Overview,
    Data,
    Code,
    Results,
    Docs,
}

impl ResultTab {
    pub fn all() -> &'static [ResultTab] {
        &[
            ResultTab::Overview,
            ResultTab::Data,
            ResultTab::Code,
            ResultTab::Results,
            ResultTab::Docs,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResultTab::Overview => "Overview",
            ResultTab::Data => "Data",
            ResultTab::Code => "Code",
            ResultTab::Results => "Results",
            ResultTab::Docs => "Docs",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

pub const DOWNLOAD_UNAVAILABLE: &str = "Download is not available in this demo";
pub const RUN_TEST_UNAVAILABLE: &str = "Run Test is not available in this demo";

pub struct AppState {
    pub scenario: ScenarioText,

    /// Latest snapshot pulled from the controller
    pub wizard: WizardState,

    pub focus: Focus,
    pub active_tab: ResultTab,
    pub code_block: CodeBlock,
    pub panel_scroll: u16,
    pub help_visible: bool,
    pub should_quit: bool,

    pub notifications: Vec<Notification>,
    pub copy_feedback: CopyFeedback,
    pub app_config: AppConfig,

    controller: WizardController,
    wizard_rx: watch::Receiver<WizardState>,
    active_run: Option<RunHandle>,
    clipboard: Box<dyn ClipboardSink>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("scenario", &self.scenario)
            .field("wizard", &self.wizard)
            .field("focus", &self.focus)
            .field("active_tab", &self.active_tab)
            .field("code_block", &self.code_block)
            .field("help_visible", &self.help_visible)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Build state with the clipboard backend named in the config
    pub fn with_config(config: AppConfig) -> Self {
        let clipboard: Box<dyn ClipboardSink> = match config.clipboard.backend {
            ClipboardBackend::System => Box::new(SystemClipboard::new()),
            ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
        };
        Self::with_clipboard(config, clipboard)
    }

    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        let controller = WizardController::new(config.progress_schedule());
        let wizard_rx = controller.subscribe();
        let wizard = controller.state();

        Self {
            scenario: ScenarioText::new(),
            wizard,
            focus: Focus::Input,
            active_tab: ResultTab::Overview,
            code_block: CodeBlock::Main,
            panel_scroll: 0,
            help_visible: false,
            should_quit: false,
            notifications: Vec::new(),
            copy_feedback: CopyFeedback::new(config.ack_duration()),
            app_config: config,
            controller,
            wizard_rx,
            active_run: None,
            clipboard,
        }
    }

    /// Whether the generate trigger is enabled
    pub fn can_generate(&self) -> bool {
        !self.scenario.is_blank() && !self.wizard.is_processing
    }

    /// Start a simulated run for the current scenario
    pub fn generate_scenario(&mut self) {
        match self.controller.start_run(self.scenario.as_str()) {
            Ok(handle) => {
                debug!(run_id = %handle.run_id(), "Run accepted");
                self.active_run = Some(handle);
                self.sync_wizard();
            }
            Err(WizardError::EmptyScenario) | Err(WizardError::RunInProgress) => {
                debug!("Generate ignored while trigger is disabled");
            }
            Err(e) => {
                warn!("Failed to start run: {}", e);
                self.add_error_notification(e.to_string());
            }
        }
    }

    /// Pull the newest wizard snapshot; returns true when it changed
    pub fn sync_wizard(&mut self) -> bool {
        if !self.wizard_rx.has_changed().unwrap_or(false) {
            return false;
        }

        let previous = self.wizard.phase();
        self.wizard = *self.wizard_rx.borrow_and_update();
        let current = self.wizard.phase();

        if previous != current {
            info!(from = previous.name(), to = current.name(), "Wizard phase changed");
            if current == RunPhase::Complete {
                self.add_success_notification("AML scenario generated".to_string());
            }
        }
        if !self.wizard.is_processing {
            self.active_run = None;
        }
        true
    }

    pub fn select_example(&mut self, index: usize) {
        if self.scenario.select_example(index) {
            debug!(index, "Selected example scenario");
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_navigation(&mut self) {
        self.focus = Focus::Navigation;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.panel_scroll = 0;
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
        self.panel_scroll = 0;
    }

    /// Code block sub-tabs also bring the code panel forward
    pub fn next_code_block(&mut self) {
        self.show_code_block(self.code_block.next());
    }

    pub fn previous_code_block(&mut self) {
        self.show_code_block(self.code_block.previous());
    }

    fn show_code_block(&mut self, block: CodeBlock) {
        self.active_tab = ResultTab::Code;
        self.code_block = block;
        self.panel_scroll = 0;
    }

    /// Scrolling stops once the last line of the panel reaches the top
    pub fn scroll_down(&mut self) {
        if self.panel_scroll < self.max_panel_scroll() {
            self.panel_scroll += 1;
        }
    }

    fn max_panel_scroll(&self) -> u16 {
        let line_count = LayoutComponent::panel_lines(self).len();
        u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self) {
        self.panel_scroll = self.panel_scroll.saturating_sub(1);
    }

    /// Copy the code block currently shown
    pub fn copy_code(&mut self) {
        let source = self.code_block.source();
        if let Err(e) = copy_text(self.clipboard.as_mut(), source, &mut self.copy_feedback) {
            self.add_error_notification(format!("Copy failed: {}", e));
        }
    }

    pub fn download_code(&mut self) {
        self.add_info_notification(DOWNLOAD_UNAVAILABLE.to_string());
    }

    pub fn run_test(&mut self) {
        self.add_info_notification(RUN_TEST_UNAVAILABLE.to_string());
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Stop any run in flight and leave the main loop
    pub fn quit(&mut self) {
        if let Some(run) = self.active_run.take() {
            run.cancel();
        }
        self.controller.shutdown();
        self.should_quit = true;
    }

    /// Add a notification to the notification queue
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn add_success_notification(&mut self, message: String) {
        self.add_notification(Notification::success(message));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        self.add_notification(Notification::info(message));
    }

    /// Remove expired notifications
    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get current notifications (non-expired)
    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }
}

pub struct App {
    pub state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            state: AppState::with_config(config),
        }
    }

    /// Per-iteration housekeeping before drawing
    pub fn tick(&mut self) {
        self.state.sync_wizard();
        self.state.cleanup_expired_notifications();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::code::{CONFIGURATION, MAIN_LOGIC};
    use crate::clipboard::{ClipboardError, MockClipboardSink};
    use crate::scenario::EXAMPLE_SCENARIOS;
    use crate::wizard::WizardStep;

    fn memory_state() -> (AppState, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let state = AppState::with_clipboard(AppConfig::default(), Box::new(clipboard.clone()));
        (state, clipboard)
    }

    #[test]
    fn test_initial_state() {
        let (state, _) = memory_state();
        assert_eq!(state.wizard, WizardState::new());
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.active_tab, ResultTab::Overview);
        assert_eq!(state.code_block, CodeBlock::Main);
        assert!(!state.can_generate());
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(ResultTab::Docs.next(), ResultTab::Overview);
        assert_eq!(ResultTab::Overview.previous(), ResultTab::Docs);
        assert_eq!(ResultTab::Data.next(), ResultTab::Code);
    }

    #[test]
    fn test_code_block_switch_shows_code_tab() {
        let (mut state, _) = memory_state();
        state.panel_scroll = 4;
        state.previous_code_block();
        assert_eq!(state.active_tab, ResultTab::Code);
        assert_eq!(state.code_block, CodeBlock::Config);
        assert_eq!(state.panel_scroll, 0);
    }

    #[test]
    fn test_scroll_stops_at_last_panel_line() {
        let (mut state, _) = memory_state();
        state.active_tab = ResultTab::Results;
        let last_line = LayoutComponent::panel_lines(&state).len() - 1;

        for _ in 0..last_line + 25 {
            state.scroll_down();
        }
        assert_eq!(usize::from(state.panel_scroll), last_line);

        state.scroll_up();
        assert_eq!(usize::from(state.panel_scroll), last_line - 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_writes_active_block() {
        let (mut state, clipboard) = memory_state();
        state.copy_code();
        assert_eq!(clipboard.contents().as_deref(), Some(MAIN_LOGIC));
        assert!(state.copy_feedback.is_copied());

        state.code_block = CodeBlock::Config;
        state.copy_code();
        assert_eq!(clipboard.contents().as_deref(), Some(CONFIGURATION));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_failure_raises_error_notification() {
        let mut sink = MockClipboardSink::new();
        sink.expect_set_text()
            .returning(|_| Err(ClipboardError::Unavailable("headless".to_string())));
        let mut state = AppState::with_clipboard(AppConfig::default(), Box::new(sink));

        state.copy_code();

        assert!(!state.copy_feedback.is_copied());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].notification_type, NotificationType::Error);
    }

    #[test]
    fn test_inert_actions_only_notify() {
        let (mut state, clipboard) = memory_state();
        state.download_code();
        state.run_test();

        let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec![DOWNLOAD_UNAVAILABLE, RUN_TEST_UNAVAILABLE]);
        assert!(clipboard.contents().is_none());
        assert_eq!(state.wizard, WizardState::new());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_and_sync_reaches_complete() {
        let (mut state, _) = memory_state();
        state.select_example(1);
        assert_eq!(state.scenario.as_str(), EXAMPLE_SCENARIOS[1]);

        state.generate_scenario();
        assert!(state.wizard.is_processing);
        assert_eq!(state.wizard.current_step, WizardStep::Data);
        assert!(!state.can_generate());

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert!(state.sync_wizard());

        assert_eq!(state.wizard.phase(), RunPhase::Complete);
        assert_eq!(state.wizard.progress_percent, 100);
        assert!(state.can_generate());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].notification_type, NotificationType::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_cancels_run_and_refuses_new_ones() {
        let (mut state, _) = memory_state();
        state.scenario.set_text("layering through shell companies");
        state.generate_scenario();
        assert!(state.wizard.is_processing);

        state.quit();
        assert!(state.should_quit);

        tokio::time::sleep(Duration::from_millis(10)).await;
        state.sync_wizard();
        assert_eq!(state.wizard, WizardState::new());

        state.generate_scenario();
        assert!(!state.wizard.is_processing);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].notification_type, NotificationType::Error);
    }
}
