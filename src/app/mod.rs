//! Application state and event handling

pub mod command;
pub mod input;
pub mod intent;
pub mod navigation;
pub mod playback;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::theme::Theme;
use crate::ui;
use command::{Command, ParseResult, parse_command};
use input::{Action, key_to_action};
use intent::{Course, Intent};
use navigation::View;
use playback::{PlaybackHandle, PlaybackPlan, PlaybackTick, playback_plan};
use state::{AppState, ChapterEntry, Focus, Screen, chapter_entries};

/// Lines moved per scroll action
const SCROLL_STEP: u16 = 5;

/// A running playback and the channel its ticks arrive on
struct ActivePlayback {
    handle: PlaybackHandle,
    ticks: mpsc::UnboundedReceiver<PlaybackTick>,
}

/// The main application
pub struct App {
    config: Config,
    theme: Theme,
    course: Course,
    state: AppState,
    playback: Option<ActivePlayback>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, course: Course) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();

        Ok(Self { config, theme, course, state: AppState::default(), playback: None, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        tracing::info!(chapters = self.course.chapters().len(), "Starting course viewer");

        loop {
            self.drain_playback();

            let user = self.course.user_progress(&self.config.user_id);
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.course, &user, &self.theme);
            })?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Ok(true) => break,
                            Ok(false) => {}
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                                self.state.command_line.set_error(e.to_string());
                            }
                        }
                    }
                }
            }
        }

        self.stop_playback();
        self.restore_terminal()?;
        Ok(())
    }

    /// Apply pending playback ticks
    fn drain_playback(&mut self) {
        let Some(active) = &mut self.playback else {
            return;
        };
        while let Ok(tick) = active.ticks.try_recv() {
            if !self.state.playback.apply(&tick.module_id, tick.progress) {
                tracing::debug!(module = %tick.module_id, "Dropped stale playback tick");
            }
        }
    }

    fn stop_playback(&mut self) {
        if let Some(active) = self.playback.take() {
            active.handle.cancel();
        }
    }

    /// Start, keep or stop the playback timer to match the current view
    fn sync_playback(&mut self) {
        let open_module = self.course.current_module().ok().map(|m| (m.id.as_str(), m.completed));
        let running = self.playback.as_ref().map(|p| p.handle.module_id());

        match playback_plan(open_module, running) {
            PlaybackPlan::Keep => {}
            PlaybackPlan::Start(module_id) => {
                self.stop_playback();
                let (tx, ticks) = mpsc::unbounded_channel();
                let handle = PlaybackHandle::spawn(module_id.clone(), self.config.playback(), tx);
                self.playback = Some(ActivePlayback { handle, ticks });
                self.state.playback.begin(&module_id, 0);
            }
            PlaybackPlan::ShowComplete(module_id) => {
                self.stop_playback();
                self.state.playback.begin(&module_id, 100);
            }
            PlaybackPlan::Stop => {
                self.stop_playback();
                self.state.playback.clear();
            }
        }
    }

    /// Dispatch an intent and bring view-local state in line. Returns false on error.
    fn apply(&mut self, intent: Intent) -> bool {
        let before = self.course.view().clone();

        let ok = match self.course.dispatch(intent) {
            Ok(message) => {
                if let Some(message) = message {
                    self.state.command_line.set_message(message);
                }
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.state.command_line.set_error(e.to_string());
                false
            }
        };

        if self.course.view() != &before {
            self.on_view_changed();
        }
        self.sync_playback();
        ok
    }

    fn on_view_changed(&mut self) {
        self.state.on_view_changed();
        let view = self.course.view();
        if let Some(id) = view.chapter_id() {
            if let Some(position) = self.course.chapters().iter().position(|c| c.id == id) {
                self.state.sidebar.cursor.selected = position;
            }
        }
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.state.command_line.is_input_mode() {
            return self.handle_command_key(key);
        }

        if self.state.screen == Screen::Help {
            self.state.screen = Screen::Main;
            return Ok(false);
        }

        if self.state.draft.editing {
            self.handle_draft_key(key);
            return Ok(false);
        }

        if self.state.confirm_reset {
            self.state.confirm_reset = false;
            if key.code == KeyCode::Char('y') {
                self.apply(Intent::ResetCourse);
            } else {
                self.state.command_line.set_message("Reset cancelled");
            }
            return Ok(false);
        }

        let Some(action) = key_to_action(key.code, key.modifiers, self.config.vim_mode) else {
            return Ok(false);
        };
        self.handle_action(action)
    }

    fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Help => self.state.screen = Screen::Help,
            Action::CommandMode => self.state.command_line.enter_command_mode(),
            Action::ToggleSidebar => {
                self.state.sidebar.visible = !self.state.sidebar.visible;
                if !self.state.sidebar.visible {
                    self.state.focus = Focus::Main;
                }
            }
            Action::ToggleFocus => {
                if self.state.sidebar.visible {
                    self.state.focus = match self.state.focus {
                        Focus::Sidebar => Focus::Main,
                        Focus::Main => Focus::Sidebar,
                    };
                }
            }
            Action::Up | Action::Down | Action::Top | Action::Bottom => self.move_selection(action),
            Action::ScrollDown => self.state.scroll = self.state.scroll.saturating_add(SCROLL_STEP),
            Action::ScrollUp => self.state.scroll = self.state.scroll.saturating_sub(SCROLL_STEP),
            Action::Select => self.select(),
            Action::Back => {
                let intent = match self.course.view() {
                    View::Dashboard => None,
                    View::Chapter { .. } => Some(Intent::BackToDashboard),
                    View::Module { .. } | View::Homework { .. } => Some(Intent::BackToChapter),
                };
                if let Some(intent) = intent {
                    self.apply(intent);
                }
            }
            Action::Dashboard => {
                self.apply(Intent::BackToDashboard);
            }
            Action::NextModule => {
                self.apply(Intent::NextModule);
            }
            Action::CompleteModule => {
                self.apply(Intent::CompleteModule);
            }
            Action::SubmitHomework => self.submit_draft(),
            Action::EditDraft => {
                if matches!(self.course.view(), View::Homework { .. }) {
                    self.state.draft.editing = true;
                }
            }
            Action::ResetCourse => {
                self.state.confirm_reset = true;
                self.state.command_line.set_message("Reset all progress? (y/n)");
            }
        }
        Ok(false)
    }

    /// Number of rows in the main panel's list
    fn main_list_len(&self) -> Option<usize> {
        match self.course.view() {
            View::Dashboard => Some(self.course.chapters().len()),
            View::Chapter { .. } => {
                Some(self.course.current_chapter().map(|c| chapter_entries(c).len()).unwrap_or(0))
            }
            View::Module { .. } | View::Homework { .. } => None,
        }
    }

    fn move_selection(&mut self, action: Action) {
        let (cursor, len) = if self.state.focus == Focus::Sidebar && self.state.sidebar.visible {
            (&mut self.state.sidebar.cursor, self.course.chapters().len())
        } else {
            match self.main_list_len() {
                Some(len) => (&mut self.state.main_cursor, len),
                None => {
                    // Module and homework panes scroll instead
                    self.state.scroll = match action {
                        Action::Down => self.state.scroll.saturating_add(1),
                        Action::Up => self.state.scroll.saturating_sub(1),
                        _ => 0,
                    };
                    return;
                }
            }
        };

        match action {
            Action::Up => cursor.up(),
            Action::Down => cursor.down(len),
            Action::Top => cursor.top(),
            Action::Bottom => cursor.bottom(len),
            _ => {}
        }
    }

    fn select(&mut self) {
        if self.state.focus == Focus::Sidebar && self.state.sidebar.visible {
            let selected = self.state.sidebar.cursor.selected;
            if let Some(chapter) = self.course.chapters().get(selected) {
                let id = chapter.id.clone();
                self.apply(Intent::SelectChapter(id));
                self.state.focus = Focus::Main;
            }
            return;
        }

        let selected = self.state.main_cursor.selected;
        let intent = match self.course.view() {
            View::Dashboard => {
                self.course.chapters().get(selected).map(|c| Intent::SelectChapter(c.id.clone()))
            }
            View::Chapter { .. } => self.course.current_chapter().ok().and_then(|chapter| {
                chapter_entries(chapter).into_iter().nth(selected).map(|entry| match entry {
                    ChapterEntry::Module(id) => Intent::StartModule(id),
                    ChapterEntry::Homework(id) => Intent::StartHomework(id),
                })
            }),
            View::Module { .. } | View::Homework { .. } => None,
        };
        if let Some(intent) = intent {
            self.apply(intent);
        }
    }

    fn submit_draft(&mut self) {
        if !matches!(self.course.view(), View::Homework { .. }) {
            self.state.command_line.set_error("Open a homework assignment to submit");
            return;
        }
        let submission = self.state.draft.to_submission();
        if self.apply(Intent::SubmitHomework(submission)) {
            self.state.draft.clear();
        }
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        let draft = &mut self.state.draft;
        match key.code {
            KeyCode::Esc => draft.editing = false,
            KeyCode::Enter => draft.newline(),
            KeyCode::Backspace => draft.backspace(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                draft.editing = false;
                self.submit_draft();
            }
            KeyCode::Char(c) => draft.insert_char(c),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> Result<bool> {
        let cl = &mut self.state.command_line;
        match key.code {
            KeyCode::Esc => cl.exit_input_mode(),
            KeyCode::Enter => {
                let input = std::mem::take(&mut cl.input);
                cl.add_to_history(input.clone());
                cl.exit_input_mode();
                return self.execute_command(parse_command(&input));
            }
            KeyCode::Backspace => {
                if cl.input.is_empty() {
                    cl.exit_input_mode();
                } else {
                    cl.delete_char();
                }
            }
            KeyCode::Left => cl.move_left(),
            KeyCode::Right => cl.move_right(),
            KeyCode::Home => cl.move_start(),
            KeyCode::End => cl.move_end(),
            KeyCode::Up => cl.history_up(),
            KeyCode::Down => cl.history_down(),
            KeyCode::Char(c) => cl.insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    fn execute_command(&mut self, parsed: ParseResult) -> Result<bool> {
        let command = match parsed {
            ParseResult::Ok(command) => command,
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {}", cmd));
                return Ok(false);
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!(":{} needs an argument", cmd));
                return Ok(false);
            }
            ParseResult::InvalidArgument { command, argument } => {
                self.state
                    .command_line
                    .set_error(format!("Invalid argument for :{}: {}", command, argument));
                return Ok(false);
            }
        };

        tracing::debug!(?command, "Command");
        let in_homework = matches!(self.course.view(), View::Homework { .. });
        match command {
            Command::Quit => return Ok(true),
            Command::Help => self.state.screen = Screen::Help,
            Command::Nop => self.state.command_line.clear_message(),
            Command::Goto(id) => {
                self.apply(Intent::Goto(id));
            }
            Command::Dashboard => {
                self.apply(Intent::BackToDashboard);
            }
            Command::Reset => {
                self.apply(Intent::ResetCourse);
            }
            Command::Complete => {
                self.apply(Intent::CompleteModule);
            }
            Command::Submit => self.submit_draft(),
            Command::Attach(_) | Command::Detach(_) if !in_homework => {
                self.state.command_line.set_error("Open a homework assignment first");
            }
            Command::Attach(path) => {
                let name = self.state.draft.attach(path).name();
                self.state.command_line.set_message(format!("Attached {}", name));
            }
            Command::Detach(position) => match self.state.draft.detach(position) {
                Some(removed) => {
                    self.state.command_line.set_message(format!("Removed {}", removed.name()))
                }
                None => self.state.command_line.set_error(format!("No attachment #{}", position)),
            },
        }
        Ok(false)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_playback();
        let _ = self.restore_terminal();
    }
}
