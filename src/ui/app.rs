use crate::analysis::AnalysisService;
use crate::i18n::LanguageCode;
use crate::ui::controller::{AnalysisRequestController, Completion};
use crate::ui::state::InteractionState;
use crate::ui::view::{self, ViewModel};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct App<S> {
    pub state: InteractionState,
    pub should_quit: bool,
    /// Animation counter for the busy spinner.
    pub tick: usize,
    controller: AnalysisRequestController<S>,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
}

impl<S: AnalysisService> App<S> {
    pub fn new(service: Arc<S>, state: InteractionState) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state,
            should_quit: false,
            tick: 0,
            controller: AnalysisRequestController::new(service),
            completion_tx,
            completion_rx,
        }
    }

    pub fn view(&self) -> ViewModel {
        view::project(&self.state)
    }

    /// Apply every analysis that finished since the last call.
    /// Returns how many were applied.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.controller.resolve(&mut self.state, completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next analysis to finish and apply it.
    pub async fn wait_for_completion(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.controller.resolve(&mut self.state, completion);
                true
            }
            None => false,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn submit(&mut self) {
        // Rejections are already reflected in the state.
        let _ = self
            .controller
            .dispatch(&mut self.state, &self.completion_tx);
    }

    pub fn select_language(&mut self, code: LanguageCode) {
        self.state.set_language(code);
    }

    pub fn cycle_language(&mut self) {
        let next = self.state.language().next();
        self.state.set_language(next);
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = self.state.handle_text().to_string();
        text.push(c);
        self.state.set_handle_text(text);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.state.handle_text().to_string();
        text.pop();
        self.state.set_handle_text(text);
    }

    pub fn clear_input(&mut self) {
        self.state.set_handle_text(String::new());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // A notice blocks everything except dismissal
        if self.state.notice().is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.dismiss_notice(),
                KeyCode::Char('c') if has_ctrl => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if has_ctrl => self.should_quit = true,
            KeyCode::Char('u') if has_ctrl => self.clear_input(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.cycle_language(),
            KeyCode::F(1) => self.select_language(LanguageCode::Cn),
            KeyCode::F(2) => self.select_language(LanguageCode::Jp),
            KeyCode::F(3) => self.select_language(LanguageCode::En),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) if !has_ctrl => self.push_char(c),
            _ => {}
        }
    }
}
