//! Root component
//!
//! Owns the session and the current view. Effects returned by a view are
//! executed here: requests run on spawned tasks and report back over an
//! unbounded channel drained by the UI loop. Each outcome carries the
//! session generation it was issued under; outcomes from an earlier session
//! are dropped before they reach a view.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cupom_client::{AuthenticatedUser, BusinessCalendar, CouponApi, Session};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use crate::action::{self, Command, Effect, Outcome};
use crate::views::{LoginView, MemberView, MerchantView};

/// UI tick: how long to wait for a key before draining outcomes
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum View {
    Login(LoginView),
    Merchant(MerchantView),
    Member(MemberView),
}

pub struct App {
    api: Arc<dyn CouponApi>,
    calendar: BusinessCalendar,
    session: Session,
    view: View,
    outcomes_tx: mpsc::UnboundedSender<(u64, Outcome)>,
    outcomes_rx: mpsc::UnboundedReceiver<(u64, Outcome)>,
    should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn CouponApi>, calendar: BusinessCalendar) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            api,
            calendar,
            session: Session::new(),
            view: View::Login(LoginView::new()),
            outcomes_tx,
            outcomes_rx,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        let effects = match &mut self.view {
            View::Login(v) => v.handle_key(key),
            View::Merchant(v) => v.handle_key(key),
            View::Member(v) => v.handle_key(key),
        };
        self.run_effects(effects);
    }

    /// Hand a finished request to the current view, unless it belongs to
    /// another session
    pub fn deliver(&mut self, generation: u64, outcome: Outcome) {
        if generation != self.session.generation() {
            tracing::debug!(
                generation,
                current = self.session.generation(),
                ?outcome,
                "dropping outcome from a previous session"
            );
            return;
        }
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        let effects = match &mut self.view {
            View::Login(v) => v.apply(outcome),
            View::Merchant(v) => v.apply(outcome),
            View::Member(v) => v.apply(outcome),
        };
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Request(command) => self.spawn(command),
                Effect::Enter(user) => queue.extend(self.enter(user)),
                Effect::Logout => {
                    self.session.end();
                    self.view = View::Login(LoginView::new());
                }
                Effect::Quit => self.should_quit = true,
            }
        }
    }

    /// Start the session and open the dashboard for the user's type
    fn enter(&mut self, user: AuthenticatedUser) -> Vec<Effect> {
        self.session.begin(user.clone());
        let (view, effects) = match user {
            AuthenticatedUser::Merchant(merchant) => {
                let (view, effects) = MerchantView::open(merchant, self.calendar);
                (View::Merchant(view), effects)
            }
            AuthenticatedUser::Member(member) => {
                let (view, effects) = MemberView::open(member, self.calendar);
                (View::Member(view), effects)
            }
        };
        self.view = view;
        effects
    }

    fn spawn(&self, command: Command) {
        let api = Arc::clone(&self.api);
        let tx = self.outcomes_tx.clone();
        let generation = self.session.generation();
        tracing::debug!(command = command.name(), generation, "dispatching request");
        tokio::spawn(async move {
            let outcome = action::execute(api.as_ref(), command).await;
            // The receiver lives as long as the app
            let _ = tx.send((generation, outcome));
        });
    }

    pub fn draw(&self, frame: &mut Frame) {
        match &self.view {
            View::Login(v) => v.draw(frame),
            View::Merchant(v) => v.draw(frame),
            View::Member(v) => v.draw(frame),
        }
    }

    /// Event loop: draw, poll keys, apply finished requests
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
            {
                self.handle_key(key);
            }

            while let Ok((generation, outcome)) = self.outcomes_rx.try_recv() {
                self.deliver(generation, outcome);
            }
        }
        if self.session.is_active() {
            self.session.end();
        }
        Ok(())
    }

    #[cfg(test)]
    async fn next_outcome(&mut self) -> Option<(u64, Outcome)> {
        self.outcomes_rx.recv().await
    }
}
