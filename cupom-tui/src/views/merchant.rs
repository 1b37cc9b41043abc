//! Merchant dashboard: create coupons, list them, register their use

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::validation::CouponDraft;
use shared::{BusinessCalendar, Coupon, Merchant, StatusFilter};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::action::{Command, Confirm, Effect, Notice, Outcome, Phase};
use crate::form::{Field, Form};
use crate::views::{answer_confirm, step};
use crate::{messages, ui};

/// Redemption codes are 12 hex characters
const CODE_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Create,
    List,
    Redeem,
}

impl Tab {
    const TITLES: [&'static str; 3] = ["F1 Criar Cupom", "F2 Meus Cupons", "F3 Registrar Uso"];

    fn index(self) -> usize {
        match self {
            Self::Create => 0,
            Self::List => 1,
            Self::Redeem => 2,
        }
    }
}

#[derive(Debug)]
pub struct MerchantView {
    merchant: Merchant,
    calendar: BusinessCalendar,
    tab: Tab,
    create_form: Form,
    filter: StatusFilter,
    coupons: Vec<Coupon>,
    selected: usize,
    code: Input,
    /// Coupon listing in flight
    listing: Phase,
    creating: Phase,
    redeeming: Phase,
    notice: Option<Notice>,
    confirm: Option<Confirm>,
}

fn create_form() -> Form {
    Form::new(vec![
        Field::text("tit_cupom", "Título"),
        Field::text("dta_inicio_cupom", "Data de Início").placeholder("AAAA-MM-DD"),
        Field::text("dta_termino_cupom", "Data de Término").placeholder("AAAA-MM-DD"),
        Field::text("per_desc_cupom", "Desconto (%)").placeholder("1 a 100"),
        Field::text("qtd_cupons", "Quantidade").placeholder("1"),
    ])
}

impl MerchantView {
    pub fn open(merchant: Merchant, calendar: BusinessCalendar) -> (Self, Vec<Effect>) {
        let view = Self {
            merchant,
            calendar,
            tab: Tab::Create,
            create_form: create_form(),
            filter: StatusFilter::default(),
            coupons: Vec::new(),
            selected: 0,
            code: Input::default(),
            listing: Phase::Idle,
            creating: Phase::Idle,
            redeeming: Phase::Idle,
            notice: None,
            confirm: None,
        };
        (view, vec![])
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn confirm(&self) -> Option<&Confirm> {
        self.confirm.as_ref()
    }

    /// Any call in flight
    pub fn is_loading(&self) -> bool {
        self.listing.is_loading() || self.creating.is_loading() || self.redeeming.is_loading()
    }

    #[cfg(test)]
    pub(crate) fn create_form_mut(&mut self) -> &mut Form {
        &mut self.create_form
    }

    /// List and redeem tabs share one filter
    fn load(&mut self) -> Vec<Effect> {
        self.listing = Phase::Loading;
        vec![Effect::Request(Command::LoadMerchantCoupons {
            cnpj: self.merchant.cnpj.clone(),
            filter: self.filter,
        })]
    }

    fn cycle_filter(&mut self, forward: bool) -> Vec<Effect> {
        self.filter = if forward {
            self.filter.next()
        } else {
            self.filter.prev()
        };
        self.selected = 0;
        self.load()
    }

    fn switch(&mut self, tab: Tab) -> Vec<Effect> {
        self.tab = tab;
        self.notice = None;
        match tab {
            Tab::Create => vec![],
            Tab::List | Tab::Redeem => {
                self.coupons.clear();
                self.selected = 0;
                self.load()
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if self.confirm.is_some() {
            return match answer_confirm(&mut self.confirm, key) {
                Some(command) => {
                    self.redeeming = Phase::Loading;
                    vec![Effect::Request(command)]
                }
                None => vec![],
            };
        }

        match key.code {
            KeyCode::F(1) => self.switch(Tab::Create),
            KeyCode::F(2) => self.switch(Tab::List),
            KeyCode::F(3) => self.switch(Tab::Redeem),
            KeyCode::F(10) => vec![Effect::Logout],
            _ => match self.tab {
                Tab::Create => self.create_key(key),
                Tab::List => self.list_key(key),
                Tab::Redeem => self.redeem_key(key),
            },
        }
    }

    fn create_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code != KeyCode::Enter {
            if self.create_form.handle_key(key) && self.notice.as_ref().is_some_and(Notice::is_error)
            {
                self.notice = None;
            }
            return vec![];
        }
        if self.creating.is_loading() {
            return vec![];
        }

        let draft = CouponDraft {
            title: self.create_form.value("tit_cupom"),
            start_date: self.create_form.value("dta_inicio_cupom"),
            end_date: self.create_form.value("dta_termino_cupom"),
            discount_percent: self.create_form.value("per_desc_cupom"),
            quantity: self.create_form.value("qtd_cupons"),
        };
        match draft.parse() {
            Ok(payload) => {
                self.creating = Phase::Loading;
                self.notice = None;
                vec![Effect::Request(Command::CreateCoupons {
                    cnpj: self.merchant.cnpj.clone(),
                    payload,
                })]
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.message));
                vec![]
            }
        }
    }

    fn list_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.cycle_filter(key.code == KeyCode::Right),
            KeyCode::Up | KeyCode::Down => {
                self.selected = step(self.selected, self.coupons.len(), key.code == KeyCode::Down);
                vec![]
            }
            _ => vec![],
        }
    }

    fn redeem_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.cycle_filter(key.code == KeyCode::Right),
            KeyCode::Up | KeyCode::Down => {
                self.selected = step(self.selected, self.coupons.len(), key.code == KeyCode::Down);
                if let Some(coupon) = self.coupons.get(self.selected) {
                    self.code = Input::new(coupon.code.clone());
                }
                vec![]
            }
            KeyCode::Enter => {
                if self.redeeming.is_loading() {
                    return vec![];
                }
                let code = self.code.value().trim().to_uppercase();
                if code.is_empty() {
                    self.notice = Some(Notice::error("Informe o código do cupom"));
                    return vec![];
                }
                self.confirm = Some(Confirm {
                    prompt: format!("{} ({code})", messages::CONFIRM_USE),
                    command: Command::RegisterUse {
                        code,
                        cnpj: self.merchant.cnpj.clone(),
                    },
                });
                vec![]
            }
            _ => {
                let before = self.code.value().to_string();
                self.code.handle_event(&Event::Key(key));
                if self.code.value().chars().count() > CODE_LEN {
                    self.code = Input::new(before);
                } else if self.code.value() != before
                    && self.notice.as_ref().is_some_and(Notice::is_error)
                {
                    self.notice = None;
                }
                vec![]
            }
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Created(result) => {
                self.creating = Phase::Idle;
                match result {
                    Ok(response) => {
                        tracing::info!(
                            cnpj = %self.merchant.cnpj,
                            count = response.codes.len(),
                            "coupons created"
                        );
                        self.create_form.reset();
                        self.notice = Some(Notice::info(messages::created(
                            response.message.as_deref(),
                        )));
                    }
                    Err(e) => {
                        tracing::warn!(cnpj = %self.merchant.cnpj, "create coupons failed: {e}");
                        self.notice = Some(Notice::error(e.user_message(messages::CREATE_FAILED)));
                    }
                }
                vec![]
            }
            Outcome::MerchantCoupons(result) => {
                self.listing = Phase::Idle;
                match result {
                    Ok(coupons) => {
                        self.selected = self.selected.min(coupons.len().saturating_sub(1));
                        self.coupons = coupons;
                    }
                    Err(e) => {
                        tracing::warn!(cnpj = %self.merchant.cnpj, "load coupons failed: {e}");
                        self.coupons.clear();
                        self.notice =
                            Some(Notice::error(e.user_message(messages::LOAD_COUPONS_FAILED)));
                    }
                }
                vec![]
            }
            Outcome::UseRegistered(result) => {
                self.redeeming = Phase::Idle;
                match result {
                    Ok(_) => {
                        tracing::info!(cnpj = %self.merchant.cnpj, "coupon use registered");
                        self.code.reset();
                        self.notice = Some(Notice::info(messages::USE_REGISTERED));
                        self.load()
                    }
                    Err(e) => {
                        tracing::warn!(cnpj = %self.merchant.cnpj, "register use failed: {e}");
                        self.notice =
                            Some(Notice::error(e.user_message(messages::REGISTER_USE_FAILED)));
                        vec![]
                    }
                }
            }
            other => {
                tracing::debug!(?other, "ignoring outcome on merchant dashboard");
                vec![]
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let layout = ui::dashboard_layout(frame.area());
        let user = format!("{} ({})", self.merchant.trade_name, self.merchant.cnpj);
        ui::header(frame, layout.header, "Painel do Comércio", &user, self.is_loading());
        ui::tabs(frame, layout.tabs, &Tab::TITLES, self.tab.index());

        let title = format!(" ◀ {} ▶ ", self.filter.label());
        match self.tab {
            Tab::Create => {
                self.create_form
                    .render(frame, layout.body, " Novo Cupom ", self.confirm.is_none());
            }
            Tab::List => self.draw_coupons(frame, layout.body, &title),
            Tab::Redeem => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(1)])
                    .split(layout.body);
                let input = Paragraph::new(self.code.value())
                    .style(Style::default().fg(Color::Yellow))
                    .block(
                        Block::default()
                            .title(" Código do Cupom ")
                            .borders(Borders::ALL),
                    );
                frame.render_widget(input, chunks[0]);
                if self.confirm.is_none() {
                    frame.set_cursor_position((
                        chunks[0].x + self.code.visual_cursor() as u16 + 1,
                        chunks[0].y + 1,
                    ));
                }
                self.draw_coupons(frame, chunks[1], &title);
            }
        }

        ui::notice(frame, layout.notice, self.notice.as_ref());

        let hints: &[(&str, &str)] = match self.tab {
            Tab::Create => &[("Enter", "Criar"), ("Tab", "Próximo"), ("F10", "Sair")],
            Tab::List => &[("←/→", "Filtro"), ("↑/↓", "Navegar"), ("F10", "Sair")],
            Tab::Redeem => &[
                ("Enter", "Registrar uso"),
                ("↑/↓", "Selecionar"),
                ("←/→", "Filtro"),
                ("F10", "Sair"),
            ],
        };
        ui::hints(frame, layout.hints, hints);

        if let Some(confirm) = &self.confirm {
            ui::confirm(frame, confirm);
        }
    }

    fn draw_coupons(&self, frame: &mut Frame, area: Rect, title: &str) {
        if self.listing.is_loading() && self.coupons.is_empty() {
            ui::placeholder(frame, area, title, messages::LOADING);
            return;
        }
        if self.coupons.is_empty() {
            ui::placeholder(frame, area, title, messages::NO_COUPONS);
            return;
        }

        let today = self.calendar.today();
        let items: Vec<ListItem> = self
            .coupons
            .iter()
            .map(|c| {
                let mut lines = vec![
                    Line::from(vec![
                        ui::status_badge(c.status(today)),
                        Span::raw(" "),
                        Span::styled(c.code.clone(), Style::default().fg(Color::Cyan)),
                        Span::raw("  "),
                        Span::styled(c.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(c.discount_label(), Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(format!(
                        "   Válido de {} a {}",
                        c.start_date.format("%d/%m/%Y"),
                        c.end_date.format("%d/%m/%Y")
                    )),
                ];
                if let Some(used_at) = c.used_at {
                    lines.push(Line::from(Span::styled(
                        format!(
                            "   Usado em {} por {}",
                            used_at.format("%d/%m/%Y %H:%M"),
                            c.member_cpf.as_deref().unwrap_or("-")
                        ),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(title.to_string()).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
