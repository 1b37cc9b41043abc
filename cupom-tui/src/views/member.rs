//! Member dashboard: browse and reserve coupons, follow own reservations

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::{BusinessCalendar, Category, Coupon, Member, Reservation, StatusFilter};

use crate::action::{Command, Confirm, Effect, Notice, Outcome, Phase};
use crate::views::{answer_confirm, step};
use crate::{messages, ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Mine,
}

impl Tab {
    const TITLES: [&'static str; 2] = ["F1 Buscar Cupons", "F2 Meus Cupons"];

    fn index(self) -> usize {
        match self {
            Self::Search => 0,
            Self::Mine => 1,
        }
    }
}

#[derive(Debug)]
pub struct MemberView {
    member: Member,
    calendar: BusinessCalendar,
    tab: Tab,
    categories: Vec<Category>,
    /// Index into `categories`; `None` lists every category
    category: Option<usize>,
    available: Vec<Coupon>,
    reservations: Vec<Reservation>,
    filter: StatusFilter,
    selected: usize,
    /// Coupon or reservation listing in flight
    listing: Phase,
    reserving: Phase,
    notice: Option<Notice>,
    confirm: Option<Confirm>,
}

impl MemberView {
    /// Open on the search tab; categories and the unfiltered list load at once
    pub fn open(member: Member, calendar: BusinessCalendar) -> (Self, Vec<Effect>) {
        let view = Self {
            member,
            calendar,
            tab: Tab::Search,
            categories: Vec::new(),
            category: None,
            available: Vec::new(),
            reservations: Vec::new(),
            filter: StatusFilter::default(),
            selected: 0,
            listing: Phase::Loading,
            reserving: Phase::Idle,
            notice: None,
            confirm: None,
        };
        let effects = vec![
            Effect::Request(Command::LoadCategories),
            Effect::Request(Command::LoadAvailable { category: None }),
        ];
        (view, effects)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn available(&self) -> &[Coupon] {
        &self.available
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn confirm(&self) -> Option<&Confirm> {
        self.confirm.as_ref()
    }

    /// Any call in flight
    pub fn is_loading(&self) -> bool {
        self.listing.is_loading() || self.reserving.is_loading()
    }

    fn category_id(&self) -> Option<String> {
        self.category
            .and_then(|i| self.categories.get(i))
            .map(|c| c.id.clone())
    }

    fn category_label(&self) -> &str {
        self.category
            .and_then(|i| self.categories.get(i))
            .map(|c| c.name.as_str())
            .unwrap_or("Todas as categorias")
    }

    fn load_available(&mut self) -> Vec<Effect> {
        self.listing = Phase::Loading;
        vec![Effect::Request(Command::LoadAvailable {
            category: self.category_id(),
        })]
    }

    fn load_reservations(&mut self) -> Vec<Effect> {
        self.listing = Phase::Loading;
        vec![Effect::Request(Command::LoadReservations {
            cpf: self.member.cpf.clone(),
            filter: self.filter,
        })]
    }

    fn switch(&mut self, tab: Tab) -> Vec<Effect> {
        self.tab = tab;
        self.notice = None;
        self.selected = 0;
        match tab {
            Tab::Search => self.load_available(),
            Tab::Mine => self.load_reservations(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if self.confirm.is_some() {
            return match answer_confirm(&mut self.confirm, key) {
                Some(command) => {
                    self.reserving = Phase::Loading;
                    vec![Effect::Request(command)]
                }
                None => vec![],
            };
        }

        match key.code {
            KeyCode::F(1) => self.switch(Tab::Search),
            KeyCode::F(2) => self.switch(Tab::Mine),
            KeyCode::F(10) => vec![Effect::Logout],
            KeyCode::Up | KeyCode::Down => {
                let len = match self.tab {
                    Tab::Search => self.available.len(),
                    Tab::Mine => self.reservations.len(),
                };
                self.selected = step(self.selected, len, key.code == KeyCode::Down);
                vec![]
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                self.selected = 0;
                match self.tab {
                    Tab::Search => {
                        self.category = cycle_category(self.category, self.categories.len(), forward);
                        self.load_available()
                    }
                    Tab::Mine => {
                        self.filter = if forward {
                            self.filter.next()
                        } else {
                            self.filter.prev()
                        };
                        self.load_reservations()
                    }
                }
            }
            KeyCode::Enter if self.tab == Tab::Search && !self.reserving.is_loading() => {
                if let Some(coupon) = self.available.get(self.selected) {
                    self.confirm = Some(Confirm {
                        prompt: format!("{} ({})", messages::CONFIRM_RESERVE, coupon.title),
                        command: Command::Reserve {
                            code: coupon.code.clone(),
                            cpf: self.member.cpf.clone(),
                        },
                    });
                }
                vec![]
            }
            _ => vec![],
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Categories(result) => {
                match result {
                    Ok(categories) => self.categories = categories,
                    Err(e) => tracing::warn!("load categories failed: {e}"),
                }
                vec![]
            }
            Outcome::Available(result) => {
                self.listing = Phase::Idle;
                match result {
                    Ok(coupons) => {
                        self.selected = self.selected.min(coupons.len().saturating_sub(1));
                        self.available = coupons;
                    }
                    Err(e) => {
                        tracing::warn!("load available coupons failed: {e}");
                        self.available.clear();
                        self.notice =
                            Some(Notice::error(e.user_message(messages::LOAD_COUPONS_FAILED)));
                    }
                }
                vec![]
            }
            Outcome::Reservations(result) => {
                self.listing = Phase::Idle;
                match result {
                    Ok(reservations) => {
                        self.selected = self.selected.min(reservations.len().saturating_sub(1));
                        self.reservations = reservations;
                    }
                    Err(e) => {
                        tracing::warn!(cpf = %self.member.cpf, "load reservations failed: {e}");
                        self.reservations.clear();
                        self.notice = Some(Notice::error(
                            e.user_message(messages::LOAD_RESERVATIONS_FAILED),
                        ));
                    }
                }
                vec![]
            }
            Outcome::Reserved(result) => {
                self.reserving = Phase::Idle;
                match result {
                    Ok(_) => {
                        tracing::info!(cpf = %self.member.cpf, "coupon reserved");
                        self.notice = Some(Notice::info(messages::RESERVED));
                        self.load_available()
                    }
                    Err(e) => {
                        tracing::warn!(cpf = %self.member.cpf, "reserve failed: {e}");
                        self.notice = Some(Notice::error(e.user_message(messages::RESERVE_FAILED)));
                        vec![]
                    }
                }
            }
            other => {
                tracing::debug!(?other, "ignoring outcome on member dashboard");
                vec![]
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let layout = ui::dashboard_layout(frame.area());
        let user = format!("{} ({})", self.member.name, self.member.cpf);
        ui::header(frame, layout.header, "Painel do Associado", &user, self.is_loading());
        ui::tabs(frame, layout.tabs, &Tab::TITLES, self.tab.index());

        match self.tab {
            Tab::Search => self.draw_available(frame, layout.body),
            Tab::Mine => self.draw_reservations(frame, layout.body),
        }

        ui::notice(frame, layout.notice, self.notice.as_ref());

        let hints: &[(&str, &str)] = match self.tab {
            Tab::Search => &[
                ("←/→", "Categoria"),
                ("↑/↓", "Navegar"),
                ("Enter", "Reservar"),
                ("F10", "Sair"),
            ],
            Tab::Mine => &[("←/→", "Filtro"), ("↑/↓", "Navegar"), ("F10", "Sair")],
        };
        ui::hints(frame, layout.hints, hints);

        if let Some(confirm) = &self.confirm {
            ui::confirm(frame, confirm);
        }
    }

    /// Placeholder for the current tab's list when it has no rows
    fn empty_text(&self) -> &'static str {
        if self.listing.is_loading() {
            return messages::LOADING;
        }
        match self.tab {
            Tab::Search => messages::NO_AVAILABLE,
            Tab::Mine => messages::NO_COUPONS,
        }
    }

    fn draw_available(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" ◀ {} ▶ ", self.category_label());
        if self.available.is_empty() {
            ui::placeholder(frame, area, &title, self.empty_text());
            return;
        }

        let items: Vec<ListItem> = self
            .available
            .iter()
            .map(|c| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(c.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(
                            format!("{} OFF", c.discount_label()),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled(
                            format!("   {}", c.merchant_name.as_deref().unwrap_or("-")),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::raw(format!(
                            " · {} · até {}",
                            c.category_name.as_deref().unwrap_or("-"),
                            c.end_date.format("%d/%m/%Y")
                        )),
                    ]),
                ])
            })
            .collect();
        self.render_list(frame, area, items, &title);
    }

    fn draw_reservations(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" ◀ {} ▶ ", self.filter.label());
        if self.reservations.is_empty() {
            ui::placeholder(frame, area, &title, self.empty_text());
            return;
        }

        let today = self.calendar.today();
        let items: Vec<ListItem> = self
            .reservations
            .iter()
            .map(|r| {
                let mut head = Vec::new();
                if let Some(status) = r.status(today) {
                    head.push(ui::status_badge(status));
                    head.push(Span::raw(" "));
                }
                head.push(Span::styled(r.coupon_code.clone(), Style::default().fg(Color::Cyan)));
                if let Some(c) = &r.coupon {
                    head.push(Span::raw("  "));
                    head.push(Span::styled(
                        c.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                    head.push(Span::raw("  "));
                    head.push(Span::styled(c.discount_label(), Style::default().fg(Color::Yellow)));
                }

                let mut lines = vec![Line::from(head)];
                let mut detail = format!("   Reservado em {}", r.reserved_at.format("%d/%m/%Y %H:%M"));
                if let Some(c) = &r.coupon {
                    detail.push_str(&format!(" · válido até {}", c.end_date.format("%d/%m/%Y")));
                }
                if let Some(used_at) = r.used_at {
                    detail.push_str(&format!(" · usado em {}", used_at.format("%d/%m/%Y %H:%M")));
                }
                lines.push(Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))));
                ListItem::new(lines)
            })
            .collect();
        self.render_list(frame, area, items, &title);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, items: Vec<ListItem>, title: &str) {
        let list = List::new(items)
            .block(Block::default().title(title.to_string()).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// `None` (all) → first → … → last → `None`
fn cycle_category(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) if i + 1 < len => Some(i + 1),
        (Some(i), false) if i > 0 => Some(i - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::key;
    use chrono::NaiveDate;
    use cupom_client::{ClientError, StatusCode};
    use shared::ActionResponse;

    const CPF: &str = "52998224725";

    fn member() -> Member {
        Member {
            cpf: CPF.into(),
            name: "Maria Souza".into(),
            birth_date: "1990-02-10".into(),
            address: "Rua A, 1".into(),
            district: "Centro".into(),
            postal_code: "01000-000".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            phone: "11999990000".into(),
            email: "maria@example.com".into(),
        }
    }

    fn coupon(code: &str, title: &str) -> Coupon {
        Coupon {
            code: code.into(),
            title: title.into(),
            merchant_cnpj: "11222333000181".into(),
            issued_on: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2099, 5, 31).unwrap(),
            discount_percent: 15.0,
            merchant_name: Some("Pizzaria Napoli".into()),
            category_name: Some("Alimentação".into()),
            reserved: None,
            used_at: None,
            member_cpf: None,
        }
    }

    fn opened() -> MemberView {
        let (mut view, effects) = MemberView::open(member(), BusinessCalendar::default());
        assert_eq!(
            effects,
            vec![
                Effect::Request(Command::LoadCategories),
                Effect::Request(Command::LoadAvailable { category: None }),
            ]
        );
        view.apply(Outcome::Categories(Ok(Category::seeded())));
        view
    }

    #[test]
    fn reservation_success_refreshes_available_list() {
        let mut view = opened();
        view.apply(Outcome::Available(Ok(vec![
            coupon("AAAAAAAAAAAA", "Pizza em dobro"),
            coupon("BBBBBBBBBBBB", "Sobremesa grátis"),
        ])));
        assert!(!view.is_loading());

        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
        assert!(view.confirm().is_some());
        let effects = view.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::Reserve {
                code: "AAAAAAAAAAAA".into(),
                cpf: CPF.into(),
            })]
        );

        let effects = view.apply(Outcome::Reserved(Ok(ActionResponse {
            success: true,
            message: Some("Cupom reservado".into()),
            codes: vec![],
        })));
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some(messages::RESERVED));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::LoadAvailable { category: None })]
        );

        // The server drops the reserved coupon from the refreshed list
        view.apply(Outcome::Available(Ok(vec![coupon("BBBBBBBBBBBB", "Sobremesa grátis")])));
        assert_eq!(view.available().len(), 1);
        assert!(view.available().iter().all(|c| c.code != "AAAAAAAAAAAA"));
    }

    #[test]
    fn reserve_conflict_shows_detail() {
        let mut view = opened();
        view.apply(Outcome::Available(Ok(vec![coupon("AAAAAAAAAAAA", "Pizza em dobro")])));
        view.handle_key(key(KeyCode::Enter));
        view.handle_key(key(KeyCode::Enter));
        let effects = view.apply(Outcome::Reserved(Err(ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            detail: Some("Cupom já reservado".into()),
        })));
        assert!(effects.is_empty());
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some("Cupom já reservado"));
    }

    #[test]
    fn category_cycling_reloads_with_filter() {
        let mut view = opened();
        view.apply(Outcome::Available(Ok(vec![])));

        let effects = view.handle_key(key(KeyCode::Right));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::LoadAvailable {
                category: Some("cat001".into())
            })]
        );
        view.apply(Outcome::Available(Ok(vec![])));

        let effects = view.handle_key(key(KeyCode::Left));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::LoadAvailable { category: None })]
        );
    }

    #[test]
    fn categories_failure_is_silent() {
        let (mut view, _) = MemberView::open(member(), BusinessCalendar::default());
        view.apply(Outcome::Categories(Err(ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("boom".into()),
        })));
        assert!(view.notice().is_none());
        // Without categories the selector stays on "all"
        assert!(view.handle_key(key(KeyCode::Right)).contains(&Effect::Request(
            Command::LoadAvailable { category: None }
        )));
    }

    #[test]
    fn my_coupons_tab_and_filter_reload() {
        let mut view = opened();
        let effects = view.handle_key(key(KeyCode::F(2)));
        assert_eq!(view.tab(), Tab::Mine);
        assert_eq!(
            effects,
            vec![Effect::Request(Command::LoadReservations {
                cpf: CPF.into(),
                filter: StatusFilter::Active,
            })]
        );

        let effects = view.handle_key(key(KeyCode::Left));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::LoadReservations {
                cpf: CPF.into(),
                filter: StatusFilter::Expired,
            })]
        );

        view.apply(Outcome::Reservations(Err(ClientError::Rejected(None))));
        assert_eq!(
            view.notice().map(|n| n.text.as_str()),
            Some(messages::LOAD_RESERVATIONS_FAILED)
        );
        assert!(view.reservations().is_empty());
    }

    #[test]
    fn enter_on_my_coupons_does_nothing() {
        let mut view = opened();
        view.handle_key(key(KeyCode::F(2)));
        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
        assert!(view.confirm().is_none());
    }

    #[test]
    fn listing_reply_does_not_unlock_a_pending_reservation() {
        let mut view = opened();
        view.apply(Outcome::Available(Ok(vec![coupon("AAAAAAAAAAAA", "Pizza em dobro")])));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(view.handle_key(key(KeyCode::Char('s'))).len(), 1);

        // Switching category reloads the list before the reservation is answered
        view.handle_key(key(KeyCode::Right));
        view.apply(Outcome::Available(Ok(vec![coupon("AAAAAAAAAAAA", "Pizza em dobro")])));
        assert!(view.is_loading());

        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
        assert!(view.confirm().is_none());

        view.apply(Outcome::Reserved(Err(ClientError::Rejected(None))));
        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
        assert!(view.confirm().is_some());
    }

    #[test]
    fn empty_lists_use_their_own_placeholder() {
        let mut view = opened();
        assert_eq!(view.empty_text(), messages::LOADING);
        view.apply(Outcome::Available(Ok(vec![])));
        assert_eq!(view.empty_text(), messages::NO_AVAILABLE);

        view.handle_key(key(KeyCode::F(2)));
        view.apply(Outcome::Reservations(Ok(vec![])));
        assert_eq!(view.empty_text(), messages::NO_COUPONS);
    }

    #[test]
    fn category_cycle_wraps_through_all() {
        assert_eq!(cycle_category(None, 2, true), Some(0));
        assert_eq!(cycle_category(Some(1), 2, true), None);
        assert_eq!(cycle_category(None, 2, false), Some(1));
        assert_eq!(cycle_category(Some(0), 2, false), None);
        assert_eq!(cycle_category(None, 0, true), None);
    }
}
