//! Login and registration screen

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::validation;
use shared::{Category, LoginRequest, MemberRegistration, MerchantRegistration, UserType};

use crate::action::{Command, Effect, Notice, Outcome, Phase};
use crate::form::{Field, Form};
use crate::{messages, ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Register,
}

#[derive(Debug)]
pub struct LoginView {
    mode: Mode,
    user_type: UserType,
    form: Form,
    phase: Phase,
    notice: Option<Notice>,
}

fn login_form(user_type: UserType) -> Form {
    Form::new(vec![
        Field::text("identificador", user_type.identifier_label()),
        Field::secret("senha", "Senha"),
    ])
}

fn member_form() -> Form {
    Form::new(vec![
        Field::text("cpf_associado", "CPF"),
        Field::text("nom_associado", "Nome Completo"),
        Field::text("dtn_associado", "Data de Nascimento").placeholder("AAAA-MM-DD"),
        Field::text("end_associado", "Endereço"),
        Field::text("bairro_associado", "Bairro"),
        Field::text("cep_associado", "CEP"),
        Field::text("cid_associado", "Cidade"),
        Field::text("uf_associado", "UF").max_len(2),
        Field::text("cel_associado", "Celular"),
        Field::text("email_associado", "Email"),
        Field::secret("sen_associado", "Senha"),
    ])
}

fn merchant_form() -> Form {
    let categories = Category::seeded()
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    Form::new(vec![
        Field::text("cnpj_comercio", "CNPJ"),
        Field::choice("id_categoria", "Categoria", categories),
        Field::text("raz_social_comercio", "Razão Social"),
        Field::text("nom_fantasia_comercio", "Nome Fantasia"),
        Field::text("end_comercio", "Endereço"),
        Field::text("bairro_comercio", "Bairro"),
        Field::text("cep_comercio", "CEP"),
        Field::text("cid_comercio", "Cidade"),
        Field::text("uf_comercio", "UF").max_len(2),
        Field::text("con_comercio", "Telefone de Contato"),
        Field::text("email_comercio", "Email"),
        Field::secret("sen_comercio", "Senha"),
    ])
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    pub fn new() -> Self {
        let user_type = UserType::default();
        Self {
            mode: Mode::Login,
            user_type,
            form: login_form(user_type),
            phase: Phase::Idle,
            notice: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    #[cfg(test)]
    pub(crate) fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    fn rebuild_form(&mut self) {
        self.form = match (self.mode, self.user_type) {
            (Mode::Login, t) => login_form(t),
            (Mode::Register, UserType::Member) => member_form(),
            (Mode::Register, UserType::Merchant) => merchant_form(),
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::Quit],
            KeyCode::F(2) => {
                self.mode = match self.mode {
                    Mode::Login => Mode::Register,
                    Mode::Register => Mode::Login,
                };
                self.notice = None;
                self.rebuild_form();
                vec![]
            }
            KeyCode::F(3) => {
                self.user_type = self.user_type.toggle();
                self.notice = None;
                self.rebuild_form();
                vec![]
            }
            KeyCode::Enter => self.submit(),
            _ => {
                if self.form.handle_key(key) && self.notice.as_ref().is_some_and(Notice::is_error) {
                    self.notice = None;
                }
                vec![]
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.phase.is_loading() {
            return vec![];
        }
        let command = match self.mode {
            Mode::Login => {
                let request = LoginRequest {
                    identifier: self.form.value("identificador").trim().to_string(),
                    password: self.form.value("senha"),
                    user_type: self.user_type,
                };
                validation::check(&request).map(|_| Command::Login(request))
            }
            Mode::Register => match self.user_type {
                UserType::Member => {
                    let form = self.member_registration();
                    validation::check(&form).map(|_| Command::RegisterMember(form))
                }
                UserType::Merchant => {
                    let form = self.merchant_registration();
                    validation::check(&form).map(|_| Command::RegisterMerchant(form))
                }
            },
        };

        match command {
            Ok(command) => {
                self.phase = Phase::Loading;
                self.notice = None;
                vec![Effect::Request(command)]
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.message));
                vec![]
            }
        }
    }

    fn member_registration(&self) -> MemberRegistration {
        let v = |key: &str| self.form.value(key).trim().to_string();
        MemberRegistration {
            cpf: v("cpf_associado"),
            name: v("nom_associado"),
            birth_date: v("dtn_associado"),
            address: v("end_associado"),
            district: v("bairro_associado"),
            postal_code: v("cep_associado"),
            city: v("cid_associado"),
            state: v("uf_associado").to_uppercase(),
            phone: v("cel_associado"),
            email: v("email_associado"),
            password: self.form.value("sen_associado"),
        }
    }

    fn merchant_registration(&self) -> MerchantRegistration {
        let v = |key: &str| self.form.value(key).trim().to_string();
        MerchantRegistration {
            cnpj: v("cnpj_comercio"),
            category_id: v("id_categoria"),
            legal_name: v("raz_social_comercio"),
            trade_name: v("nom_fantasia_comercio"),
            address: v("end_comercio"),
            district: v("bairro_comercio"),
            postal_code: v("cep_comercio"),
            city: v("cid_comercio"),
            state: v("uf_comercio").to_uppercase(),
            phone: v("con_comercio"),
            email: v("email_comercio"),
            password: self.form.value("sen_comercio"),
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::LoggedIn(result) => {
                self.phase = Phase::Idle;
                match result {
                    Ok(user) => vec![Effect::Enter(user)],
                    Err(e) => {
                        tracing::warn!(tipo = %self.user_type, "login failed: {e}");
                        self.notice = Some(Notice::error(e.user_message(messages::LOGIN_FAILED)));
                        vec![]
                    }
                }
            }
            Outcome::Registered(result) => {
                self.phase = Phase::Idle;
                match result {
                    Ok(_) => {
                        tracing::info!(tipo = %self.user_type, "registration succeeded");
                        self.mode = Mode::Login;
                        self.rebuild_form();
                        self.notice = Some(Notice::info(messages::REGISTERED));
                    }
                    Err(e) => {
                        tracing::warn!(tipo = %self.user_type, "registration failed: {e}");
                        self.notice =
                            Some(Notice::error(e.user_message(messages::REGISTER_FAILED)));
                    }
                }
                vec![]
            }
            other => {
                tracing::debug!(?other, "ignoring outcome on login screen");
                vec![]
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let height = match self.mode {
            Mode::Login => 60,
            Mode::Register => 90,
        };
        let area = ui::centered_rect(70, height, frame.area());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Form
                Constraint::Length(3), // Notice
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let title = match self.mode {
            Mode::Login => "Login",
            Mode::Register => "Cadastro",
        };
        let tipo = Line::from(vec![
            Span::raw(" Tipo: "),
            Span::styled(
                self.user_type.label(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(tipo).block(
                Block::default()
                    .title(format!(" Cupom | {title} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
            chunks[0],
        );

        self.form.render(frame, chunks[1], "", !self.phase.is_loading());

        let loading = self.phase.is_loading().then(|| Notice::info(messages::LOADING));
        ui::notice(frame, chunks[2], loading.as_ref().or(self.notice.as_ref()));

        let switch = match self.mode {
            Mode::Login => "Cadastrar",
            Mode::Register => "Voltar ao login",
        };
        ui::hints(
            frame,
            chunks[3],
            &[
                ("Enter", "Enviar"),
                ("Tab", "Próximo"),
                ("F2", switch),
                ("F3", "Associado/Comércio"),
                ("Esc", "Sair"),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::key;
    use cupom_client::{ClientError, StatusCode};

    fn fill_login(view: &mut LoginView, id: &str, password: &str) {
        view.form_mut().set_value("identificador", id);
        view.form_mut().set_value("senha", password);
    }

    #[test]
    fn submit_login_requests_with_selected_type() {
        let mut view = LoginView::new();
        view.handle_key(key(KeyCode::F(3)));
        assert_eq!(view.user_type(), UserType::Merchant);
        fill_login(&mut view, " 11222333000181 ", "s3nha");

        let effects = view.handle_key(key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::Request(Command::Login(LoginRequest {
                identifier: "11222333000181".into(),
                password: "s3nha".into(),
                user_type: UserType::Merchant,
            }))]
        );
        assert!(view.is_loading());
        // Ignored while the call is in flight
        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn empty_login_is_rejected_locally() {
        let mut view = LoginView::new();
        let effects = view.handle_key(key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some("Identificador é obrigatório"));
        assert!(!view.is_loading());
    }

    #[test]
    fn login_error_shows_server_detail_verbatim() {
        let mut view = LoginView::new();
        fill_login(&mut view, "00000000000", "x");
        view.handle_key(key(KeyCode::Enter));

        view.apply(Outcome::LoggedIn(Err(ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            detail: Some("Usuário não encontrado".into()),
        })));
        let notice = view.notice().expect("notice");
        assert!(notice.is_error());
        assert_eq!(notice.text, "Usuário não encontrado");
        assert!(!view.is_loading());

        // Editing a field clears the error
        view.handle_key(key(KeyCode::Char('1')));
        assert!(view.notice().is_none());
    }

    #[test]
    fn login_error_without_detail_uses_fallback() {
        let mut view = LoginView::new();
        view.apply(Outcome::LoggedIn(Err(ClientError::Api {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        })));
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some(messages::LOGIN_FAILED));
    }

    #[test]
    fn successful_registration_returns_to_login() {
        let mut view = LoginView::new();
        view.handle_key(key(KeyCode::F(2)));
        assert_eq!(view.mode(), Mode::Register);

        let values = [
            ("cpf_associado", "52998224725"),
            ("nom_associado", "Maria Souza"),
            ("dtn_associado", "1990-02-10"),
            ("end_associado", "Rua A, 1"),
            ("bairro_associado", "Centro"),
            ("cep_associado", "01000-000"),
            ("cid_associado", "São Paulo"),
            ("uf_associado", "sp"),
            ("cel_associado", "11999990000"),
            ("email_associado", "maria@example.com"),
            ("sen_associado", "segredo"),
        ];
        for (k, v) in values {
            view.form_mut().set_value(k, v);
        }

        let effects = view.handle_key(key(KeyCode::Enter));
        let [Effect::Request(Command::RegisterMember(form))] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        assert_eq!(form.state, "SP");
        assert_eq!(form.password, "segredo");

        view.apply(Outcome::Registered(Ok(shared::ActionResponse {
            success: true,
            message: Some("Associado cadastrado".into()),
            codes: vec![],
        })));
        assert_eq!(view.mode(), Mode::Login);
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some(messages::REGISTERED));
        assert_eq!(view.form_mut().value("identificador"), "");
    }

    #[test]
    fn merchant_registration_needs_a_category() {
        let mut view = LoginView::new();
        view.handle_key(key(KeyCode::F(3)));
        view.handle_key(key(KeyCode::F(2)));
        let values = [
            ("cnpj_comercio", "11222333000181"),
            ("raz_social_comercio", "Napoli Alimentos LTDA"),
            ("nom_fantasia_comercio", "Pizzaria Napoli"),
            ("end_comercio", "Rua Augusta, 500"),
            ("bairro_comercio", "Consolação"),
            ("cep_comercio", "01305-000"),
            ("cid_comercio", "São Paulo"),
            ("uf_comercio", "SP"),
            ("con_comercio", "1133334444"),
            ("email_comercio", "contato@napoli.example"),
            ("sen_comercio", "segredo"),
        ];
        for (k, v) in values {
            view.form_mut().set_value(k, v);
        }
        assert!(view.handle_key(key(KeyCode::Enter)).is_empty());
        assert_eq!(view.notice().map(|n| n.text.as_str()), Some("Categoria é obrigatória"));

        view.form_mut().set_value("id_categoria", "cat002");
        let effects = view.handle_key(key(KeyCode::Enter));
        let [Effect::Request(Command::RegisterMerchant(form))] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        assert_eq!(form.category_id, "cat002");
    }
}
