//! cupom: terminal client for the coupon backend
//!
//! Merchants issue coupons and register their use; members browse, reserve
//! and follow their coupons.

mod action;
mod app;
mod form;
mod logger;
mod messages;
mod ui;
mod views;

use std::io;
use std::sync::Arc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use cupom_client::ClientConfig;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_dir = std::env::var("CUPOM_LOG_DIR").ok();
    logger::init_logger(log_dir.as_deref())?;

    let config = ClientConfig::from_env();
    let client = config.build_http_client()?;
    tracing::info!(
        base_url = %config.base_url,
        timezone = %config.calendar.timezone(),
        "cupom starting"
    );

    let mut app = App::new(Arc::new(client), config.calendar);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        tracing::error!("cupom stopped: {e:#}");
    } else {
        tracing::info!("cupom stopped");
    }
    res
}
