//! Screens
//!
//! Each view owns its state and reduces key presses and call outcomes into
//! [`Effect`](crate::action::Effect)s. Nothing here touches the terminal
//! outside of `draw`, so the views are tested headless.

pub mod login;
pub mod member;
pub mod merchant;

pub use login::LoginView;
pub use member::MemberView;
pub use merchant::MerchantView;

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::{Command, Confirm};

/// Resolve a key pressed while a confirmation popup is open
///
/// Yes returns the pending command, no drops it; other keys keep the popup.
pub(crate) fn answer_confirm(pending: &mut Option<Confirm>, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s' | 'S' | 'y' | 'Y') => pending.take().map(|c| c.command),
        KeyCode::Esc | KeyCode::Char('n' | 'N') => {
            pending.take();
            None
        }
        _ => None,
    }
}

/// Move a list cursor, wrapping at both ends
pub(crate) fn step(selected: usize, len: usize, forward: bool) -> usize {
    match (len, forward) {
        (0, _) => 0,
        (_, true) => (selected + 1) % len,
        (_, false) => selected.checked_sub(1).unwrap_or(len - 1).min(len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::key;

    #[test]
    fn confirm_yes_and_no() {
        let confirm = Confirm {
            prompt: "?".into(),
            command: Command::LoadCategories,
        };

        let mut pending = Some(confirm.clone());
        assert_eq!(answer_confirm(&mut pending, key(KeyCode::Char('x'))), None);
        assert!(pending.is_some());
        assert_eq!(
            answer_confirm(&mut pending, key(KeyCode::Char('s'))),
            Some(Command::LoadCategories)
        );
        assert!(pending.is_none());

        let mut pending = Some(confirm);
        assert_eq!(answer_confirm(&mut pending, key(KeyCode::Esc)), None);
        assert!(pending.is_none());
    }

    #[test]
    fn step_wraps() {
        assert_eq!(step(0, 0, true), 0);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(5, 3, false), 2);
    }
}
