use crate::app::AppState;
use crate::command::Command;
use crate::input::{AppInputEvent, InputHookResult};
use crate::notify::FeatureAction;

use super::traits::{Extension, ExtensionEnv};

pub const NOTIFICATIONS_FEATURE: &str = "Notificações";
pub const MESSAGES_FEATURE: &str = "Mensagens";

/// Header shortcuts: bell and message buttons. Lower case opens, upper case closes.
pub struct HeaderExtension;

impl Extension for HeaderExtension {
    type State = ();

    fn init_state(_env: &ExtensionEnv) -> Self::State {}

    fn handle_input(
        _state: &mut Self::State,
        event: AppInputEvent,
        _app: &mut AppState,
    ) -> InputHookResult {
        let (feature, action) = match event.plain_char() {
            Some('b') => (NOTIFICATIONS_FEATURE, FeatureAction::Enter),
            Some('B') => (NOTIFICATIONS_FEATURE, FeatureAction::Exit),
            Some('m') => (MESSAGES_FEATURE, FeatureAction::Enter),
            Some('M') => (MESSAGES_FEATURE, FeatureAction::Exit),
            _ => return InputHookResult::Ignored,
        };
        InputHookResult::EmitCommand(Command::FeatureToast {
            feature: feature.to_string(),
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::HeaderExtension;
    use crate::app::AppState;
    use crate::command::Command;
    use crate::extension::Extension;
    use crate::input::{AppInputEvent, InputHookResult};
    use crate::notify::FeatureAction;

    #[test]
    fn bell_and_message_keys_emit_feature_toasts() {
        let mut app = AppState::default();
        let result = HeaderExtension::handle_input(
            &mut (),
            AppInputEvent::Key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            &mut app,
        );
        assert_eq!(
            result,
            InputHookResult::EmitCommand(Command::FeatureToast {
                feature: "Mensagens".to_string(),
                action: FeatureAction::Exit,
            })
        );

        let ignored = HeaderExtension::handle_input(
            &mut (),
            AppInputEvent::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            &mut app,
        );
        assert_eq!(ignored, InputHookResult::Ignored);
    }
}
