use serde::{Deserialize, Serialize};

use crate::section::{NavDirection, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum KeyCommand {
    Step(NavDirection),
    Jump(Section),
}

impl KeyCommand {
    /// Maps a `KeyboardEvent.key` value to a page command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyCommand::Step(NavDirection::Up)),
            "ArrowDown" => Some(KeyCommand::Step(NavDirection::Down)),
            "1" => Some(KeyCommand::Jump(Section::Steps)),
            "2" => Some(KeyCommand::Jump(Section::Methods)),
            "3" => Some(KeyCommand::Jump(Section::Finish)),
            _ => None,
        }
    }

    /// Arrow keys would otherwise scroll the page a few pixels before the
    /// smooth scroll starts.
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyCommand::Step(_))
    }
}

pub fn is_escape(key: &str) -> bool {
    key == "Escape"
}

/// Vertical swipe between `touchstart` and `touchend`, in screen pixels.
/// Moving the finger up scrolls the page down, so it maps to `Down`.
pub fn classify_swipe(start_y: f64, end_y: f64, threshold: f64) -> Option<NavDirection> {
    let diff = start_y - end_y;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(NavDirection::Down)
    } else {
        Some(NavDirection::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_and_suppress_default() {
        let up = KeyCommand::from_key("ArrowUp");
        assert_eq!(up, Some(KeyCommand::Step(NavDirection::Up)));
        assert!(up.is_some_and(KeyCommand::suppresses_default));
        assert_eq!(
            KeyCommand::from_key("ArrowDown"),
            Some(KeyCommand::Step(NavDirection::Down))
        );
    }

    #[test]
    fn digits_jump_without_suppressing_default() {
        assert_eq!(
            KeyCommand::from_key("2"),
            Some(KeyCommand::Jump(Section::Methods))
        );
        assert_eq!(
            KeyCommand::from_key("3"),
            Some(KeyCommand::Jump(Section::Finish))
        );
        assert!(!KeyCommand::Jump(Section::Steps).suppresses_default());
        assert_eq!(KeyCommand::from_key("4"), None);
        assert_eq!(KeyCommand::from_key("Escape"), None);
    }

    #[test]
    fn swipe_up_navigates_down() {
        assert_eq!(classify_swipe(400.0, 300.0, 50.0), Some(NavDirection::Down));
        assert_eq!(classify_swipe(300.0, 400.0, 50.0), Some(NavDirection::Up));
    }

    #[test]
    fn swipe_at_threshold_is_ignored() {
        assert_eq!(classify_swipe(400.0, 350.0, 50.0), None);
        assert_eq!(classify_swipe(350.0, 400.0, 50.0), None);
        assert_eq!(classify_swipe(400.0, 349.0, 50.0), Some(NavDirection::Down));
    }
}
