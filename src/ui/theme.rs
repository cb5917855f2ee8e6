use ratatui::style::Color;

use crate::config::{parse_color, UiConfig};
use crate::error::ConfigError;
use crate::game::Player;

/// Colors used for each player's lines and status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    player_one: Color,
    player_two: Color,
}

impl Theme {
    pub fn from_config(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Theme {
            player_one: parse_color("ui.player_one_color", &config.player_one_color)?,
            player_two: parse_color("ui.player_two_color", &config.player_two_color)?,
        })
    }

    pub fn color_for(&self, player: Player) -> Color {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            player_one: Color::Red,
            player_two: Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_theme() {
        let theme = Theme::from_config(&UiConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
        assert_eq!(theme.color_for(Player::One), Color::Red);
        assert_eq!(theme.color_for(Player::Two), Color::Blue);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let config = UiConfig {
            player_one_color: "plaid".to_string(),
            ..UiConfig::default()
        };
        assert!(Theme::from_config(&config).is_err());
    }
}
