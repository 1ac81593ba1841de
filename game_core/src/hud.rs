use crate::util::on_off;
use crate::{Config, Score, Settings};

/// Text shown next to the play field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub left_score: String,
    pub right_score: String,
    pub computer_level: String,
    pub mouse_control: &'static str,
    pub mute: &'static str,
    pub volume: String,
}

impl Hud {
    pub fn new(score: &Score, settings: &Settings, config: &Config) -> Self {
        let computer_level = config
            .computer_levels
            .get(settings.computer_level)
            .map(|level| level.name.clone())
            .unwrap_or_default();
        Self {
            left_score: score.left.to_string(),
            right_score: score.right.to_string(),
            computer_level,
            mouse_control: on_off(settings.mouse_control),
            mute: on_off(settings.mute),
            volume: settings.volume.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_hud_labels() {
        let config = Config::new();
        let mut score = Score::new();
        score.increment(Side::Right);
        let mut settings = Settings::new(&config);
        settings.computer_level = 3;
        settings.mute = true;

        let hud = Hud::new(&score, &settings, &config);

        assert_eq!(hud.left_score, "0");
        assert_eq!(hud.right_score, "1");
        assert_eq!(hud.computer_level, "Hard");
        assert_eq!(hud.mouse_control, "Off");
        assert_eq!(hud.mute, "On");
        assert_eq!(hud.volume, "7");
    }
}
