#[cfg(test)]
#[path = "emotion_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Emotions with a bundled icon. Post labels outside of this set are still
/// valid on the wire, they are displayed with the neutral icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Neutral,
}

impl Emotion {
    pub fn parse(text: &str) -> Option<Emotion> {
        return Emotion::iter().find(|e| return e.to_string() == text);
    }

    /// Resolves an optional post label to the emotion used for display.
    pub fn for_label(label: Option<&str>) -> Emotion {
        return label
            .and_then(|text| return Emotion::parse(text.trim()))
            .unwrap_or(Emotion::Neutral);
    }

    pub fn icon_file(&self) -> String {
        return format!("{self}.svg");
    }
}
