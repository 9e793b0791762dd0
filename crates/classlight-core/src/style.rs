//! Visual styles for highlighted references.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// How a matched reference is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighlightStyle {
    /// Fill the background with the rule color
    #[default]
    Background,
    /// Draw the text in the rule color
    TextColor,
    LineUnderscore,
    WaveUnderscore,
    DottedUnderline,
    Strikeout,
    RoundedBox,
}

impl HighlightStyle {
    /// Returns the display name for this style
    pub fn display_name(&self) -> &'static str {
        match self {
            HighlightStyle::Background => "Background",
            HighlightStyle::TextColor => "Text color",
            HighlightStyle::LineUnderscore => "Line underscore",
            HighlightStyle::WaveUnderscore => "Wave underscore",
            HighlightStyle::DottedUnderline => "Dotted underline",
            HighlightStyle::Strikeout => "Strikeout",
            HighlightStyle::RoundedBox => "Rounded box",
        }
    }

    /// The text effect drawn for this style, if it is an effect style.
    pub fn effect(&self) -> Option<EffectType> {
        match self {
            HighlightStyle::Background | HighlightStyle::TextColor => None,
            HighlightStyle::LineUnderscore => Some(EffectType::BoldLineUnderscore),
            HighlightStyle::WaveUnderscore => Some(EffectType::WaveUnderscore),
            HighlightStyle::DottedUnderline => Some(EffectType::BoldDottedLine),
            HighlightStyle::Strikeout => Some(EffectType::Strikeout),
            HighlightStyle::RoundedBox => Some(EffectType::RoundedBox),
        }
    }

    /// Map this style and a color into render hints.
    pub fn text_attributes(&self, color: Rgb) -> TextAttributes {
        match self {
            HighlightStyle::Background => TextAttributes {
                background: Some(color),
                ..TextAttributes::default()
            },
            HighlightStyle::TextColor => TextAttributes {
                foreground: Some(color),
                ..TextAttributes::default()
            },
            _ => TextAttributes {
                effect_color: Some(color),
                effect: self.effect(),
                ..TextAttributes::default()
            },
        }
    }
}

/// Decoration drawn on top of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    BoldLineUnderscore,
    WaveUnderscore,
    BoldDottedLine,
    Strikeout,
    RoundedBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Plain,
}

/// Render hints handed to whatever draws the highlight.
///
/// Unset fields mean "keep the editor's own value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Rgb>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_color: Option<Rgb>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectType>,

    pub font_style: FontStyle,
}
