use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_delete: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        let blue = ColorSpec::rgb(125, 207, 255);
        let background = ColorSpec::rgb(26, 27, 38);
        let comment = ColorSpec::rgb(117, 121, 148);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            banner: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: comment,
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(255, 202, 40),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: background,
            footer_search: blue,
            footer_edit: ColorSpec::rgb(255, 202, 40),
            footer_delete: ColorSpec::rgb(247, 118, 142),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        let purple = ColorSpec::rgb(189, 147, 249);
        let cyan = ColorSpec::rgb(139, 233, 253);
        let comment = ColorSpec::rgb(98, 114, 164);
        Theme {
            name: "dracula".to_string(),
            primary: purple,
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: comment,
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(255, 184, 108),
            error: ColorSpec::rgb(255, 85, 85),
            border_active: purple,
            border_normal: comment,
            highlight_bg: cyan,
            highlight_fg: ColorSpec::rgb(40, 42, 54),
            footer_search: cyan,
            footer_edit: ColorSpec::rgb(255, 184, 108),
            footer_delete: ColorSpec::rgb(255, 85, 85),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Rose Pine Dawn theme, for light terminals.
    ///
    pub fn rose_pine_dawn() -> Self {
        let iris = ColorSpec::rgb(144, 122, 169);
        let muted = ColorSpec::rgb(152, 147, 165);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: iris,
            banner: ColorSpec::rgb(180, 99, 122),
            text: ColorSpec::rgb(87, 82, 121),
            text_muted: muted,
            success: ColorSpec::rgb(40, 105, 131),
            warning: ColorSpec::rgb(234, 157, 52),
            error: ColorSpec::rgb(180, 99, 122),
            border_active: iris,
            border_normal: muted,
            highlight_bg: iris,
            highlight_fg: ColorSpec::rgb(250, 244, 237),
            footer_search: ColorSpec::rgb(86, 148, 159),
            footer_edit: ColorSpec::rgb(234, 157, 52),
            footer_delete: ColorSpec::rgb(180, 99, 122),
            footer_normal: ColorSpec::rgb(242, 233, 222),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme() {
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
