use crate::domain::{Priority, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_text: Color,
    pub page_background: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub task_background: Color,
    pub task_border: Color,
    pub subtle_text: Color,
    pub description_text: Color,
    pub accent: Color,
    pub accent_text: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                page_text: Color::Rgb(0x40, 0x24, 0x37),
                page_background: Color::Rgb(0xFF, 0xEA, 0xF0),
                card_background: Color::Rgb(0xFF, 0xE4, 0xEC),
                card_border: Color::Rgb(0xF9, 0xC2, 0xD0),
                task_background: Color::Rgb(0xFF, 0xFF, 0xFF),
                task_border: Color::Rgb(0xFD, 0xD6, 0xDF),
                subtle_text: Color::Rgb(0xA8, 0x6A, 0x83),
                description_text: Color::Rgb(0x7A, 0x4C, 0x63),
                accent: Color::Rgb(0xFF, 0x9A, 0xB5),
                accent_text: Color::Rgb(0x40, 0x24, 0x37),
            },
            Theme::Dark => Self {
                page_text: Color::Rgb(0xFC, 0xE7, 0xF3),
                page_background: Color::Rgb(0x1F, 0x10, 0x20),
                card_background: Color::Rgb(0x2D, 0x16, 0x30),
                card_border: Color::Rgb(0x4B, 0x23, 0x4F),
                task_background: Color::Rgb(0x3B, 0x1E, 0x3F),
                task_border: Color::Rgb(0x5B, 0x2A, 0x61),
                subtle_text: Color::Rgb(0xE5, 0xB3, 0xCB),
                description_text: Color::Rgb(0xF9, 0xD9, 0xE7),
                accent: Color::Rgb(0xE8, 0x79, 0xF9),
                accent_text: Color::Rgb(0x1F, 0x10, 0x20),
            },
        }
    }

    /// Whole-screen base style
    pub fn page_style(&self) -> Style {
        Style::default().fg(self.page_text).bg(self.page_background)
    }

    /// Column and section blocks
    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.page_text).bg(self.card_background)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.card_border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.page_text).add_modifier(Modifier::BOLD)
    }

    /// Card row
    pub fn card_style(&self) -> Style {
        Style::default().fg(self.page_text).bg(self.task_background)
    }

    /// Card row under the cursor
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Card that is currently picked up
    pub fn grabbed_style(&self) -> Style {
        Style::default()
            .fg(self.subtle_text)
            .bg(self.task_background)
            .add_modifier(Modifier::ITALIC | Modifier::DIM)
    }

    /// Card inside its entry highlight
    pub fn just_added_style(&self) -> Style {
        Style::default().fg(self.subtle_text).add_modifier(Modifier::DIM)
    }

    /// Drop target marker while grabbing
    pub fn drop_marker_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn subtle_style(&self) -> Style {
        Style::default().fg(self.subtle_text)
    }

    pub fn description_style(&self) -> Style {
        Style::default().fg(self.description_text)
    }

    /// Active tab or pill
    pub fn active_tab_style(&self) -> Style {
        Style::default()
            .fg(self.accent_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inactive_tab_style(&self) -> Style {
        Style::default().fg(self.page_text)
    }

    /// Modal background style
    pub fn modal_bg_style(&self) -> Style {
        Style::default().fg(self.page_text).bg(self.card_background)
    }

    /// Modal title style
    pub fn modal_title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint style
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.subtle_text)
    }
}

/// Priority chip, same colours in both themes
pub fn priority_style(priority: Priority) -> Style {
    let (bg, fg) = match priority {
        Priority::High => (Color::Rgb(0xFE, 0xCA, 0xCA), Color::Rgb(0x7F, 0x1D, 0x1D)),
        Priority::Medium => (Color::Rgb(0xFD, 0xE6, 0x8A), Color::Rgb(0x78, 0x35, 0x0F)),
        Priority::Low => (Color::Rgb(0xBB, 0xF7, 0xD0), Color::Rgb(0x06, 0x5F, 0x46)),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
