// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Overlay buttons on the viewer stage (arrows, toolbar, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OPAQUE,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Thumbnail in the viewer strip; the selected one gets a brand border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let brand = theme.palette().primary;
        let border_color = match (selected, status) {
            (true, _) => brand,
            (false, button::Status::Hovered) => Color { a: 0.6, ..brand },
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..BLACK
            })),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Clickable card (source, object, exhibition).
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, shadow) = match status {
        button::Status::Hovered => (palette.background.weak.color, shadow::MD),
        _ => (palette.background.base.color, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.15, ..BLACK },
            ..shadow
        },
        snap: true,
    }
}

/// Navbar link; the active screen is underlined with the brand color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette.primary.base.color
        } else {
            palette.background.base.text
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    palette.primary.base.color
                } else {
                    Color::TRANSPARENT
                },
                width: if active { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Tag chip; selected chips are filled.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let (background, text_color) = if selected {
            (palette.primary.base.color, palette.primary.base.text)
        } else if matches!(status, button::Status::Hovered) {
            (palette.background.strong.color, palette.background.base.text)
        } else {
            (palette.background.weak.color, palette.background.base.text)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Plain text link inside body content.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.palette().primary;
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => base,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}
