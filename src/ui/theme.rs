//! Theme for the image slider
//! The slider always draws light content over photos, so most colors are fixed

use iced::color;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Title, date, icons and thumbnail borders
pub const PRIMARY: Color = Color::WHITE;

/// Backdrop behind the slides
pub const BACKDROP: Color = color!(0x000000);

/// Placeholder shown while an image loads
pub const PLACEHOLDER: Color = color!(0x999999);

/// Spinner on top of the placeholder
pub const SPINNER: Color = Color::WHITE;

/// Tint over a pressed pressable (and the default ripple color)
pub const PRESS_OVERLAY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);

/// Controller icons are drawn at this opacity
pub const ICON_OPACITY: f32 = 0.7;

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

/// Window background around the slider
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        BACKDROP
    } else {
        color!(0x1a1a1a)
    }
}

/// Icon color at the controller opacity
pub fn icon_color() -> Color {
    Color {
        a: ICON_OPACITY,
        ..PRIMARY
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Application root
pub fn app_root(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(PRIMARY),
        ..Default::default()
    }
}

/// Outer slider container
pub fn slider_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKDROP)),
        text_color: Some(PRIMARY),
        ..Default::default()
    }
}

/// A mounted slide
pub fn slide_container(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Bottom overlay holding title, date, thumbnails and controls
pub fn controllers(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(PRIMARY),
        ..Default::default()
    }
}

/// Default icon bar
pub fn controller_container(_theme: &Theme) -> container::Style {
    container::Style::default()
}

// ============================================================================
// Button Styles
// ============================================================================

/// Controller icon button: no chrome, slight brightening on hover
pub fn controller_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: icon_color(),
        border: Border::default(),
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(PRESS_OVERLAY)),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thumbnail strip: invisible rails
pub fn thumbnail_strip(_theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: PRIMARY,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_color_uses_controller_opacity() {
        assert_eq!(icon_color().a, 0.7);
        assert_eq!(icon_color().r, 1.0);
    }

    #[test]
    fn placeholder_is_mid_grey() {
        assert!((PLACEHOLDER.r - 0x99 as f32 / 255.0).abs() < 1e-3);
        assert_eq!(PLACEHOLDER.r, PLACEHOLDER.g);
    }
}
