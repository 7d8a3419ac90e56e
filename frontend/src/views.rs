//! Page chrome that consumes the theme context.
//!
//! Page bodies (resume, projects, posts) are rendered elsewhere; this is the
//! header every page shares and the theme toggle inside it.

use zoon::*;

use crate::theme::use_theme;

const HEADER_PADDING_X: u32 = 16;
const HEADER_PADDING_Y: u32 = 12;

pub fn root() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::screen())
        .item(header())
}

fn header() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(HEADER_PADDING_X).y(HEADER_PADDING_Y))
        .item(
            El::new()
                .s(Font::new().weight(FontWeight::SemiBold).size(18))
                .child("Portfolio"),
        )
        .item(El::new().s(Align::new().right()).child(theme_toggle()))
}

/// Button switching between light and dark.
pub fn theme_toggle() -> impl Element {
    let theme = use_theme();

    Button::new()
        .s(Padding::all(8))
        .s(RoundedCorners::all(8))
        .label_signal(theme.is_dark_signal().map(toggle_icon))
        .update_raw_el({
            let theme = theme.clone();
            move |raw_el| {
                raw_el
                    .attr_signal("aria-label", theme.is_dark_signal().map(toggle_label))
                    .attr_signal("title", theme.is_dark_signal().map(toggle_label))
            }
        })
        .on_press(move || theme.toggle())
}

/// Accessible label describing what pressing the toggle does.
pub fn toggle_label(is_dark: bool) -> &'static str {
    if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

// Sun while dark, moon while light.
fn toggle_icon(is_dark: bool) -> &'static str {
    if is_dark { "☀" } else { "☾" }
}
