// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Page background: flat paper color behind everything.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_paper_background() {
        let style = page(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::PAPER)));
    }
}
