// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every component.
//!
//! Organized as palette, opacity, spacing, sizing, typography, border,
//! radius, and shadow scales. Keep the ratios intact when adjusting.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (warm red scale, matching the storefront identity)
    pub const PRIMARY_400: Color = Color::from_rgb(0.95, 0.45, 0.4);
    pub const PRIMARY_500: Color = Color::from_rgb(0.906, 0.298, 0.235);
    pub const PRIMARY_600: Color = Color::from_rgb(0.78, 0.22, 0.17);

    // Semantic colors, one per notification severity
    pub const SUCCESS_500: Color = Color::from_rgb(0.157, 0.655, 0.271);
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const INFO_500: Color = Color::from_rgb(0.09, 0.635, 0.722);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.757, 0.027);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Text opacity while a language transition is in flight.
    pub const TEXT_FADE: f32 = 0.7;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 280.0;
    pub const TOAST_WIDTH: f32 = 300.0;
    pub const CARD_WIDTH: f32 = 220.0;
    pub const COVER_HEIGHT: f32 = 160.0;
    pub const BANNER_HEIGHT: f32 = 220.0;
    pub const INDICATOR: f32 = 10.0;
    pub const MODAL_WIDTH: f32 = 560.0;
    pub const MODAL_HEIGHT: f32 = 420.0;
}

pub mod typography {
    /// Large title - banner headlines
    pub const TITLE_LG: f32 = 30.0;
    /// Medium title - section headings
    pub const TITLE_MD: f32 = 22.0;
    /// Small title - card titles
    pub const TITLE_SM: f32 = 17.0;
    /// Standard body - most UI text
    pub const BODY: f32 = 14.0;
    /// Caption - badges, taglines
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_FADE > 0.0 && opacity::TEXT_FADE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::INFO_500,
            palette::WARNING_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
