//! Design tokens for the control panel widgets.
//!
//! One flat table of colors, spacing, radii, sizes and font steps,
//! shared by every widget and screen so the catalog stays visually
//! consistent. Widgets read the table through [`TOKENS`]; screens may
//! copy entries into their own argument structs but never hard-code
//! values.

use panelkit_foundation::{Color, Dp};

/// Color tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTokens {
    /// Screen background.
    pub page_bg: Color,
    /// Card surfaces hosting widgets.
    pub card_bg: Color,
    /// Debug/accent border.
    pub border_accent: Color,
    /// Primary text.
    pub text_primary: Color,
    /// Brand accent: active tracks, selected buttons, switch-on.
    pub main_color: Color,
    /// Switch track when off.
    pub switch_off: Color,
    /// Inactive slider track / right-side pill background.
    pub right_pill_bg: Color,
}

/// Spacing tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingTokens {
    /// Horizontal page padding.
    pub page_padding_h: Dp,
    /// Vertical page padding.
    pub page_padding_v: Dp,
    /// Gap between stacked cards.
    pub item_gap: Dp,
    /// Horizontal padding inside a card.
    pub card_inner_padding_h: Dp,
    /// Vertical padding inside a card.
    pub card_inner_padding_v: Dp,
}

/// Corner radius tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTokens {
    /// Card corner radius.
    pub card: Dp,
}

/// Fixed component sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTokens {
    /// Height of a left-aligned control title row.
    pub control_title_height: Dp,
    /// Height of a centered control title without subtitle.
    pub control_title_center_height: Dp,
    /// Height of a centered control title with subtitle.
    pub control_title_center_height_with_subtitle: Dp,
}

/// Font size steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontTokens {
    /// Titles.
    pub large: Dp,
    /// Body and labels.
    pub medium: Dp,
    /// Captions.
    pub small: Dp,
}

/// The full token table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tokens {
    /// Color tokens.
    pub colors: ColorTokens,
    /// Spacing tokens.
    pub spacing: SpacingTokens,
    /// Radius tokens.
    pub radius: RadiusTokens,
    /// Size tokens.
    pub sizes: SizeTokens,
    /// Font tokens.
    pub font_size: FontTokens,
}

/// The panel's token table.
pub const TOKENS: Tokens = Tokens {
    colors: ColorTokens {
        page_bg: Color::new(0.968_627_45, 0.968_627_45, 0.968_627_45, 1.0),
        card_bg: Color::WHITE,
        border_accent: Color::new(1.0, 0.0, 0.0, 1.0),
        text_primary: Color::BLACK,
        main_color: Color::new(0.501_960_8, 0.615_686_3, 0.894_117_65, 1.0),
        switch_off: Color::new(0.0, 0.0, 0.0, 0.1),
        right_pill_bg: Color::new(0.960_784_3, 0.960_784_3, 0.968_627_45, 1.0),
    },
    spacing: SpacingTokens {
        page_padding_h: Dp(16.0),
        page_padding_v: Dp(24.0),
        item_gap: Dp(24.0),
        card_inner_padding_h: Dp(16.0),
        card_inner_padding_v: Dp(12.0),
    },
    radius: RadiusTokens { card: Dp(16.0) },
    sizes: SizeTokens {
        control_title_height: Dp(28.0),
        control_title_center_height: Dp(28.0),
        control_title_center_height_with_subtitle: Dp(46.0),
    },
    font_size: FontTokens {
        large: Dp(20.0),
        medium: Dp(14.0),
        small: Dp(12.0),
    },
};
