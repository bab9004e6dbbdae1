//! Brand colors and responsive breakpoints

use serde::Serialize;

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub mod colors {
    use super::Rgb;

    pub const GOLD: Rgb = Rgb::hex(0xC5A24A);
    pub const GOLD_LIGHT: Rgb = Rgb::hex(0xD4B566);
    pub const GOLD_DARK: Rgb = Rgb::hex(0xB08F3A);
    pub const SAGE: Rgb = Rgb::hex(0xC1C6C0);
    pub const CHARCOAL: Rgb = Rgb::hex(0x1A1A1A);
    /// Lower stop of the dark call-to-action gradient
    pub const CHARCOAL_LIGHT: Rgb = Rgb::hex(0x2A2A2A);
    pub const WHITE: Rgb = Rgb::hex(0xFFFFFF);
}

/// Window width class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const TABLET_MIN: f32 = 768.0;
    pub const DESKTOP_MIN: f32 = 1024.0;

    pub fn from_width(width: f32) -> Self {
        if width < Self::TABLET_MIN {
            Breakpoint::Mobile
        } else if width < Self::DESKTOP_MIN {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == Breakpoint::Mobile
    }
}

/// Size choices that change with the breakpoint
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Metrics {
    pub hero_title_size: f32,
    pub logo_diameter: f32,
    pub logo_icon_size: f32,
    pub horizontal_padding: f32,
}

impl Metrics {
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let mobile = breakpoint.is_mobile();
        Self {
            hero_title_size: match breakpoint {
                Breakpoint::Mobile => 36.0,
                Breakpoint::Tablet => 48.0,
                Breakpoint::Desktop => 64.0,
            },
            logo_diameter: if mobile { 120.0 } else { 160.0 },
            logo_icon_size: if mobile { 48.0 } else { 64.0 },
            horizontal_padding: if mobile { 20.0 } else { 40.0 },
        }
    }
}
