//! Centralized brand palette for the rendered report

use printpdf::{Color, Rgb};

use crate::scoring::Tier;

/// Report color palette. One instance is built per render and shared by all
/// drawing code so the document stays visually consistent.
#[derive(Debug, Clone)]
pub struct Theme {
    pub yellow: Color,
    pub dark: Color,
    pub light_gray: Color,
    pub mid_gray: Color,
    pub text_gray: Color,
    pub white: Color,
    pub red: Color,
    pub orange: Color,
    pub green: Color,
}

impl Theme {
    pub fn brand() -> Self {
        Self {
            yellow: hex(0xF5, 0xC8, 0x42),
            dark: hex(0x1A, 0x1A, 0x1A),
            light_gray: hex(0xF5, 0xF5, 0xF5),
            mid_gray: hex(0xCC, 0xCC, 0xCC),
            text_gray: hex(0x55, 0x55, 0x55),
            white: hex(0xFF, 0xFF, 0xFF),
            red: hex(0xE7, 0x4C, 0x3C),
            orange: hex(0xF3, 0x9C, 0x12),
            green: hex(0x2E, 0xCC, 0x71),
        }
    }

    /// Traffic-light color for a score band.
    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::NeedsWork => self.red.clone(),
            Tier::Fair => self.orange.clone(),
            Tier::Good => self.green.clone(),
        }
    }
}

fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}
