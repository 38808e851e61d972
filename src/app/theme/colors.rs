//! Color Constants for the Clinic Theme
//!
//! A light clinical palette: indigo accents on near-white panels, green for
//! the capture actions, red for errors and the high-deviation warnings.

use egui::Color32;

/// Main background - near white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xF9, 0xFB);

/// Card background - white
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// List row background - light gray
pub const ROW_BG: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);

/// Top bar background - indigo
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3B, 0x5B, 0xFD);

/// Primary action - indigo
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x5B, 0xFD);

/// Capture / camera actions - green
pub const CAPTURE: Color32 = Color32::from_rgb(0x28, 0xA7, 0x45);

/// Destructive actions - red
pub const DANGER: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);

/// Error text - red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);

/// High-deviation angle warning - red
pub const ANGLE_ALERT: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);

/// Normal angle reading - dark gray
pub const ANGLE_OK: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Primary text on light backgrounds
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Secondary text (timestamps, hints)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x8B, 0x8B);

/// Text on colored buttons and the top bar
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Success color - green
pub const SUCCESS: Color32 = Color32::from_rgb(0x28, 0xA7, 0x45);
