pub mod preflight;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// zinc-950
pub const BACKGROUND: [u8; 4] = [9, 9, 11, 255];
/// amber-500
pub const ACCENT: [u8; 4] = [245, 158, 11, 255];

/// Two-color design used for every icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [u8; 4],
    pub accent: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
        }
    }
}

/// A named output role mapped to a pixel size and file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSlot {
    pub name: String,
    /// Width and height in pixels.
    pub size: u32,
    pub file_name: String,
}

impl IconSlot {
    pub fn new(name: &str, size: u32, file_name: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            file_name: file_name.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IconError::InvalidSize {
                slot: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// The slots consumed by the desktop bundle config.
///
/// `128x128@2x.png` and `icon.png` are both 256 px and are rendered
/// separately.
pub fn default_set() -> Vec<IconSlot> {
    vec![
        IconSlot::new("small", 32, "32x32.png"),
        IconSlot::new("medium", 128, "128x128.png"),
        IconSlot::new("medium@2x", 256, "128x128@2x.png"),
        IconSlot::new("generic", 256, "icon.png"),
    ]
}
