//! Per-classification slice records handed to the emitter.

use crate::measure::SixBox;
use crate::types::{Classification, Device, Orientation};

/// Where one classification's icon sits within its sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlice {
    /// Icon set name the sheet is shipped under.
    pub file_name: String,
    pub classification: Classification,
    pub device: Device,
    pub orientation: Option<Orientation>,
    pub sixbox: SixBox,
}

impl IconSlice {
    pub fn new(file_name: String, classification: Classification, sixbox: SixBox) -> Self {
        Self {
            file_name,
            classification,
            device: classification.device(),
            orientation: classification.orientation(),
            sixbox,
        }
    }

    pub fn device_tag(&self) -> &'static str {
        self.device.tag()
    }

    /// Orientation tag, `nil` for pads.
    pub fn orientation_tag(&self) -> &'static str {
        self.orientation.map_or("nil", Orientation::tag)
    }
}
