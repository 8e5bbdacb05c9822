//! Device, orientation and line-count classifications.
//!
//! Each classification selects which scale variants are required and how
//! its files are named. The attributes live in one static table so the
//! configuration can be audited at a glance.

use std::fmt;

use super::scale::Scale;

/// Device family an icon is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Pad,
    Phone,
}

impl Device {
    /// Tag used in generated source.
    pub fn tag(self) -> &'static str {
        match self {
            Device::Pad => ".pad",
            Device::Phone => ".phone",
        }
    }
}

/// Phone orientation. Pads carry no orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Tag used in generated source.
    pub fn tag(self) -> &'static str {
        match self {
            Orientation::Landscape => ".landscape",
            Orientation::Portrait => ".portrait",
        }
    }
}

/// A (device, orientation, line-count) tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Pad0Lines,
    Pad1Line,
    Pad2Lines,
    PhoneLandscape0Lines,
    PhoneLandscape1Line,
    PhoneLandscape2Lines,
    PhonePortrait0Lines,
    PhonePortrait1Line,
    PhonePortrait2Lines,
}

/// Static attributes of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationInfo {
    pub classification: Classification,
    pub name_component: &'static str,
    /// Field name used for this classification in generated packs.
    pub slice_name: &'static str,
    pub device: Device,
    pub orientation: Option<Orientation>,
    pub lines: u8,
    pub scales: &'static [Scale],
}

const PAD_SCALES: &[Scale] = &[Scale::X1, Scale::X2];
const PHONE_SCALES: &[Scale] = &[Scale::X1, Scale::X2, Scale::X3];

const fn entry(
    classification: Classification,
    name_component: &'static str,
    slice_name: &'static str,
    orientation: Option<Orientation>,
    lines: u8,
) -> ClassificationInfo {
    let (device, scales) = match orientation {
        None => (Device::Pad, PAD_SCALES),
        Some(_) => (Device::Phone, PHONE_SCALES),
    };
    ClassificationInfo {
        classification,
        name_component,
        slice_name,
        device,
        orientation,
        lines,
        scales,
    }
}

/// Indexed by `Classification as usize`.
const TABLE: [ClassificationInfo; 9] = [
    entry(Classification::Pad0Lines, "pad_0l", "slicePad0Lines", None, 0),
    entry(Classification::Pad1Line, "pad_1l", "slicePad1Line", None, 1),
    entry(Classification::Pad2Lines, "pad_2l", "slicePad2Lines", None, 2),
    entry(
        Classification::PhoneLandscape0Lines,
        "phone_ls_0l",
        "slicePhoneLandscape0Lines",
        Some(Orientation::Landscape),
        0,
    ),
    entry(
        Classification::PhoneLandscape1Line,
        "phone_ls_1l",
        "slicePhoneLandscape1Line",
        Some(Orientation::Landscape),
        1,
    ),
    entry(
        Classification::PhoneLandscape2Lines,
        "phone_ls_2l",
        "slicePhoneLandscape2Lines",
        Some(Orientation::Landscape),
        2,
    ),
    entry(
        Classification::PhonePortrait0Lines,
        "phone_po_0l",
        "slicePhonePortrait0Lines",
        Some(Orientation::Portrait),
        0,
    ),
    entry(
        Classification::PhonePortrait1Line,
        "phone_po_1l",
        "slicePhonePortrait1Line",
        Some(Orientation::Portrait),
        1,
    ),
    entry(
        Classification::PhonePortrait2Lines,
        "phone_po_2l",
        "slicePhonePortrait2Lines",
        Some(Orientation::Portrait),
        2,
    ),
];

impl Classification {
    /// All classifications in declaration order.
    pub const ALL: [Classification; 9] = [
        Classification::Pad0Lines,
        Classification::Pad1Line,
        Classification::Pad2Lines,
        Classification::PhoneLandscape0Lines,
        Classification::PhoneLandscape1Line,
        Classification::PhoneLandscape2Lines,
        Classification::PhonePortrait0Lines,
        Classification::PhonePortrait1Line,
        Classification::PhonePortrait2Lines,
    ];

    pub fn info(self) -> &'static ClassificationInfo {
        &TABLE[self as usize]
    }

    /// Scales this classification is authored at.
    pub fn scales(self) -> &'static [Scale] {
        self.info().scales
    }

    pub fn name_component(self) -> &'static str {
        self.info().name_component
    }

    pub fn device(self) -> Device {
        self.info().device
    }

    pub fn orientation(self) -> Option<Orientation> {
        self.info().orientation
    }

    /// Look up a classification by its file name component.
    pub fn from_name_component(s: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|info| info.name_component == s)
            .map(|info| info.classification)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_component())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for classification in Classification::ALL {
            assert_eq!(classification.info().classification, classification);
        }
    }

    #[test]
    fn test_phone_portrait_one_line() {
        let c = Classification::PhonePortrait1Line;
        assert_eq!(c.scales(), &[Scale::X1, Scale::X2, Scale::X3]);
        assert_eq!(c.device(), Device::Phone);
        assert_eq!(c.orientation(), Some(Orientation::Portrait));
        assert_eq!(c.info().lines, 1);
        assert_eq!(c.name_component(), "phone_po_1l");
    }

    #[test]
    fn test_pads_have_no_orientation() {
        for c in [
            Classification::Pad0Lines,
            Classification::Pad1Line,
            Classification::Pad2Lines,
        ] {
            assert_eq!(c.device(), Device::Pad);
            assert_eq!(c.orientation(), None);
            assert_eq!(c.scales(), &[Scale::X1, Scale::X2]);
        }
    }

    #[test]
    fn test_landscape_entries() {
        let c = Classification::PhoneLandscape2Lines;
        assert_eq!(c.orientation(), Some(Orientation::Landscape));
        assert_eq!(c.name_component(), "phone_ls_2l");
        assert_eq!(c.info().lines, 2);
    }

    #[test]
    fn test_name_components_are_unique() {
        for c in Classification::ALL {
            assert_eq!(Classification::from_name_component(c.name_component()), Some(c));
        }
        assert_eq!(Classification::from_name_component("tablet_0l"), None);
    }

    #[test]
    fn test_tags() {
        assert_eq!(Device::Pad.tag(), ".pad");
        assert_eq!(Orientation::Portrait.tag(), ".portrait");
    }
}
