//! Declaration emitter.
//!
//! Renders an asset's slices as a Swift icon-pack declaration ready to be
//! pasted into the app's source.

use std::fmt::Write;

use clap::ValueEnum;

use crate::catalog::IconSlice;
use crate::error::{IconError, Result};
use crate::types::Classification;

/// Kind of icon pack an asset is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackKind {
    /// Check box icons (`check_box_*` files)
    CheckBox,
    /// Text button icons (`text_button_*` files)
    TextButton,
}

impl PackKind {
    pub const ALL: [PackKind; 2] = [PackKind::CheckBox, PackKind::TextButton];

    /// File name prefix of this pack's images.
    pub fn prefix(self) -> &'static str {
        match self {
            PackKind::CheckBox => "check_box",
            PackKind::TextButton => "text_button",
        }
    }

    /// Swift type the declaration constructs.
    pub fn type_name(self) -> &'static str {
        match self {
            PackKind::CheckBox => "CheckBoxIconPack",
            PackKind::TextButton => "TextIconButtonIconPack",
        }
    }
}

/// Type every slice is declared as.
const SLICE_TYPE: &str = "AnyTextIcon";
const INDENT: &str = "    ";

/// `remove_points` -> `removePoints`.
///
/// Words after the first are capitalized and the rest of each word is
/// lowercased; empty words are dropped.
pub fn snake_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, part) in s.split('_').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Render the declaration for asset `name`.
///
/// `slices` must hold every classification; they are emitted in
/// [`Classification::ALL`] order regardless of input order.
pub fn emit_declaration(kind: PackKind, name: &str, slices: &[IconSlice]) -> Result<String> {
    let ordered = Classification::ALL
        .iter()
        .map(|&c| {
            slices
                .iter()
                .find(|slice| slice.classification == c)
                .ok_or_else(|| IconError::Usage {
                    message: format!("Asset {} has no {} slice", name, c),
                    help: Some("Icon packs need all nine classifications".to_string()),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "static var {}: {} = {{",
        snake_to_camel(name),
        kind.type_name()
    );

    let mut previous_group = None;
    for slice in &ordered {
        let group = (slice.device, slice.orientation);
        if previous_group.is_some_and(|g| g != group) {
            out.push('\n');
        }
        previous_group = Some(group);
        write_slice(&mut out, slice);
    }

    out.push('\n');
    let opening = format!("{INDENT}return {}(", kind.type_name());
    let pad = " ".repeat(opening.len());
    out.push_str(&opening);
    for (i, slice) in ordered.iter().enumerate() {
        let field = slice.classification.info().slice_name;
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&pad);
        }
        let _ = write!(out, "{field}: {field}");
    }
    out.push_str(")\n");
    out.push_str("}()\n");

    Ok(out)
}

fn write_slice(out: &mut String, slice: &IconSlice) {
    let field = slice.classification.info().slice_name;
    let opening = format!("{INDENT}let {field} = {SLICE_TYPE}(");
    let pad = " ".repeat(opening.len());
    let b = &slice.sixbox;

    let _ = writeln!(out, "{opening}fileName: \"{}\",", slice.file_name);
    let _ = writeln!(
        out,
        "{pad}device: {}, orientation: {},",
        slice.device_tag(),
        slice.orientation_tag()
    );
    let _ = writeln!(
        out,
        "{pad}imageWidth: {}, imageHeight: {},",
        b.image_width, b.image_height
    );
    let _ = writeln!(
        out,
        "{pad}iconX: {}, iconY: {}, iconWidth: {}, iconHeight: {})",
        b.x, b.y, b.width, b.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::icon_set_name;
    use crate::measure::SixBox;
    use pretty_assertions::assert_eq;

    fn slices(prefix: &str, name: &str) -> Vec<IconSlice> {
        Classification::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                IconSlice::new(
                    icon_set_name(prefix, name, c),
                    c,
                    SixBox {
                        image_width: 10,
                        image_height: 8,
                        x: i as u32,
                        y: 1,
                        width: 4,
                        height: 5,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("sample"), "sample");
        assert_eq!(snake_to_camel("remove_points"), "removePoints");
        assert_eq!(snake_to_camel("add__POINTS_now"), "addPointsNow");
        assert_eq!(snake_to_camel("_leading"), "leading");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn test_pack_kinds() {
        assert_eq!(PackKind::CheckBox.prefix(), "check_box");
        assert_eq!(PackKind::TextButton.type_name(), "TextIconButtonIconPack");
    }

    #[test]
    fn test_emit_first_slice_block() {
        let out = emit_declaration(PackKind::CheckBox, "sample", &slices("check_box", "sample"))
            .unwrap();

        let expected = "\
static var sample: CheckBoxIconPack = {
    let slicePad0Lines = AnyTextIcon(fileName: \"check_box_sample_pad_0l\",
                                     device: .pad, orientation: nil,
                                     imageWidth: 10, imageHeight: 8,
                                     iconX: 0, iconY: 1, iconWidth: 4, iconHeight: 5)
    let slicePad1Line = AnyTextIcon(fileName: \"check_box_sample_pad_1l\",
";
        assert_eq!(&out[..expected.len()], expected);
    }

    #[test]
    fn test_emit_groups_and_return() {
        let slices = slices("text_button", "remove_point");
        let out = emit_declaration(PackKind::TextButton, "remove_point", &slices).unwrap();

        assert!(out.starts_with("static var removePoint: TextIconButtonIconPack = {\n"));
        assert!(out.contains(
            "\n\n    let slicePhoneLandscape0Lines = AnyTextIcon(fileName: \"text_button_remove_point_phone_ls_0l\",\n"
        ));
        assert!(out.contains(
            "\n                                               device: .phone, orientation: .portrait,\n"
        ));
        assert!(out.contains("iconX: 8, iconY: 1, iconWidth: 4, iconHeight: 5)\n"));

        let tail = "    return TextIconButtonIconPack(slicePad0Lines: slicePad0Lines,
                                  slicePad1Line: slicePad1Line,
                                  slicePad2Lines: slicePad2Lines,
                                  slicePhoneLandscape0Lines: slicePhoneLandscape0Lines,
                                  slicePhoneLandscape1Line: slicePhoneLandscape1Line,
                                  slicePhoneLandscape2Lines: slicePhoneLandscape2Lines,
                                  slicePhonePortrait0Lines: slicePhonePortrait0Lines,
                                  slicePhonePortrait1Line: slicePhonePortrait1Line,
                                  slicePhonePortrait2Lines: slicePhonePortrait2Lines)
}()
";
        assert!(out.ends_with(tail), "unexpected tail:\n{out}");
    }

    #[test]
    fn test_emit_orders_by_classification() {
        let mut shuffled = slices("check_box", "sample");
        shuffled.reverse();
        let out = emit_declaration(PackKind::CheckBox, "sample", &shuffled).unwrap();
        let pad = out.find("slicePad0Lines = ").unwrap();
        let portrait = out.find("slicePhonePortrait2Lines = ").unwrap();
        assert!(pad < portrait);
    }

    #[test]
    fn test_emit_requires_every_classification() {
        let mut partial = slices("check_box", "sample");
        partial.retain(|s| s.classification != Classification::PhoneLandscape1Line);
        let err = emit_declaration(PackKind::CheckBox, "sample", &partial).unwrap_err();
        assert!(matches!(err, IconError::Usage { .. }));
    }
}
