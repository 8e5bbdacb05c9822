//! File naming convention for icon pages.
//!
//! Pages are named `{prefix}_{name}_{classification}_{scale}.png`; the icon
//! set a page belongs to drops the scale component and extension.

use crate::types::{Classification, Scale};

pub const IMAGE_EXTENSION: &str = "png";

/// `{prefix}_{name}`
pub fn asset_name(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, name)
}

/// `{prefix}_{name}_{classification}`
pub fn icon_set_name(prefix: &str, name: &str, classification: Classification) -> String {
    format!("{}_{}", asset_name(prefix, name), classification.name_component())
}

/// `{prefix}_{name}_{classification}_{scale}`
pub fn page_name(prefix: &str, name: &str, classification: Classification, scale: Scale) -> String {
    format!(
        "{}_{}",
        icon_set_name(prefix, name, classification),
        scale.name_component()
    )
}

/// `{prefix}_{name}_{classification}_{scale}.png`
pub fn page_file_name(
    prefix: &str,
    name: &str,
    classification: Classification,
    scale: Scale,
) -> String {
    format!(
        "{}.{}",
        page_name(prefix, name, classification, scale),
        IMAGE_EXTENSION
    )
}

/// A file name split back into its naming components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPageName {
    pub name: String,
    pub classification: Classification,
    pub scale: Scale,
}

/// Split a page file name that starts with `prefix`.
///
/// The asset name may itself contain underscores, so the scale and
/// classification are matched from the end.
pub fn parse_page_file_name(prefix: &str, file_name: &str) -> Option<ParsedPageName> {
    let stem = file_name.strip_suffix(&format!(".{}", IMAGE_EXTENSION))?;
    let rest = stem.strip_prefix(prefix)?.strip_prefix('_')?;

    let (rest, scale) = Scale::ALL.into_iter().find_map(|scale| {
        rest.strip_suffix(scale.name_component())
            .and_then(|r| r.strip_suffix('_'))
            .map(|r| (r, scale))
    })?;

    let (name, classification) = Classification::ALL.into_iter().find_map(|c| {
        rest.strip_suffix(c.name_component())
            .and_then(|r| r.strip_suffix('_'))
            .map(|r| (r, c))
    })?;

    if name.is_empty() {
        return None;
    }

    Some(ParsedPageName {
        name: name.to_string(),
        classification,
        scale,
    })
}
