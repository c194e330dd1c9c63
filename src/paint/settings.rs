use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::Rgba8,
        error::{PaintError, PaintResult},
    },
    paint::display_list::FontSpec,
};

/// Host-configurable knobs for replaced-element painting.
///
/// Every field has a default, so `{}` is a valid settings document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaintSettings {
    /// Font used for alt text.
    pub alt_text_font: FontSpec,
    /// Color of the box outline drawn around alt text.
    pub alt_text_outline: Rgba8,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            alt_text_font: FontSpec::default(),
            alt_text_outline: Rgba8::BLACK,
        }
    }
}

impl PaintSettings {
    /// Parse settings from a JSON string.
    pub fn from_json(s: &str) -> PaintResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| PaintError::serde(format!("parse paint settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PaintResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| PaintError::serde(format!("parse paint settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PaintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PaintError::validation(format!("open paint settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> PaintResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PaintError::serde(format!("serialize paint settings: {e}")))
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> PaintResult<()> {
        let size = self.alt_text_font.size_px;
        if !size.is_finite() || size <= 0.0 {
            return Err(PaintError::validation(format!(
                "alt_text_font.size_px must be finite and > 0, got {size}"
            )));
        }
        if self.alt_text_font.family.trim().is_empty() {
            return Err(PaintError::validation(
                "alt_text_font.family must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/settings.rs"]
mod tests;
