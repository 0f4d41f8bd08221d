//! Color palettes the site can switch between. At most one theme is active;
//! its colors are injected into templates as CSS custom properties.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{HexColor, TypeConstraintError};

/// Palette slots every theme must fill.
pub const PALETTE_SLOTS: [&str; 9] = [
    "bg", "surface", "card", "primary", "secondary", "accent", "text", "muted", "border",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub id: i32,
    pub name: String,
    pub colors: BTreeMap<String, HexColor>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Theme {
    /// Renders the palette as `slot -> "r g b"` pairs for CSS variables.
    pub fn css_variables(&self) -> BTreeMap<String, String> {
        self.colors
            .iter()
            .map(|(slot, color)| (slot.clone(), color.to_rgb_triplet()))
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct NewTheme {
    pub name: String,
    pub colors: BTreeMap<String, HexColor>,
}

impl NewTheme {
    /// Validates that every palette slot is present and well-formed.
    pub fn new(
        name: String,
        colors: BTreeMap<String, String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let mut validated = BTreeMap::new();
        for slot in PALETTE_SLOTS {
            let raw = colors
                .get(slot)
                .ok_or(TypeConstraintError::InvalidColor)?;
            validated.insert(slot.to_string(), HexColor::new(raw.as_str())?);
        }
        Ok(Self {
            name,
            colors: validated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_palette() -> BTreeMap<String, String> {
        PALETTE_SLOTS
            .iter()
            .map(|slot| (slot.to_string(), "#d4a373".to_string()))
            .collect()
    }

    #[test]
    fn new_theme_requires_every_slot() {
        let mut colors = full_palette();
        colors.remove("accent");
        assert!(NewTheme::new("Autumn".into(), colors).is_err());
    }

    #[test]
    fn new_theme_accepts_full_palette() {
        let theme = NewTheme::new("Autumn".into(), full_palette()).unwrap();
        assert_eq!(theme.colors.len(), PALETTE_SLOTS.len());
    }

    #[test]
    fn css_variables_are_rgb_triplets() {
        let new_theme = NewTheme::new("Autumn".into(), full_palette()).unwrap();
        let theme = Theme {
            id: 1,
            name: new_theme.name,
            colors: new_theme.colors,
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        };
        assert_eq!(theme.css_variables()["primary"], "212 163 115");
    }
}
