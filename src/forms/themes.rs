//! Admin form for creating color themes.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use crate::domain::theme::NewTheme;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// One input per palette slot, mirroring the slots the stylesheet consumes.
pub struct AddThemeForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub bg: String,
    pub surface: String,
    pub card: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub muted: String,
    pub border: String,
}

impl TryFrom<AddThemeForm> for NewTheme {
    type Error = FormError;

    fn try_from(form: AddThemeForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let colors: BTreeMap<String, String> = [
            ("bg", &form.bg),
            ("surface", &form.surface),
            ("card", &form.card),
            ("primary", &form.primary),
            ("secondary", &form.secondary),
            ("accent", &form.accent),
            ("text", &form.text),
            ("muted", &form.muted),
            ("border", &form.border),
        ]
        .into_iter()
        .map(|(slot, value)| (slot.to_string(), value.clone()))
        .collect();

        NewTheme::new(form.name, colors).map_err(|_| FormError::InvalidPalette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddThemeForm {
        AddThemeForm {
            name: "Autumn".into(),
            bg: "#fefae0".into(),
            surface: "#e9edc9".into(),
            card: "#faedcd".into(),
            primary: "#d4a373".into(),
            secondary: "#ccd5ae".into(),
            accent: "#777567".into(),
            text: "#33312b".into(),
            muted: "#545248".into(),
            border: "#c4c0ab".into(),
        }
    }

    #[test]
    fn valid_palette_converts() {
        let theme = NewTheme::try_from(form()).unwrap();
        assert_eq!(theme.colors.len(), 9);
    }

    #[test]
    fn malformed_color_is_rejected() {
        let mut bad = form();
        bad.primary = "tomato".into();
        assert!(matches!(
            NewTheme::try_from(bad),
            Err(FormError::InvalidPalette)
        ));
    }
}
