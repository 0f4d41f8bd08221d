//! Domain aggregates exposed by the site service layer.

pub mod admin;
pub mod chat;
pub mod consultation;
pub mod email;
pub mod project;
pub mod review;
pub mod service;
pub mod settings;
pub mod team_member;
pub mod theme;
pub mod types;

/// Serializes a status enum as its wire string (via `Display`) and parses it
/// back (via `From<&str>`), so templates and the database see the same value.
macro_rules! string_enum_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Ok(raw.as_str().into())
            }
        }
    };
}

pub(crate) use string_enum_serde;
