//! Commander card metadata.
//!
//! The lookup collaborator speaks Scryfall's card JSON; only the handful
//! of fields the table renders are kept. Every artwork field is optional
//! since not all printings carry every image size.

use serde::{Deserialize, Serialize};

/// Artwork references for one card printing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
}

/// Metadata for a chosen commander.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commander {
    /// Collaborator-assigned card identifier.
    pub id: String,
    /// Card name, e.g. "Atraxa, Praetors' Voice".
    pub name: String,
    /// Type line, e.g. "Legendary Creature — Phyrexian Angel Horror".
    #[serde(default)]
    pub type_line: String,
    /// Artwork, when the printing has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

impl Commander {
    /// The art-crop URL, used as a seat's backdrop.
    #[must_use]
    pub fn art_crop(&self) -> Option<&str> {
        self.image_uris.as_ref()?.art_crop.as_deref()
    }

    /// The best available full-card image: normal, falling back to large.
    #[must_use]
    pub fn display_image(&self) -> Option<&str> {
        let uris = self.image_uris.as_ref()?;
        uris.normal.as_deref().or(uris.large.as_deref())
    }
}
