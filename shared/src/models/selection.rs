//! Selection Model
//!
//! A user's in-progress configuration. Every field is optional: `None` means
//! "not yet constrained", never "constrained to empty".

use serde::{Deserialize, Serialize};

/// Mirror option
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorOption {
    #[default]
    None,
    /// Mirror on one side
    One,
    /// Mirror on both sides
    Both,
}

/// Selection entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    // === Identity ===
    pub style: Option<String>,
    /// Model code (also matched against model display names)
    pub model: Option<String>,
    pub finish: Option<String>,
    pub color: Option<String>,
    pub construction_type: Option<String>,
    pub supplier: Option<String>,

    // === Size (mm) ===
    pub width: Option<u32>,
    /// Stored height, or a virtual height band (2350 / 2750)
    pub height: Option<u32>,

    // === Options ===
    pub filling: Option<String>,
    pub reversible: Option<bool>,
    pub mirror: Option<MirrorOption>,
    pub threshold: Option<bool>,
    pub edge_id: Option<String>,

    // === Accessories ===
    pub hardware_kit_id: Option<String>,
    pub handle_id: Option<String>,
    pub backplate: Option<bool>,
    pub limiter_id: Option<String>,
    pub option_ids: Option<Vec<String>>,
}

impl Selection {
    /// Selection constrained to a single model code
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Default::default()
        }
    }

    pub fn wants_reversal(&self) -> bool {
        self.reversible.unwrap_or(false)
    }

    pub fn wants_threshold(&self) -> bool {
        self.threshold.unwrap_or(false)
    }

    pub fn wants_backplate(&self) -> bool {
        self.backplate.unwrap_or(false)
    }

    pub fn mirror(&self) -> MirrorOption {
        self.mirror.unwrap_or_default()
    }

    /// Named option ids, empty when none were chosen
    pub fn option_ids(&self) -> &[String] {
        self.option_ids.as_deref().unwrap_or(&[])
    }
}
