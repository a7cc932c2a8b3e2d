//! Height bands
//!
//! Tall doors are not separate SKUs. Catalog records store a height of
//! 2000 mm plus a percentage surcharge per band; the UI reports the band
//! through a virtual height that never exists in the catalog.

use crate::attributes::keys;

/// The only height stored for banded doors
pub const STORED_BAND_HEIGHT: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightBand {
    /// 2301–2500 mm
    Upto2500,
    /// 2501–3000 mm
    Upto3000,
}

impl HeightBand {
    pub const ALL: [HeightBand; 2] = [HeightBand::Upto2500, HeightBand::Upto3000];

    /// Virtual height reported for this band
    pub const fn virtual_height(self) -> u32 {
        match self {
            Self::Upto2500 => 2350,
            Self::Upto3000 => 2750,
        }
    }

    pub fn from_height(height: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.virtual_height() == height)
    }

    /// Display label, e.g. in export names
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upto2500 => "2301–2500",
            Self::Upto3000 => "2501–3000",
        }
    }

    /// Attribute holding the band's percentage surcharge
    pub const fn surcharge_key(self) -> &'static str {
        match self {
            Self::Upto2500 => keys::HEIGHT_2301_2500_PCT,
            Self::Upto3000 => keys::HEIGHT_2501_3000_PCT,
        }
    }
}

/// Height to compare against stored record heights
pub fn height_for_matching(height: u32) -> u32 {
    match HeightBand::from_height(height) {
        Some(_) => STORED_BAND_HEIGHT,
        None => height,
    }
}
