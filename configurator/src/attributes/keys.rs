//! Attribute keys used by the configurator
//!
//! Catalog records have no fixed schema; these are the business keys the
//! engine reads. Keep them in one place so matching, pricing and export
//! agree on spelling.

// === Identity ===
pub const MODEL_CODE: &str = "model code";
pub const MODEL_NAME: &str = "model name";
pub const STYLE: &str = "style";
pub const FINISH: &str = "finish type";
/// Finish-scoped color. The only color key used for matching.
pub const COLOR_FINISH: &str = "color/finish";
/// Legacy flat color. Never used for matching.
pub const LEGACY_COLOR: &str = "color";
pub const CONSTRUCTION_TYPE: &str = "construction type";
pub const SUPPLIER: &str = "supplier";
pub const INTERNAL_SKU: &str = "internal sku";
pub const NAME: &str = "name";

// === Size ===
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const THICKNESS: &str = "thickness";

// === Composition ===
pub const FILLING: &str = "filling";
pub const GLASS_TYPE: &str = "glass type";
pub const GLASS_COLOR: &str = "glass color";

// === Prices ===
pub const RETAIL_PRICE: &str = "retail price";
pub const LIST_PRICE: &str = "list price";
pub const WHOLESALE_PRICE: &str = "wholesale price";
pub const GROUP_PRICE: &str = "group price";
pub const BASE_PRICE: &str = "base price";
pub const BACKPLATE_PRICE: &str = "backplate price";

// === Height bands (percent of the 2000 mm base price) ===
pub const HEIGHT_2301_2500_PCT: &str = "height 2301-2500 surcharge %";
pub const HEIGHT_2501_3000_PCT: &str = "height 2501-3000 surcharge %";

// === Reversal / mirror / threshold ===
pub const REVERSIBLE: &str = "reversible";
pub const REVERSAL_SURCHARGE: &str = "reversal surcharge";
pub const MIRROR: &str = "mirror";
pub const MIRROR_ONE_SIDE_SURCHARGE: &str = "mirror one side surcharge";
pub const MIRROR_TWO_SIDES_SURCHARGE: &str = "mirror two sides surcharge";
pub const THRESHOLD: &str = "threshold";
pub const THRESHOLD_SURCHARGE: &str = "threshold surcharge";

// === Edge ===
/// Direct edge display value (factory-painted finishes populate only this)
pub const EDGE: &str = "edge";
pub const EDGE_IN_BASE_PRICE: &str = "edge in base price";
pub const EDGE_BASE_COLOR: &str = "edge base color";

/// Numbered alternate edge slots: (color key, surcharge key)
pub const EDGE_ALTERNATE_SLOTS: [(&str, &str); 3] = [
    ("edge color 2", "edge color 2 surcharge"),
    ("edge color 3", "edge color 3 surcharge"),
    ("edge color 4", "edge color 4 surcharge"),
];
