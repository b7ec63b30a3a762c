//! HUD configuration and item catalog
//!
//! All visual knobs the HUD consumes live in [`HudStyle`] — an explicit
//! struct passed to constructors, never ambient global state. The weapon
//! and magic tables live in [`ItemCatalog`], loaded from a JSON file.
//!
//! # Ordering Contract
//!
//! Catalog entries are stored in a `Vec`, **in declaration order**. The
//! player's `weapon_index` / `magic_index` select entries positionally, so
//! reordering the JSON tables changes which item every index refers to.
//! This is why the catalog is a list and not a map.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use serde::{Deserialize, Serialize};

/// Visual configuration for the screen-space HUD
///
/// The defaults reproduce the reference 1280x720 layout: health and energy
/// bars in the top-left corner, weapon and magic selection boxes in the
/// bottom-left, experience counter in the bottom-right.
#[derive(Debug, Clone)]
pub struct HudStyle {
    /// Screen size in logical pixels (width, height)
    pub screen_size: (u32, u32),

    /// Health bar background rectangle (position and full size)
    pub health_bar_rect: Rect,

    /// Energy bar background rectangle
    pub energy_bar_rect: Rect,

    /// Fill color for the health bar
    pub health_color: Color,

    /// Fill color for the energy bar
    pub energy_color: Color,

    /// Background color behind bars, boxes and text
    pub background_color: Color,

    /// Border color for bars and idle selection boxes
    pub border_color: Color,

    /// Border color for a selection box while switching is on cooldown
    pub border_color_active: Color,

    /// Color of the experience counter text
    pub text_color: Color,

    /// Border thickness in pixels for bars, boxes and the text backdrop
    pub border_thickness: u32,

    /// Side length of the square weapon/magic selection boxes
    pub item_box_size: u32,

    /// Top-left corner of the weapon selection box
    pub weapon_box_pos: (i32, i32),

    /// Top-left corner of the magic selection box
    pub magic_box_pos: (i32, i32),

    /// Bitmap font scale for the experience counter
    pub text_scale: u32,

    /// Distance from the screen's bottom-right corner to the text block
    pub screen_margin: i32,

    /// Pixels added to the text bounds (per axis, centered) for its backdrop
    pub text_padding: i32,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            screen_size: (1280, 720),
            health_bar_rect: Rect::new(10, 10, 200, 20),
            energy_bar_rect: Rect::new(10, 34, 140, 20),
            health_color: Color::RGB(255, 0, 0),
            energy_color: Color::RGB(0, 0, 255),
            background_color: Color::RGB(34, 34, 34), // #222222
            border_color: Color::RGB(17, 17, 17),     // #111111
            border_color_active: Color::RGB(255, 215, 0), // Gold
            text_color: Color::RGB(238, 238, 238),    // #EEEEEE
            border_thickness: 3,
            item_box_size: 80,
            weapon_box_pos: (10, 630),
            magic_box_pos: (80, 620),
            text_scale: 2,
            screen_margin: 20,
            text_padding: 10,
        }
    }
}

/// One weapon entry in the catalog
///
/// The HUD only reads `graphic`; the gameplay fields ride along so the same
/// table drives combat tuning elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponEntry {
    pub name: String,
    /// Path to the icon shown in the weapon selection box
    pub graphic: String,
    pub cooldown_ms: u64,
    pub damage: i32,
}

/// One magic entry in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicEntry {
    pub name: String,
    /// Path to the icon shown in the magic selection box
    pub graphic: String,
    pub strength: i32,
    pub cost: i32,
}

/// Ordered weapon and magic tables
///
/// See the module docs for the ordering contract: entry position defines
/// the index space consumed by the player's selection indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub weapons: Vec<WeaponEntry>,
    pub magics: Vec<MagicEntry>,
}

impl ItemCatalog {
    /// Loads the catalog from a JSON file
    ///
    /// Load failure is fatal for the caller: the HUD cannot render without
    /// its icon tables.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let catalog: ItemCatalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_reference_layout() {
        let style = HudStyle::default();
        assert_eq!(style.health_bar_rect, Rect::new(10, 10, 200, 20));
        assert_eq!(style.energy_bar_rect, Rect::new(10, 34, 140, 20));
        assert_eq!(style.item_box_size, 80);
        assert_eq!(style.weapon_box_pos, (10, 630));
        assert_eq!(style.magic_box_pos, (80, 620));
        assert_eq!(style.border_thickness, 3);
        assert_eq!(style.screen_margin, 20);
    }

    #[test]
    fn test_catalog_preserves_declaration_order() {
        let json = r#"{
            "weapons": [
                {"name": "sword", "graphic": "assets/weapons/sword/full.png", "cooldown_ms": 100, "damage": 15},
                {"name": "lance", "graphic": "assets/weapons/lance/full.png", "cooldown_ms": 400, "damage": 30},
                {"name": "axe", "graphic": "assets/weapons/axe/full.png", "cooldown_ms": 300, "damage": 20}
            ],
            "magics": [
                {"name": "flame", "graphic": "assets/magics/flame/fire.png", "strength": 5, "cost": 20},
                {"name": "heal", "graphic": "assets/magics/heal/heal.png", "strength": 20, "cost": 10}
            ]
        }"#;

        let catalog: ItemCatalog = serde_json::from_str(json).unwrap();
        let weapon_names: Vec<&str> = catalog.weapons.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(weapon_names, vec!["sword", "lance", "axe"]);
        let magic_names: Vec<&str> = catalog.magics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(magic_names, vec!["flame", "heal"]);
    }

    #[test]
    fn test_catalog_round_trip() {
        let catalog = ItemCatalog {
            weapons: vec![WeaponEntry {
                name: "rapier".to_string(),
                graphic: "assets/weapons/rapier/full.png".to_string(),
                cooldown_ms: 50,
                damage: 8,
            }],
            magics: vec![],
        };

        let json = serde_json::to_string(&catalog).unwrap();
        let reloaded: ItemCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.weapons.len(), 1);
        assert_eq!(reloaded.weapons[0].name, "rapier");
        assert_eq!(reloaded.weapons[0].damage, 8);
    }
}
