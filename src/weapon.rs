//! Melee weapon sprite positioning
//!
//! When the player attacks, the equipped weapon appears as its own sprite
//! anchored to the player's bounding box: sticking out of the facing side,
//! nudged down slightly for sideways swings and left slightly for vertical
//! ones so it lines up with the character's hands.

use crate::assets::load_texture;
use crate::player::{Facing, PlayerSnapshot};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// Vertical nudge for left/right swings, in pixels
const SIDE_OFFSET_Y: i32 = 16;

/// Horizontal nudge for up/down swings, in pixels
const VERTICAL_OFFSET_X: i32 = -10;

/// A positioned weapon sprite, ready to be drawn for the attack's duration
pub struct WeaponSprite<'a> {
    texture: Texture<'a>,
    rect: Rect,
}

impl<'a> WeaponSprite<'a> {
    /// Loads the directional weapon image and anchors it to the player
    ///
    /// The image is selected by the `assets/weapons/{weapon}/{facing}.png`
    /// path convention. Load failure propagates: attacking with a weapon
    /// whose art is missing is a broken install, not something to render
    /// around.
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        player: &PlayerSnapshot,
    ) -> Result<Self, String> {
        let path = sprite_path(&player.weapon, player.facing);
        let texture = load_texture(texture_creator, &path)?;
        let query = texture.query();
        let rect = position_weapon(player.facing, query.width, query.height, player.bounds);

        Ok(WeaponSprite { texture, rect })
    }

    /// Blits the weapon at its anchored position
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.copy(&self.texture, None, self.rect)
    }

    /// The anchored screen rectangle, exposed for hit detection
    #[allow(dead_code)] // Reserved for attack hitbox checks
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Path of the directional weapon image for a (weapon, facing) pair
pub fn sprite_path(weapon: &str, facing: Facing) -> String {
    format!("assets/weapons/{}/{}.png", weapon, facing.as_str())
}

/// Computes the weapon rectangle anchored to the player's bounding box
///
/// Anchor rule per facing:
/// - `Right`: weapon mid-left on player mid-right, +16px down
/// - `Left`: weapon mid-right on player mid-left, +16px down
/// - `Up`: weapon mid-bottom on player mid-top, -10px left
/// - `Down`: weapon mid-top on player mid-bottom, -10px left
pub fn position_weapon(facing: Facing, weapon_w: u32, weapon_h: u32, player: Rect) -> Rect {
    let w = weapon_w as i32;
    let h = weapon_h as i32;
    let center = player.center();

    let (x, y) = match facing {
        Facing::Right => (player.right(), center.y() + SIDE_OFFSET_Y - h / 2),
        Facing::Left => (player.left() - w, center.y() + SIDE_OFFSET_Y - h / 2),
        Facing::Up => (center.x() + VERTICAL_OFFSET_X - w / 2, player.top() - h),
        Facing::Down => (center.x() + VERTICAL_OFFSET_X - w / 2, player.bottom()),
    };

    Rect::new(x, y, weapon_w, weapon_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 64x64 player at (100, 100): center (132, 132), edges at 100/164
    fn player_rect() -> Rect {
        Rect::new(100, 100, 64, 64)
    }

    #[test]
    fn test_right_facing_anchors_midleft_to_midright() {
        let rect = position_weapon(Facing::Right, 20, 40, player_rect());
        // mid-left of the weapon sits at player mid-right + (0, 16)
        assert_eq!(rect.left(), 164);
        assert_eq!(rect.center().y(), 132 + 16);
        assert_eq!((rect.width(), rect.height()), (20, 40));
    }

    #[test]
    fn test_left_facing_anchors_midright_to_midleft() {
        let rect = position_weapon(Facing::Left, 20, 40, player_rect());
        assert_eq!(rect.right(), 100);
        assert_eq!(rect.center().y(), 132 + 16);
    }

    #[test]
    fn test_up_facing_anchors_midbottom_to_midtop() {
        let rect = position_weapon(Facing::Up, 20, 40, player_rect());
        assert_eq!(rect.bottom(), 100);
        assert_eq!(rect.center().x(), 132 - 10);
    }

    #[test]
    fn test_down_facing_anchors_midtop_to_midbottom() {
        let rect = position_weapon(Facing::Down, 20, 40, player_rect());
        assert_eq!(rect.top(), 164);
        assert_eq!(rect.center().x(), 132 - 10);
    }

    #[test]
    fn test_sprite_path_convention() {
        assert_eq!(
            sprite_path("sword", Facing::Right),
            "assets/weapons/sword/right.png"
        );
        assert_eq!(
            sprite_path("lance", Facing::Up),
            "assets/weapons/lance/up.png"
        );
    }
}
