//! Player snapshot consumed by the presentation layer
//!
//! The HUD and the weapon positioner never touch the live player entity.
//! They read a [`PlayerSnapshot`] built once per frame, so rendering cannot
//! mutate gameplay state and the facing direction is parsed exactly once at
//! the boundary instead of per draw call.

use sdl2::rect::Rect;

/// The four facing directions a player sprite can have
///
/// Parsed from the combined status string ("down_idle", "right_attack")
/// at snapshot time. There is deliberately no catch-all variant: an
/// unrecognized prefix is rejected by [`Facing::from_status`] rather than
/// silently falling back to center-anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
    Up,
    Down,
}

impl Facing {
    /// Extracts the facing direction from a combined status string
    ///
    /// The direction is the prefix before the first underscore, or the
    /// whole string if there is none: "down_idle" → `Down`, "up" → `Up`.
    pub fn from_status(status: &str) -> Result<Self, String> {
        let prefix = status.split('_').next().unwrap_or(status);
        match prefix {
            "right" => Ok(Facing::Right),
            "left" => Ok(Facing::Left),
            "up" => Ok(Facing::Up),
            "down" => Ok(Facing::Down),
            other => Err(format!(
                "Unrecognized facing direction '{}' in status '{}'",
                other, status
            )),
        }
    }

    /// Directory name used in weapon sprite paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Right => "right",
            Facing::Left => "left",
            Facing::Up => "up",
            Facing::Down => "down",
        }
    }
}

/// Read-only per-frame view of the player for presentation
///
/// `weapon_index` / `magic_index` must be valid for the loaded icon sets;
/// the HUD bounds-checks and errors instead of wrapping.
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub exp: f32,
    pub weapon_index: usize,
    pub magic_index: usize,
    pub can_switch_weapon: bool,
    pub can_switch_magic: bool,
    pub facing: Facing,
    /// Catalog name of the equipped weapon, used for sprite path lookup
    pub weapon: String,
    /// Player sprite bounding box in screen coordinates
    pub bounds: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_from_status_prefix() {
        assert_eq!(Facing::from_status("right_idle").unwrap(), Facing::Right);
        assert_eq!(Facing::from_status("left_attack").unwrap(), Facing::Left);
        assert_eq!(Facing::from_status("up_idle").unwrap(), Facing::Up);
        assert_eq!(Facing::from_status("down_idle").unwrap(), Facing::Down);
    }

    #[test]
    fn test_facing_from_bare_direction() {
        assert_eq!(Facing::from_status("down").unwrap(), Facing::Down);
    }

    #[test]
    fn test_facing_ignores_extra_suffixes() {
        assert_eq!(Facing::from_status("up_attack_windup").unwrap(), Facing::Up);
    }

    #[test]
    fn test_facing_rejects_unknown_prefix() {
        let err = Facing::from_status("diagonal_idle").unwrap_err();
        assert!(err.contains("diagonal"));
        assert!(Facing::from_status("").is_err());
    }

    #[test]
    fn test_facing_path_names() {
        assert_eq!(Facing::Right.as_str(), "right");
        assert_eq!(Facing::Down.as_str(), "down");
    }
}
