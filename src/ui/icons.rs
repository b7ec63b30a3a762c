//! Ordered icon sets for the selection boxes
//!
//! An [`IconSet`] is built once at startup from a catalog table and indexed
//! positionally by the player's `weapon_index` / `magic_index`. Load order
//! is catalog declaration order, so the index space matches the catalog
//! (see the ordering contract in `config`).

use crate::assets::load_texture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

/// A preloaded icon texture with its queried pixel size
///
/// The size is cached at load time so layout code can center icons without
/// re-querying the texture every frame.
pub struct Icon<'a> {
    pub texture: Texture<'a>,
    pub width: u32,
    pub height: u32,
}

/// An ordered collection of preloaded icons, indexed positionally
pub struct IconSet<'a> {
    icons: Vec<Icon<'a>>,
}

impl<'a> IconSet<'a> {
    /// Loads one icon per path, preserving path order
    ///
    /// Any individual load failure aborts the whole set: the HUD cannot
    /// render with a partially loaded icon table.
    pub fn load<'p, I>(
        texture_creator: &'a TextureCreator<WindowContext>,
        paths: I,
    ) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut icons = Vec::new();
        for path in paths {
            let texture = load_texture(texture_creator, path)?;
            let query = texture.query();
            icons.push(Icon {
                texture,
                width: query.width,
                height: query.height,
            });
        }
        Ok(IconSet { icons })
    }

    /// Returns the icon at `index`
    ///
    /// An out-of-range index is a caller contract violation and fails with
    /// a bounds error; indices are never wrapped.
    pub fn get(&self, index: usize) -> Result<&Icon<'a>, String> {
        check_bounds(index, self.icons.len())?;
        Ok(&self.icons[index])
    }

    #[allow(dead_code)] // Reserved for catalog/icon count validation
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[allow(dead_code)] // Reserved for catalog/icon count validation
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Validates a positional index against the set size
fn check_bounds(index: usize, len: usize) -> Result<(), String> {
    if index < len {
        Ok(())
    } else {
        Err(format!(
            "Icon index {} out of range for set of {} icons",
            index, len
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds_in_range() {
        assert!(check_bounds(0, 4).is_ok());
        assert!(check_bounds(3, 4).is_ok());
    }

    #[test]
    fn test_check_bounds_rejects_out_of_range() {
        let err = check_bounds(4, 4).unwrap_err();
        assert!(err.contains("4 out of range"));
        assert!(check_bounds(0, 0).is_err());
    }
}
