//! Screen-space HUD renderer
//!
//! Draws the always-visible player status overlay: health and energy bars
//! in the top-left, weapon and magic selection boxes in the bottom-left,
//! experience counter in the bottom-right. The HUD is created once at
//! startup and [`Hud::display`] is called once per frame with a read-only
//! player snapshot.
//!
//! Layout math (fill widths, icon centering, text anchoring) is kept in
//! free functions separate from the SDL2 draw calls so it can be unit
//! tested without a window.

use crate::config::{HudStyle, ItemCatalog};
use crate::player::PlayerSnapshot;
use crate::text::{draw_text, text_size};
use crate::ui::icons::IconSet;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// A fixed status bar: background rectangle plus fill color
///
/// Immutable after construction; one instance for health, one for energy.
#[derive(Debug, Clone)]
pub struct BarSpec {
    pub rect: Rect,
    pub color: Color,
}

/// The heads-up display renderer
///
/// Owns the style, the two bar specs and the preloaded weapon/magic icon
/// sets. Stateless per call: nothing here changes between frames after
/// construction.
pub struct Hud<'a> {
    style: HudStyle,
    health_bar: BarSpec,
    energy_bar: BarSpec,
    weapon_icons: IconSet<'a>,
    magic_icons: IconSet<'a>,
}

impl<'a> Hud<'a> {
    /// Creates the HUD, preloading all weapon and magic icons
    ///
    /// Icon load failure is fatal: the error propagates and the caller
    /// should abort startup rather than render a half-built HUD.
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        style: HudStyle,
        catalog: &ItemCatalog,
    ) -> Result<Self, String> {
        let weapon_icons = IconSet::load(
            texture_creator,
            catalog.weapons.iter().map(|w| w.graphic.as_str()),
        )?;
        let magic_icons = IconSet::load(
            texture_creator,
            catalog.magics.iter().map(|m| m.graphic.as_str()),
        )?;

        let health_bar = BarSpec {
            rect: style.health_bar_rect,
            color: style.health_color,
        };
        let energy_bar = BarSpec {
            rect: style.energy_bar_rect,
            color: style.energy_color,
        };

        Ok(Hud {
            style,
            health_bar,
            energy_bar,
            weapon_icons,
            magic_icons,
        })
    }

    /// Renders the full HUD for one frame
    ///
    /// Draw order: health bar, energy bar, weapon overlay, magic overlay,
    /// experience text. The overlays show the active border while the
    /// matching switch is on cooldown.
    pub fn display(
        &self,
        canvas: &mut Canvas<Window>,
        player: &PlayerSnapshot,
    ) -> Result<(), String> {
        self.show_bar(canvas, player.health, player.max_health, &self.health_bar)?;
        self.show_bar(canvas, player.energy, player.max_energy, &self.energy_bar)?;
        self.weapon_overlay(canvas, player.weapon_index, !player.can_switch_weapon)?;
        self.magic_overlay(canvas, player.magic_index, !player.can_switch_magic)?;
        self.show_exp(canvas, player.exp)?;
        Ok(())
    }

    /// Draws one status bar: background, proportional fill, border
    ///
    /// `max` must be positive; a zero or negative maximum is a caller
    /// contract violation and fails instead of dividing by zero.
    fn show_bar(
        &self,
        canvas: &mut Canvas<Window>,
        current: f32,
        max: f32,
        bar: &BarSpec,
    ) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bar.rect)?;

        let width = fill_width(current, max, bar.rect.width())?;
        if width > 0 {
            let fill_rect = Rect::new(bar.rect.x(), bar.rect.y(), width, bar.rect.height());
            canvas.set_draw_color(bar.color);
            canvas.fill_rect(fill_rect)?;
        }

        draw_border(
            canvas,
            bar.rect,
            self.style.border_color,
            self.style.border_thickness,
        )
    }

    /// Draws the experience counter in the bottom-right corner
    ///
    /// The value is truncated to an integer. The text block's bottom-right
    /// corner sits exactly `screen_margin` pixels from the surface corner
    /// regardless of digit count. Backdrop first, then text, then the
    /// backdrop border on top.
    fn show_exp(&self, canvas: &mut Canvas<Window>, exp: f32) -> Result<(), String> {
        let text = format!("{}", exp.trunc() as i64);
        let (text_w, text_h) = text_size(&text, self.style.text_scale);
        let text_rect = anchored_bottom_right(
            self.style.screen_size,
            self.style.screen_margin,
            text_w,
            text_h,
        );
        let backdrop = inflate(text_rect, self.style.text_padding, self.style.text_padding);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(backdrop)?;

        draw_text(
            canvas,
            &text,
            text_rect.x(),
            text_rect.y(),
            self.style.text_color,
            self.style.text_scale,
        )?;

        draw_border(
            canvas,
            backdrop,
            self.style.background_color,
            self.style.border_thickness,
        )
    }

    /// Draws a selection box and returns its rectangle for composition
    ///
    /// The border uses the active color while switching is on cooldown;
    /// geometry is identical either way.
    fn selection_box(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        is_switching: bool,
    ) -> Result<Rect, String> {
        let box_rect = selection_box_rect(x, y, self.style.item_box_size);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(box_rect)?;

        let border_color = if is_switching {
            self.style.border_color_active
        } else {
            self.style.border_color
        };
        draw_border(canvas, box_rect, border_color, self.style.border_thickness)?;

        Ok(box_rect)
    }

    /// Draws the weapon selection box with the indexed icon centered inside
    fn weapon_overlay(
        &self,
        canvas: &mut Canvas<Window>,
        weapon_index: usize,
        is_switching: bool,
    ) -> Result<(), String> {
        let (x, y) = self.style.weapon_box_pos;
        let box_rect = self.selection_box(canvas, x, y, is_switching)?;

        let icon = self.weapon_icons.get(weapon_index)?;
        let dest = Rect::from_center(box_rect.center(), icon.width, icon.height);
        canvas.copy(&icon.texture, None, dest)
    }

    /// Draws the magic selection box with the indexed icon centered inside
    fn magic_overlay(
        &self,
        canvas: &mut Canvas<Window>,
        magic_index: usize,
        is_switching: bool,
    ) -> Result<(), String> {
        let (x, y) = self.style.magic_box_pos;
        let box_rect = self.selection_box(canvas, x, y, is_switching)?;

        let icon = self.magic_icons.get(magic_index)?;
        let dest = Rect::from_center(box_rect.center(), icon.width, icon.height);
        canvas.copy(&icon.texture, None, dest)
    }

    /// Gets a reference to the current style
    #[allow(dead_code)] // Reserved for runtime style inspection
    pub fn style(&self) -> &HudStyle {
        &self.style
    }
}

/// Maps a current/max pair to a fill width in pixels
///
/// The ratio is clamped to [0, 1] so the fill never overflows the bar
/// border even if `current` exceeds `max`. A non-positive `max` is a
/// contract violation.
fn fill_width(current: f32, max: f32, bar_width: u32) -> Result<u32, String> {
    if max <= 0.0 {
        return Err(format!("Bar maximum must be positive, got {}", max));
    }
    let ratio = (current / max).clamp(0.0, 1.0);
    Ok((bar_width as f32 * ratio) as u32)
}

/// The square selection box rectangle at a fixed screen position
fn selection_box_rect(x: i32, y: i32, size: u32) -> Rect {
    Rect::new(x, y, size, size)
}

/// Positions a block of the given size with its bottom-right corner
/// `margin` pixels from the surface's bottom-right corner
fn anchored_bottom_right(surface: (u32, u32), margin: i32, width: u32, height: u32) -> Rect {
    let x = surface.0 as i32 - margin - width as i32;
    let y = surface.1 as i32 - margin - height as i32;
    Rect::new(x, y, width, height)
}

/// Grows a rectangle by `dx`/`dy` pixels per axis, keeping its center
fn inflate(rect: Rect, dx: i32, dy: i32) -> Rect {
    Rect::new(
        rect.x() - dx / 2,
        rect.y() - dy / 2,
        (rect.width() as i32 + dx) as u32,
        (rect.height() as i32 + dy) as u32,
    )
}

/// Draws a border of the given thickness inward from the rectangle edge
fn draw_border(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    color: Color,
    thickness: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for i in 0..thickness as i32 {
        let w = rect.width() as i32 - 2 * i;
        let h = rect.height() as i32 - 2 * i;
        if w <= 0 || h <= 0 {
            break;
        }
        canvas.draw_rect(Rect::new(rect.x() + i, rect.y() + i, w as u32, h as u32))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_half() {
        // health 50/100 on the default 200px bar fills exactly half
        assert_eq!(fill_width(50.0, 100.0, 200).unwrap(), 100);
    }

    #[test]
    fn test_fill_width_empty_and_full() {
        assert_eq!(fill_width(0.0, 100.0, 200).unwrap(), 0);
        assert_eq!(fill_width(100.0, 100.0, 200).unwrap(), 200);
    }

    #[test]
    fn test_fill_width_monotonic() {
        let mut previous = 0;
        for current in 0..=100 {
            let width = fill_width(current as f32, 100.0, 200).unwrap();
            assert!(width >= previous);
            previous = width;
        }
    }

    #[test]
    fn test_fill_width_clamps_overflow() {
        // Overheal never spills past the border
        assert_eq!(fill_width(150.0, 100.0, 200).unwrap(), 200);
        assert_eq!(fill_width(-10.0, 100.0, 200).unwrap(), 0);
    }

    #[test]
    fn test_fill_width_rejects_zero_max() {
        assert!(fill_width(10.0, 0.0, 200).is_err());
        assert!(fill_width(10.0, -5.0, 200).is_err());
    }

    #[test]
    fn test_selection_box_geometry_independent_of_switching() {
        // The switching flag only changes border color, never geometry
        let rect = selection_box_rect(10, 630, 80);
        assert_eq!(rect, Rect::new(10, 630, 80, 80));
        assert_eq!(rect, selection_box_rect(10, 630, 80));
    }

    #[test]
    fn test_exp_anchor_fixed_margin_any_digit_count() {
        let surface = (1280u32, 720u32);
        for digits in 1..=7 {
            let text = "9".repeat(digits);
            let (w, h) = crate::text::text_size(&text, 2);
            let rect = anchored_bottom_right(surface, 20, w, h);
            assert_eq!(rect.right(), 1280 - 20);
            assert_eq!(rect.bottom(), 720 - 20);
        }
    }

    #[test]
    fn test_inflate_keeps_center() {
        let rect = Rect::new(100, 100, 40, 20);
        let grown = inflate(rect, 10, 10);
        assert_eq!(grown.center(), rect.center());
        assert_eq!(grown.width(), 50);
        assert_eq!(grown.height(), 30);
    }

    #[test]
    fn test_icon_centering_in_box() {
        let box_rect = selection_box_rect(10, 630, 80);
        let dest = Rect::from_center(box_rect.center(), 32, 48);
        assert_eq!(dest.center(), box_rect.center());
        assert_eq!(dest.width(), 32);
        assert_eq!(dest.height(), 48);
    }
}
