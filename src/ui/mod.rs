//! Screen-Space HUD System
//!
//! This module provides the always-visible player status overlay, rendered
//! at fixed screen positions on top of the game world.
//!
//! # Architecture
//!
//! HUD components are **stateless rendering components** that:
//! - Use screen coordinates (pixels from screen edges)
//! - Read a per-frame [`PlayerSnapshot`](crate::player::PlayerSnapshot),
//!   never the live player entity
//! - Are created once at startup and reused every frame
//! - Use procedural rendering (SDL2 primitives) plus preloaded icon textures
//!
//! # Available Components
//!
//! - [`Hud`] - health/energy bars, weapon/magic selection boxes, exp counter
//! - [`IconSet`] - ordered, positionally indexed icon textures
//!
//! # Example Usage
//!
//! ```rust
//! use crate::config::{HudStyle, ItemCatalog};
//! use crate::ui::Hud;
//!
//! // Create once (in main.rs)
//! let catalog = ItemCatalog::load_from_file("assets/config/items.json")?;
//! let hud = Hud::new(&texture_creator, HudStyle::default(), &catalog)?;
//!
//! // In the render loop, once per frame
//! hud.display(&mut canvas, &player_snapshot)?;
//! ```

pub mod hud;
pub mod icons;

pub use hud::{BarSpec, Hud};
pub use icons::{Icon, IconSet};
