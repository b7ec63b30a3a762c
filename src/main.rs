use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

mod assets;
mod config;
mod player;
mod text;
mod ui;
mod weapon;

use config::{HudStyle, ItemCatalog};
use player::{Facing, PlayerSnapshot};
use ui::Hud;
use weapon::WeaponSprite;

// Game resolution constants
const GAME_WIDTH: u32 = 1280;
const GAME_HEIGHT: u32 = 720;

/// Frames a selection stays locked after switching weapon or magic
const SWITCH_COOLDOWN_FRAMES: u32 = 30;

/// Frames the weapon sprite stays visible after an attack
const ATTACK_FRAMES: u32 = 20;

/// Demo player driven by the keyboard to exercise the HUD
///
/// Stands in for the game's real player entity: the HUD and the weapon
/// positioner only ever see the snapshot this produces.
struct DemoPlayer {
    health: f32,
    max_health: f32,
    energy: f32,
    max_energy: f32,
    exp: f32,
    weapon_index: usize,
    magic_index: usize,
    weapon_switch_cooldown: u32,
    magic_switch_cooldown: u32,
    facing: Facing,
    bounds: Rect,
}

impl DemoPlayer {
    fn new() -> Self {
        DemoPlayer {
            health: 70.0,
            max_health: 100.0,
            energy: 40.0,
            max_energy: 60.0,
            exp: 123.0,
            weapon_index: 0,
            magic_index: 0,
            weapon_switch_cooldown: 0,
            magic_switch_cooldown: 0,
            facing: Facing::Down,
            bounds: Rect::new(608, 328, 64, 64),
        }
    }

    /// Ticks down the switch cooldowns; called once per frame
    fn update(&mut self) {
        self.weapon_switch_cooldown = self.weapon_switch_cooldown.saturating_sub(1);
        self.magic_switch_cooldown = self.magic_switch_cooldown.saturating_sub(1);
    }

    fn cycle_weapon(&mut self, catalog: &ItemCatalog) {
        if self.weapon_switch_cooldown == 0 && !catalog.weapons.is_empty() {
            self.weapon_index = (self.weapon_index + 1) % catalog.weapons.len();
            self.weapon_switch_cooldown = SWITCH_COOLDOWN_FRAMES;
        }
    }

    fn cycle_magic(&mut self, catalog: &ItemCatalog) {
        if self.magic_switch_cooldown == 0 && !catalog.magics.is_empty() {
            self.magic_index = (self.magic_index + 1) % catalog.magics.len();
            self.magic_switch_cooldown = SWITCH_COOLDOWN_FRAMES;
        }
    }

    /// Builds the read-only per-frame view consumed by the presentation layer
    fn snapshot(&self, catalog: &ItemCatalog) -> PlayerSnapshot {
        PlayerSnapshot {
            health: self.health,
            max_health: self.max_health,
            energy: self.energy,
            max_energy: self.max_energy,
            exp: self.exp,
            weapon_index: self.weapon_index,
            magic_index: self.magic_index,
            can_switch_weapon: self.weapon_switch_cooldown == 0,
            can_switch_magic: self.magic_switch_cooldown == 0,
            facing: self.facing,
            weapon: catalog.weapons[self.weapon_index].name.clone(),
            bounds: self.bounds,
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Questline - HUD Demo", GAME_WIDTH, GAME_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // HUD setup: item tables are fatal to miss, the HUD can't render without them
    let catalog = ItemCatalog::load_from_file("assets/config/items.json")
        .map_err(|e| format!("Failed to load item catalog: {}", e))?;
    if catalog.weapons.is_empty() {
        return Err("Item catalog defines no weapons".to_string());
    }
    let hud = Hud::new(&texture_creator, HudStyle::default(), &catalog)?;

    let mut demo_player = DemoPlayer::new();

    // Active attack: the positioned weapon sprite plus remaining frames
    let mut active_weapon: Option<(WeaponSprite, u32)> = None;

    println!("Controls:");
    println!("Arrow Keys - Change facing direction");
    println!("SPACE - Attack (shows positioned weapon sprite)");
    println!("Q - Cycle weapon, W - Cycle magic");
    println!("H - Take damage, J - Heal");
    println!("N - Drain energy, M - Restore energy");
    println!("E - Gain experience");
    println!("ESC - Quit");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Up),
                    ..
                } => demo_player.facing = Facing::Up,
                Event::KeyDown {
                    keycode: Some(Keycode::Down),
                    ..
                } => demo_player.facing = Facing::Down,
                Event::KeyDown {
                    keycode: Some(Keycode::Left),
                    ..
                } => demo_player.facing = Facing::Left,
                Event::KeyDown {
                    keycode: Some(Keycode::Right),
                    ..
                } => demo_player.facing = Facing::Right,
                Event::KeyDown {
                    keycode: Some(Keycode::Q),
                    ..
                } => demo_player.cycle_weapon(&catalog),
                Event::KeyDown {
                    keycode: Some(Keycode::W),
                    ..
                } => demo_player.cycle_magic(&catalog),
                Event::KeyDown {
                    keycode: Some(Keycode::H),
                    ..
                } => demo_player.health = (demo_player.health - 10.0).max(0.0),
                Event::KeyDown {
                    keycode: Some(Keycode::J),
                    ..
                } => demo_player.health = (demo_player.health + 10.0).min(demo_player.max_health),
                Event::KeyDown {
                    keycode: Some(Keycode::N),
                    ..
                } => demo_player.energy = (demo_player.energy - 5.0).max(0.0),
                Event::KeyDown {
                    keycode: Some(Keycode::M),
                    ..
                } => demo_player.energy = (demo_player.energy + 5.0).min(demo_player.max_energy),
                Event::KeyDown {
                    keycode: Some(Keycode::E),
                    ..
                } => demo_player.exp += 25.0,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => {
                    let snapshot = demo_player.snapshot(&catalog);
                    let sprite = WeaponSprite::new(&texture_creator, &snapshot)?;
                    active_weapon = Some((sprite, ATTACK_FRAMES));
                }
                _ => {}
            }
        }

        demo_player.update();

        // Expire the attack sprite
        if let Some((_, frames_left)) = &mut active_weapon {
            *frames_left = frames_left.saturating_sub(1);
            if *frames_left == 0 {
                active_weapon = None;
            }
        }

        canvas.set_draw_color(Color::RGB(113, 221, 238)); // Water-blue backdrop
        canvas.clear();

        // Stand-in for the player sprite so weapon anchoring is visible
        canvas.set_draw_color(Color::RGB(60, 60, 80));
        canvas.fill_rect(demo_player.bounds)?;

        if let Some((sprite, _)) = &active_weapon {
            sprite.render(&mut canvas)?;
        }

        let snapshot = demo_player.snapshot(&catalog);
        hud.display(&mut canvas, &snapshot)?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
