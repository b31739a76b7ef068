//! Timed color flashes on obstacles and the enemy base.
//!
//! A flash is a `Flash` countdown component; the tint reverts on expiry.
//! Targets that no longer exist are skipped silently.

use hecs::{Entity, World};

use skyraid_core::components::{Flash, Tint};
use skyraid_core::constants::FLASH_COLOR;

/// Start (or restart) a flash on `entity`. Returns false if it has no tint.
pub fn start_flash(world: &mut World, entity: Entity, secs: f32) -> bool {
    match world.get::<&mut Tint>(entity) {
        Ok(mut tint) => tint.current = FLASH_COLOR,
        Err(_) => return false,
    }
    world
        .insert_one(entity, Flash { remaining_secs: secs })
        .is_ok()
}

/// Count flashes down and revert expired ones.
pub fn run(world: &mut World, dt: f32, expired: &mut Vec<Entity>) {
    expired.clear();
    for (entity, (tint, flash)) in world.query_mut::<(&mut Tint, &mut Flash)>() {
        flash.remaining_secs -= dt;
        if flash.remaining_secs <= 0.0 {
            tint.current = tint.base;
            expired.push(entity);
        }
    }
    for entity in expired.drain(..) {
        let _ = world.remove_one::<Flash>(entity);
    }
}

/// Revert every flash immediately.
pub fn clear(world: &mut World, expired: &mut Vec<Entity>) {
    expired.clear();
    for (entity, (tint, _flash)) in world.query_mut::<(&mut Tint, &Flash)>() {
        tint.current = tint.base;
        expired.push(entity);
    }
    for entity in expired.drain(..) {
        let _ = world.remove_one::<Flash>(entity);
    }
}
