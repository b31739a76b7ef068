//! Simulation constants and tuning defaults.
//!
//! Per-frame rates are expressed in "frame units": they are multiplied by
//! `dt * FRAME_RATE_REFERENCE` so that motion is independent of frame rate.

/// Reference frame rate that per-frame constants are normalized against.
pub const FRAME_RATE_REFERENCE: f32 = 60.0;

/// Nominal seconds per tick for headless runs.
pub const FIXED_DT: f32 = 1.0 / FRAME_RATE_REFERENCE;

/// Upper bound on a single tick's elapsed time (seconds).
pub const MAX_TICK_DT: f32 = 0.1;

// --- Player flight ---

/// Angular rate per frame unit (radians).
pub const ROTATION_SPEED: f32 = 0.015;

/// Thrust added per frame unit along each held translation axis.
pub const MOVE_SPEED: f32 = 0.04;

/// Uniform velocity damping applied once per tick.
pub const DAMPING: f32 = 0.92;

/// Speed cap per frame unit (before boost multiplier).
pub const MAX_SPEED: f32 = 0.35;

/// Speed multiplier while boosting.
pub const BOOST_MULTIPLIER: f32 = 2.0;

/// Boost duration (seconds).
pub const BOOST_DURATION_SECS: f32 = 2.0;

/// Cooldown after a boost expires (seconds).
pub const BOOST_COOLDOWN_SECS: f32 = 5.0;

/// Pitch limit (radians, ±60°).
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

/// Roll limit (radians, ±45°).
pub const ROLL_LIMIT: f32 = std::f32::consts::FRAC_PI_4;

/// Player collision sphere radius.
pub const PLAYER_RADIUS: f32 = 1.5;

/// Player spawn position.
pub const PLAYER_START: [f32; 3] = [0.0, 10.0, 0.0];

/// Minimum altitude for the player.
pub const FLOOR_HEIGHT: f32 = 5.0;

/// Pause between collision resolutions (seconds).
pub const COLLISION_COOLDOWN_SECS: f32 = 0.5;

/// Starting and maximum player health.
pub const MAX_HEALTH: f32 = 100.0;

// --- Enemies ---

/// Enemies spawned when a game starts.
pub const INITIAL_ENEMY_COUNT: u32 = 8;

/// Population cap for stochastic respawns.
pub const MAX_ENEMY_COUNT: u32 = 15;

/// Per-tick respawn probability (not scaled by dt).
pub const ENEMY_RESPAWN_CHANCE: f64 = 0.01;

/// Minimum horizontal spawn distance from the player.
pub const ENEMY_SPAWN_MIN_DISTANCE: f32 = 30.0;

/// Maximum horizontal spawn distance from the player.
pub const ENEMY_SPAWN_MAX_DISTANCE: f32 = 50.0;

/// Total vertical spawn jitter (±half of this).
pub const ENEMY_SPAWN_VERTICAL_JITTER: f32 = 10.0;

/// Seek speed per frame unit.
pub const ENEMY_SEEK_SPEED: f32 = 0.03;

/// Distance under which an enemy drains player health.
pub const ENEMY_CONTACT_RANGE: f32 = 3.0;

/// Health drained per frame unit per enemy in contact.
pub const ENEMY_CONTACT_DAMAGE: f32 = 1.0;

/// Hit points of a freshly spawned enemy.
pub const ENEMY_HEALTH: i32 = 3;

// --- Projectiles ---

/// Projectile speed per frame unit.
pub const PROJECTILE_SPEED: f32 = 0.5;

/// Projectiles farther than this from the player are removed.
pub const PROJECTILE_MAX_RANGE: f32 = 100.0;

/// Projectile-vs-enemy hit distance.
pub const PROJECTILE_HIT_RADIUS: f32 = 2.0;

/// Damage dealt to an enemy per projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 3;

/// Score awarded per destroyed enemy.
pub const KILL_SCORE: f32 = 100.0;

/// Passive score accrued per second while active.
pub const PASSIVE_SCORE_PER_SEC: f32 = 10.0;

// --- Enemy base ---

/// Base position.
pub const BASE_POSITION: [f32; 3] = [0.0, -1.0, 0.0];

/// Base bounding box (full extents).
pub const BASE_SIZE: [f32; 3] = [20.0, 30.0, 20.0];

/// Starting base health.
pub const BASE_MAX_HEALTH: i32 = 100;

/// Projectile-vs-base hit distance.
pub const BASE_HIT_RADIUS: f32 = 20.0;

/// Base health removed per projectile impact.
pub const BASE_HIT_DAMAGE: i32 = 5;

// --- Shield ---

/// Delay before the first shield spawn (seconds).
pub const SHIELD_FIRST_SPAWN_SECS: f32 = 15.0;

/// Delay between a pickup and the next spawn (seconds).
pub const SHIELD_RESPAWN_SECS: f32 = 20.0;

/// Buff duration (seconds).
pub const SHIELD_DURATION_SECS: f32 = 10.0;

/// Pickup distance.
pub const SHIELD_PICKUP_RANGE: f32 = 3.0;

/// Pickup spawn height.
pub const SHIELD_SPAWN_HEIGHT: f32 = 10.0;

/// Margin kept between the pickup and the boundary.
pub const SHIELD_SPAWN_MARGIN: f32 = 20.0;

// --- City layout ---

/// Edge length of the city grid.
pub const CITY_SIZE: f32 = 200.0;

/// Edge length of the walled play area.
pub const BOUNDARY_SIZE: f32 = CITY_SIZE + 20.0;

/// Number of buildings generated.
pub const BUILDING_COUNT: u32 = 200;

/// Number of floating platforms generated.
pub const PLATFORM_COUNT: u32 = 20;

/// Buildings are kept at least this far from the centre.
pub const BUILDING_CLEAR_RADIUS: f32 = 30.0;

/// Margin between buildings and the boundary walls.
pub const BUILDING_MARGIN: f32 = 15.0;

/// Platform full extents.
pub const PLATFORM_SIZE: [f32; 3] = [10.0, 0.5, 10.0];

/// Boundary wall thickness.
pub const WALL_THICKNESS: f32 = 5.0;

/// Boundary wall height.
pub const WALL_HEIGHT: f32 = 100.0;

// --- Colors (0xRRGGBB) ---

pub const BUILDING_COLOR: u32 = 0x11_11_22;
pub const PLATFORM_COLOR: u32 = 0x33_33_55;
pub const WALL_COLOR: u32 = 0xff_00_55;
pub const BASE_COLOR: u32 = 0xaa_00_00;
pub const FLASH_COLOR: u32 = 0xff_55_00;

/// Obstacle flash duration after a collision (seconds).
pub const OBSTACLE_FLASH_SECS: f32 = 0.5;

/// Base flash duration after a hit (seconds).
pub const BASE_FLASH_SECS: f32 = 0.1;

// --- Display ---

/// Radar range (horizontal units).
pub const RADAR_RANGE: f32 = BOUNDARY_SIZE / 2.0;

/// Speed below which the low-speed warning is shown.
pub const LOW_SPEED_THRESHOLD: f32 = 0.1;

/// Speed percentage above which the indicator shows "fast".
pub const FAST_SPEED_PERCENT: f32 = 70.0;

/// Health at or below which the HUD shows critical health.
pub const CRITICAL_HEALTH: f32 = 30.0;
