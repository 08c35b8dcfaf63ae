//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Entity geometry ---

/// Target collision radius (scene units).
pub const DEFAULT_TARGET_RADIUS: f64 = 0.875;

/// Projectile collision radius.
pub const DEFAULT_PROJECTILE_RADIUS: f64 = 0.625;

// --- Expiry ---

/// Maximum entity lifetime in seconds before it expires.
pub const DEFAULT_EXPIRY_LIFETIME: f64 = 20.0;

/// Maximum distance from the origin before an entity expires.
pub const DEFAULT_EXPIRY_DISTANCE: f64 = 1000.0;

// --- Random target spawning ---

/// Number of position derivatives (including position) a random target
/// receives.
pub const RANDOM_SERIES_LENGTH: usize = 5;

/// Each random derivative component is drawn from ±this range.
pub const RANDOM_DERIVATIVE_RANGE: f64 = 2.0;

/// Minimum magnitude of a random derivative vector; smaller draws are
/// resampled.
pub const RANDOM_MIN_MAGNITUDE: f64 = 1.0;

/// Resample attempts before clamping a too-small random draw outward.
pub const RANDOM_RESAMPLE_ATTEMPTS: u32 = 2;

// --- Fire control defaults ---

/// Derivative order solved for when the caller does not specify one
/// (1 = velocity).
pub const DEFAULT_ORDER_TO_MINIMIZE: u32 = 1;

/// Intercept time assumed when the root search yields no usable
/// candidate.
pub const DEFAULT_FALLBACK_TIME: f64 = 5.0;
