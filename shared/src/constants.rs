pub const STORAGE_KEY_CONFIG: &str = "lucky_draw_config";
pub const STORAGE_KEY_DRAWN: &str = "lucky_draw_drawn";
pub const STORAGE_KEY_TUNING: &str = "lucky_draw_tuning";

// Wheel physics, per reference frame at 60 Hz
pub const REFERENCE_FRAME_SECONDS: f64 = 1.0 / 60.0;
pub const DEFAULT_DECAY_PER_FRAME: f64 = 0.99;
pub const DEFAULT_LAUNCH_FACTOR: f64 = 2.0;  // degrees per frame per unit of power
pub const DEFAULT_STOP_VELOCITY: f64 = 0.1;

// Power meter
pub const MAX_POWER: f64 = 100.0;
pub const DEFAULT_CHARGE_RATE: f64 = 0.65 / REFERENCE_FRAME_SECONDS;  // 39 power per second
pub const DEFAULT_TAP_THRESHOLD: f64 = 5.0;

// Setup form
pub const MIN_VALUES_PER_CATEGORY: usize = 1;
pub const MAX_VALUES_PER_CATEGORY: usize = 20;

pub const CATEGORY_REQUIRED_ERROR: &str = "Please enter an alphabet";
pub const CATEGORY_FORMAT_ERROR: &str = "Alphabet must be a single letter";
pub const CATEGORY_DUPLICATE_ERROR: &str = "Alphabet already exists";
pub const VALUES_REQUIRED_ERROR: &str = "Please add at least one digit";
pub const VALUES_DUPLICATE_ERROR: &str = "Digits must be unique within an alphabet";
pub const VALUES_TOO_MANY_ERROR: &str = "Too many digits for one alphabet";
pub const CONFIG_EMPTY_ERROR: &str = "Please add at least one alphabet configuration";
