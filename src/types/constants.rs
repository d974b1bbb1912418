pub const UNKNOWN: i8 = -1;
pub const FREE: i8 = 0;
pub const OCCUPIED: i8 = 100;

pub const DEFAULT_EXTEND_AREA: f64 = 1.0;
pub const DEFAULT_RESOLUTION: f64 = 4.0;
pub const DEFAULT_MIN_RANGE: f64 = 5.0;
pub const DEFAULT_MAX_RANGE: f64 = 4000.0;
