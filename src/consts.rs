/// Lower bound of the initial angular velocity, in degrees per frame.
/// Every spin samples its starting speed uniformly from [MIN, MAX).
pub const SPIN_SPEED_MIN: f32 = 20.0;

/// Upper bound (exclusive) of the initial angular velocity, in degrees per frame.
/// Higher = longer spins, since decay is multiplicative.
pub const SPIN_SPEED_MAX: f32 = 30.0;

/// Per-frame multiplicative attenuation of the angular velocity.
/// Must be strictly between 0 and 1 or the wheel never stops.
/// Closer to 1 = slower, longer deceleration.
pub const DECAY_FACTOR: f32 = 0.97;

/// Speed (degrees per frame) below which the wheel is considered settled.
/// Must be positive.
pub const STOP_THRESHOLD: f32 = 0.2;

/// Angular position of the pointer relative to the sector drawing origin.
/// Sectors are drawn from 0° (pointing right, clockwise on screen), the
/// pointer sits at the top of the wheel, which is 270°.
pub const POINTER_OFFSET: f32 = 270.0;

/// Side of the square logical canvas. Everything below is expressed in these
/// units and scaled to the space egui hands us.
pub const CANVAS_SIZE: f32 = 600.0;

/// Wheel radius in canvas units.
pub const WHEEL_RADIUS: f32 = 250.0;

/// Distance of the sector labels from the wheel centre.
pub const LABEL_RADIUS: f32 = 165.0;

/// Number of vertices used to approximate each sector's outer arc.
pub const ARC_SEGMENTS: usize = 32;

/// Number of stars drifting in the background.
pub const STAR_COUNT: usize = 80;
