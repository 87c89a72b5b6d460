// Tuning constants for the fluid background shared by the web frontend and tests.

// Particle physics (applied once per frame)
pub const FRICTION: f32 = 0.97; // velocity damping factor
pub const SPRING_CONSTANT: f32 = 0.01; // pull toward rest position per unit displacement
pub const INTENSITY_DECAY: f32 = 0.98; // geometric decay of excitation

// Disturbance falloff
pub const DISTURB_RADIUS: f32 = 100.0; // no effect at or beyond this distance
pub const IMPULSE_SCALE: f32 = 0.02; // displacement-to-velocity coefficient
pub const INTENSITY_GAIN: f32 = 0.5; // power-to-intensity coefficient

// Particle appearance
pub const ALPHA_BASE: f32 = 0.1;
pub const ALPHA_MAX: f32 = 0.8;
pub const RADIUS_INTENSITY_GAIN: f32 = 1.5;
pub const MASS_RANGE: (f32, f32) = (0.5, 1.0); // half-open
pub const RADIUS_RANGE: (f32, f32) = (1.0, 3.0); // half-open

// Population density (viewport area per particle)
pub const DESKTOP_DENSITY: f32 = 3000.0;
pub const MOBILE_DENSITY: f32 = 5000.0;
pub const MOBILE_MAX_WIDTH: f32 = 768.0; // inclusive

// Pointer drag handling
pub const DRAG_THRESHOLD: f32 = 5.0; // movement must exceed this to count as a drag
pub const DRAG_FORCE_MAX: f32 = 15.0;
pub const DRAG_FORCE_DIVISOR: f32 = 10.0;
pub const DRAG_PATH_SAMPLES: usize = 5; // samples along prev -> current
pub const DRAG_PATH_FORCE_SCALE: f32 = 0.5;
pub const TOUCH_FORCE: f32 = 10.0; // per active contact, every frame

// Wave overlay
pub const WAVE_SAMPLE_STEP: f32 = 10.0;

// Background palette: (r, g, b, base alpha)
pub const WATER_COLORS: [(u8, u8, u8, f32); 4] = [
    (125, 90, 255, 0.6),
    (255, 90, 120, 0.6),
    (90, 120, 255, 0.5),
    (150, 70, 200, 0.5),
];

// Vignette stops drawn over the background fill
pub const VIGNETTE_INNER: (u8, u8, u8, f32) = (10, 10, 10, 0.8);
pub const VIGNETTE_OUTER: (u8, u8, u8, f32) = (5, 5, 5, 0.9);
pub const VIGNETTE_RADIUS_DIVISOR: f32 = 1.5; // outer radius = max(w, h) / divisor

// Theme defaults used when a token is missing
pub const DEFAULT_PRIMARY: &str = "#7d5aff";
pub const DEFAULT_SECONDARY: &str = "#ff5a78";
pub const DEFAULT_BACKGROUND: &str = "#050505";

// Scroll tracking
pub const SCROLLED_THRESHOLD: f32 = 50.0; // px scrolled before the page counts as scrolled
pub const REVEAL_THRESHOLD: f32 = 0.1; // visible fraction that latches a reveal
