use std::f64::consts::PI;

pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m

pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3
pub const AIR_DYNAMIC_VISCOSITY: f64 = 1.81e-5; // Pa·s

// Ball geometry (regulation: 9.25 in circumference, 5.125 oz)
pub const BALL_MASS: f64 = 0.145; // kg
pub const BALL_DIAMETER: f64 = 0.0747; // m
pub const BALL_RADIUS: f64 = BALL_DIAMETER / 2.0; // m
pub const BALL_CROSS_SECTION: f64 = PI * BALL_RADIUS * BALL_RADIUS; // m^2

// Drag crisis model. The base coefficient holds through the critical
// Reynolds band; below it drag rises, above it drops.
pub const CD_BASE: f64 = 0.32;
pub const CD_K_SUBCRITICAL: f64 = 0.04;
pub const CD_K_SUPERCRITICAL: f64 = 0.025;
pub const RE_CRITICAL_LOW: f64 = 200_000.0;
pub const RE_CRITICAL_HIGH: f64 = 250_000.0;
pub const RE_REGIME_WIDTH: f64 = 50_000.0;
pub const CD_MIN: f64 = 0.20;
pub const CD_MAX: f64 = 0.55;

// Spin-induced drag, 0.0292 per 1000 rpm expressed per rad/s
pub const CD_SPIN_PER_RAD_S: f64 = 2.79e-4;

// Lift coefficient saturation: CL = S / (LIFT_SAT_A * S + LIFT_SAT_B),
// where S is the spin factor omega*r/|v|
pub const LIFT_SAT_A: f64 = 2.32;
pub const LIFT_SAT_B: f64 = 0.40;

// Ground interaction
pub const RESTITUTION_GRASS: f64 = 0.45;
pub const RESTITUTION_DIRT: f64 = 0.50;
pub const ROLLING_FRICTION_GRASS: f64 = 0.30;
pub const ROLLING_FRICTION_DIRT: f64 = 0.25;
pub const GROUND_AIR_DECEL: f64 = 0.91; // m/s^2, drag on a rolling ball

// Integration
pub const DEFAULT_TIMESTEP: f64 = 1.0e-3; // s
pub const MAX_FLIGHT_TIME: f64 = 15.0; // s, dead-ball cap
pub const CONTACT_HEIGHT: f64 = 0.9; // m, bat-ball contact above the plate

// Throws
pub const THROW_ARC_FACTOR: f64 = 0.07;
pub const OFF_TARGET_DELAY_MIN: f64 = 0.5; // s
pub const OFF_TARGET_DELAY_MAX: f64 = 1.0; // s
pub const TAG_APPLICATION_MIN: f64 = 0.2; // s
pub const TAG_APPLICATION_MAX: f64 = 0.4; // s
