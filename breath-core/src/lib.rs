//! Breath Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den LED-Ring-Treiber für die Atem-Animation
//! (Fade in/out) gegen Traits, damit er auf dem Host testbar ist.

#![no_std]

pub mod breath;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use breath::{BreathLed, IDLE_CHANNEL, POWER_CHANNEL};
pub use logic::{Ramp, ramp, ramp_duration_ms};
pub use traits::{LedError, PwmLedWriter, StepTimer};
pub use types::{BREATH_DELAY_MS, BRIGHT, Channel, DIMMING, OFF, RUNNING, clamp_duty};
