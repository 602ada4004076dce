// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von breath-core
pub use breath_core::{
    BREATH_DELAY_MS, BRIGHT, BreathLed, Channel, DIMMING, LedError, OFF, PwmLedWriter, RUNNING,
    StepTimer,
};
