//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für PWM-Ausgänge und Wartezeiten
//! ohne konkrete Implementierung.

use crate::types::Channel;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Rampe vor `setup()` aufgerufen
    NotConfigured,
    /// PWM-Kanal konnte nicht eingerichtet werden
    ConfigureFailed(Channel),
    /// Duty-Cycle konnte nicht geschrieben werden
    WriteFailed(Channel),
}

/// Trait für PWM-Hardware-Zugriff
///
/// Abstrahiert die beiden PWM-Ausgänge des LED-Rings.
///
/// # Implementierungen
/// - **Production:** LedcPwmWriter (ESP32 LEDC Peripheral)
/// - **Testing:** MockPwmWriter (in-memory Mock)
pub trait PwmLedWriter {
    /// Richtet den Ausgang eines Kanals ein (Pin-Modus, PWM-Timer)
    fn configure(&mut self, channel: Channel) -> Result<(), LedError>;

    /// Schreibt einen Duty-Cycle in Prozent auf einen Kanal
    ///
    /// Werte über `BRIGHT` werden von der Implementierung begrenzt
    /// (siehe `clamp_duty`).
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, channel: Channel, duty: u8) -> Result<(), LedError>;
}

/// Trait für die Wartezeit zwischen zwei Rampen-Schritten
///
/// - **Production:** EmbassyStepTimer (embassy_time::Timer)
/// - **Testing:** MockStepTimer (zeichnet nur auf)
#[allow(async_fn_in_trait)]
pub trait StepTimer {
    /// Suspendiert den aufrufenden Task für `ms` Millisekunden
    async fn wait_ms(&mut self, ms: u64);
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::NotConfigured => defmt::write!(fmt, "NotConfigured"),
            LedError::ConfigureFailed(channel) => {
                defmt::write!(fmt, "ConfigureFailed({})", channel)
            }
            LedError::WriteFailed(channel) => defmt::write!(fmt, "WriteFailed({})", channel),
        }
    }
}
