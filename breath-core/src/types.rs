//! Core Types für die LED-Ring-Steuerung
//!
//! Kanäle und Helligkeits-Stufen ohne Hardware-Dependencies

// ============================================================================
// Helligkeits-Stufen (Duty-Cycle in Prozent)
// ============================================================================

/// LED aus
pub const OFF: u8 = 0;

/// Gedimmte Stufe für das Atmen im ausgeschalteten Zustand
pub const DIMMING: u8 = 20;

/// Helligkeit im laufenden Betrieb
pub const RUNNING: u8 = 66;

/// Volle Helligkeit (obere Grenze des Duty-Cycles)
pub const BRIGHT: u8 = 100;

/// Wartezeit pro Rampen-Schritt in Millisekunden
pub const BREATH_DELAY_MS: u64 = 15;

/// Begrenzt einen Duty-Cycle auf den gültigen Bereich `[OFF, BRIGHT]`
///
/// Wird von jedem `PwmLedWriter` vor dem Schreiben angewendet,
/// die Rampe selbst begrenzt nicht.
///
/// ```
/// # use breath_core::{clamp_duty, BRIGHT};
/// assert_eq!(clamp_duty(250), BRIGHT);
/// assert_eq!(clamp_duty(42), 42);
/// ```
pub const fn clamp_duty(value: u8) -> u8 {
    if value > BRIGHT { BRIGHT } else { value }
}

// ============================================================================
// LED-Kanäle
// ============================================================================

/// Farbkanal des LED-Rings
///
/// Jeder Kanal ist fest einem PWM-fähigen Ausgangs-Pin zugeordnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Blue,
}

impl Channel {
    /// Alle Kanäle in Setup-Reihenfolge
    pub const ALL: [Channel; 2] = [Channel::Red, Channel::Blue];

    /// Hardware-Pin des Kanals
    pub const fn pin(self) -> u8 {
        match self {
            Channel::Red => 9,
            Channel::Blue => 8,
        }
    }

    /// Anzeigename für Logs
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "Rot",
            Channel::Blue => "Blau",
        }
    }

    /// Index für kanalweise Arrays (`[T; 2]`)
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Blue => 1,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} (GPIO{})", self.name(), self.pin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_pins() {
        assert_eq!(Channel::Red.pin(), 9);
        assert_eq!(Channel::Blue.pin(), 8);
    }

    #[test]
    fn test_channel_indices_are_distinct() {
        assert_ne!(Channel::Red.index(), Channel::Blue.index());
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(OFF < DIMMING);
        assert!(DIMMING < RUNNING);
        assert!(RUNNING < BRIGHT);
    }

    #[test]
    fn test_clamp_duty() {
        assert_eq!(clamp_duty(OFF), OFF);
        assert_eq!(clamp_duty(BRIGHT), BRIGHT);
        assert_eq!(clamp_duty(BRIGHT + 1), BRIGHT);
        assert_eq!(clamp_duty(u8::MAX), BRIGHT);
    }
}
