// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Helligkeits-Stufen und Schritt-Wartezeit liegen in breath-core,
// hier nur was die Firmware selbst braucht.

// ============================================================================
// Debug
// ============================================================================

/// Diagnose-Ausgabe für jeden PWM-Schreibzugriff
/// `true` = jeder Rampen-Schritt wird geloggt (sehr gesprächig!)
pub const LED_DEBUG: bool = false;

// ============================================================================
// LEDC (PWM) Konfiguration
// ============================================================================

/// PWM-Frequenz des LEDC-Timers in kHz
/// 24 kHz liegt über dem hörbaren Bereich und flackert nicht
pub const LEDC_FREQUENCY_KHZ: u32 = 24;

// ============================================================================
// Ablauf
// ============================================================================

/// Wie lange der Ring nach dem Einschalt-Fading hell bleibt (Sekunden)
pub const POWER_ON_HOLD_SECS: u64 = 5;

/// Pause zwischen zwei Atemzügen im ausgeschalteten Zustand (Millisekunden)
pub const IDLE_BREATH_PAUSE_MS: u64 = 500;

/// Wartezeit nach einem LED-Fehler vor erneutem Versuch (Sekunden)
pub const LED_RETRY_DELAY_SECS: u64 = 5;
