//! Atem-Treiber für den LED-Ring
//!
//! `BreathLed` besitzt beide PWM-Kanäle exklusiv und fährt
//! Duty-Cycle-Rampen mit fester Wartezeit pro Schritt.

use crate::logic::ramp;
use crate::traits::{LedError, PwmLedWriter, StepTimer};
use crate::types::{BREATH_DELAY_MS, BRIGHT, Channel, DIMMING, OFF};

/// Kanal für das Ein-/Ausschalt-Fading
pub const POWER_CHANNEL: Channel = Channel::Blue;

/// Kanal für das Atmen im ausgeschalteten Zustand
pub const IDLE_CHANNEL: Channel = Channel::Red;

/// LED-Ring Atem-Treiber
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (LedcPwmWriter + EmbassyStepTimer) im Production-Code
/// - Mock Implementationen in den Host-Tests
pub struct BreathLed<W: PwmLedWriter, T: StepTimer> {
    writer: W,
    timer: T,
    configured: bool,
    /// Zuletzt geschriebener Duty-Cycle pro Kanal (Index: `Channel::index()`)
    duty: [u8; 2],
}

impl<W: PwmLedWriter, T: StepTimer> BreathLed<W, T> {
    /// Erstellt einen noch nicht eingerichteten Treiber
    pub fn new(writer: W, timer: T) -> Self {
        Self {
            writer,
            timer,
            configured: false,
            duty: [OFF; 2],
        }
    }

    /// Richtet beide Ausgänge ein und schaltet sie auf `OFF`
    ///
    /// Muss vor der ersten Rampe aufgerufen werden.
    /// Weitere Aufrufe haben keinen Effekt.
    pub fn setup(&mut self) -> Result<(), LedError> {
        if self.configured {
            return Ok(());
        }

        for channel in Channel::ALL {
            self.writer.configure(channel)?;
            self.writer.write(channel, OFF)?;
            self.duty[channel.index()] = OFF;
        }

        self.configured = true;
        Ok(())
    }

    /// Fährt den Duty-Cycle von `start` nach `end` (inklusive)
    ///
    /// Schreibt jeden Zwischenwert genau einmal auf `channel` und wartet
    /// danach `BREATH_DELAY_MS`. Ein Schreibfehler bricht die Rampe ab.
    ///
    /// # Fehlerbehandlung
    /// - `LedError::NotConfigured` wenn `setup()` noch nicht lief
    /// - Fehler des Writers werden unverändert weitergegeben
    pub async fn breath(&mut self, start: u8, end: u8, channel: Channel) -> Result<(), LedError> {
        if !self.configured {
            return Err(LedError::NotConfigured);
        }

        for value in ramp(start, end) {
            self.writer.write(channel, value)?;
            self.duty[channel.index()] = value;
            self.timer.wait_ms(BREATH_DELAY_MS).await;
        }

        Ok(())
    }

    /// Einschalt-Fading: `OFF` → `BRIGHT`
    pub async fn power_on(&mut self) -> Result<(), LedError> {
        self.breath(OFF, BRIGHT, POWER_CHANNEL).await
    }

    /// Ausschalt-Fading: `BRIGHT` → `OFF`
    pub async fn power_off(&mut self) -> Result<(), LedError> {
        self.breath(BRIGHT, OFF, POWER_CHANNEL).await
    }

    /// Einatmen im ausgeschalteten Zustand: `OFF` → `DIMMING`
    pub async fn power_off_breath_up(&mut self) -> Result<(), LedError> {
        self.breath(OFF, DIMMING, IDLE_CHANNEL).await
    }

    /// Ausatmen im ausgeschalteten Zustand: `DIMMING` → `OFF`
    pub async fn power_off_breath_down(&mut self) -> Result<(), LedError> {
        self.breath(DIMMING, OFF, IDLE_CHANNEL).await
    }

    /// Zuletzt erfolgreich geschriebener Duty-Cycle eines Kanals
    pub fn duty(&self, channel: Channel) -> u8 {
        self.duty[channel.index()]
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Gibt Writer und Timer zurück (z.B. für Assertions in Tests)
    pub fn release(self) -> (W, T) {
        (self.writer, self.timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[derive(Default)]
    struct CountingWriter {
        configure_count: usize,
        write_count: usize,
        last: [Option<u8>; 2],
    }

    impl PwmLedWriter for CountingWriter {
        fn configure(&mut self, _channel: Channel) -> Result<(), LedError> {
            self.configure_count += 1;
            Ok(())
        }

        fn write(&mut self, channel: Channel, duty: u8) -> Result<(), LedError> {
            self.write_count += 1;
            self.last[channel.index()] = Some(duty);
            Ok(())
        }
    }

    #[derive(Default)]
    struct NoWait {
        waited_ms: u64,
    }

    impl StepTimer for NoWait {
        async fn wait_ms(&mut self, ms: u64) {
            self.waited_ms += ms;
        }
    }

    #[test]
    fn test_breath_before_setup_is_rejected() {
        let mut led = BreathLed::new(CountingWriter::default(), NoWait::default());
        let result = block_on(led.power_on());
        assert_eq!(result, Err(LedError::NotConfigured));

        let (writer, timer) = led.release();
        assert_eq!(writer.write_count, 0);
        assert_eq!(timer.waited_ms, 0);
    }

    #[test]
    fn test_setup_turns_all_channels_off() {
        let mut led = BreathLed::new(CountingWriter::default(), NoWait::default());
        led.setup().unwrap();
        assert!(led.is_configured());

        let (writer, _) = led.release();
        assert_eq!(writer.configure_count, 2);
        assert_eq!(writer.last, [Some(OFF), Some(OFF)]);
    }

    #[test]
    fn test_power_on_tracks_duty() {
        let mut led = BreathLed::new(CountingWriter::default(), NoWait::default());
        led.setup().unwrap();
        block_on(led.power_on()).unwrap();

        assert_eq!(led.duty(POWER_CHANNEL), BRIGHT);
        assert_eq!(led.duty(IDLE_CHANNEL), OFF);

        let (_, timer) = led.release();
        assert_eq!(timer.waited_ms, 101 * BREATH_DELAY_MS);
    }
}
