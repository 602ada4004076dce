// PWM Writer und Step Timer Implementierungen
//
// Verbinden die Traits aus breath-core mit dem ESP32 LEDC Peripheral
// und dem Embassy Timer.

use breath_core::{Channel, LedError, PwmLedWriter, StepTimer, clamp_duty};
use defmt::debug;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::{Ledc, LowSpeed, timer};

use crate::config::LED_DEBUG;

// ============================================================================
// LEDC PWM Writer
// ============================================================================

/// Real Hardware PWM Writer
///
/// Nutzt zwei Low-Speed Kanäle des ESP32 LEDC Peripherals:
/// - Kanal 0 → GPIO9 (Rot)
/// - Kanal 1 → GPIO8 (Blau)
///
/// Hinweis: Der LEDC-Timer muss 'static sein (Kanäle halten eine Referenz),
/// daher wird er in main() in einer StaticCell abgelegt.
pub struct LedcPwmWriter<'a> {
    timer: &'a timer::Timer<'a, LowSpeed>,
    red: channel::Channel<'a, LowSpeed>,
    blue: channel::Channel<'a, LowSpeed>,
}

impl<'a> LedcPwmWriter<'a> {
    /// Erstellt einen neuen LedcPwmWriter
    ///
    /// Die Kanäle sind danach noch nicht konfiguriert,
    /// das übernimmt `BreathLed::setup()` über `configure()`.
    ///
    /// # Parameter
    /// - `ledc`: LEDC Treiber (globale Clock bereits gesetzt)
    /// - `timer`: konfigurierter Low-Speed Timer
    /// - `gpio9`: Ausgang für den roten Kanal
    /// - `gpio8`: Ausgang für den blauen Kanal
    pub fn new(
        ledc: &'a Ledc<'a>,
        timer: &'a timer::Timer<'a, LowSpeed>,
        gpio9: esp_hal::peripherals::GPIO9<'a>,
        gpio8: esp_hal::peripherals::GPIO8<'a>,
    ) -> Self {
        let red = ledc.channel(channel::Number::Channel0, gpio9);
        let blue = ledc.channel(channel::Number::Channel1, gpio8);

        Self { timer, red, blue }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut channel::Channel<'a, LowSpeed> {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Blue => &mut self.blue,
        }
    }
}

impl<'a> PwmLedWriter for LedcPwmWriter<'a> {
    fn configure(&mut self, channel: Channel) -> Result<(), LedError> {
        let timer = self.timer;
        self.channel_mut(channel)
            .configure(channel::config::Config {
                timer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| LedError::ConfigureFailed(channel))?;

        if LED_DEBUG {
            debug!("Kanal {} konfiguriert", channel);
        }
        Ok(())
    }

    fn write(&mut self, channel: Channel, duty: u8) -> Result<(), LedError> {
        let duty = clamp_duty(duty);
        self.channel_mut(channel)
            .set_duty(duty)
            .map_err(|_| LedError::WriteFailed(channel))?;

        if LED_DEBUG {
            debug!("{} -> {}%", channel, duty);
        }
        Ok(())
    }
}

// ============================================================================
// Embassy Step Timer
// ============================================================================

/// Wartet zwischen Rampen-Schritten über `embassy_time::Timer`
///
/// Async Delay: gibt die CPU während der Wartezeit an andere Tasks zurück.
pub struct EmbassyStepTimer;

impl StepTimer for EmbassyStepTimer {
    async fn wait_ms(&mut self, ms: u64) {
        Timer::after(Duration::from_millis(ms)).await;
    }
}
