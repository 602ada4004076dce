// LED Breath Task - Steuert den LED-Ring über das LEDC Peripheral
use breath_core::{BreathLed, LedError, PwmLedWriter, StepTimer};
use defmt::{error, info};
use embassy_time::{Duration, Timer};

use crate::config::{IDLE_BREATH_PAUSE_MS, LED_RETRY_DELAY_SECS, POWER_ON_HOLD_SECS};
use crate::hal::{EmbassyStepTimer, LedcPwmWriter};

/// Ablauf des LED-Rings nach dem Booten
///
/// 1. Ausgänge einrichten (`setup`)
/// 2. Einschalt-Fading, `POWER_ON_HOLD_SECS` hell halten
/// 3. Ausschalt-Fading
/// 4. Endlos im ausgeschalteten Zustand atmen
///
/// Kehrt nur bei einem LED-Fehler zurück.
async fn breath_sequence<W: PwmLedWriter, T: StepTimer>(
    led: &mut BreathLed<W, T>,
) -> Result<(), LedError> {
    led.setup()?;
    info!("LED-Ring eingerichtet");

    led.power_on().await?;
    info!("Power on");
    Timer::after(Duration::from_secs(POWER_ON_HOLD_SECS)).await;

    led.power_off().await?;
    info!("Power off, starte Atmen");

    loop {
        led.power_off_breath_up().await?;
        led.power_off_breath_down().await?;
        Timer::after(Duration::from_millis(IDLE_BREATH_PAUSE_MS)).await;
    }
}

/// LED Breath Logic - generisch über Writer und Timer
///
/// Bei einem Fehler wird geloggt und der Ablauf nach
/// `LED_RETRY_DELAY_SECS` neu gestartet.
pub async fn led_breath_logic<W: PwmLedWriter, T: StepTimer>(mut led: BreathLed<W, T>) -> ! {
    loop {
        if let Err(e) = breath_sequence(&mut led).await {
            error!("LED-Ablauf fehlgeschlagen: {}", e);
        }
        Timer::after(Duration::from_secs(LED_RETRY_DELAY_SECS)).await;
    }
}

/// LED Breath Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `writer`: LEDC PWM Writer für GPIO9 (Rot) und GPIO8 (Blau)
#[embassy_executor::task]
pub async fn led_breath_task(writer: LedcPwmWriter<'static>) {
    let led = BreathLed::new(writer, EmbassyStepTimer);
    led_breath_logic(led).await;
}
