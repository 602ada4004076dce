// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Hardware-Traits aus breath-core
// für das ESP32-C6 (LEDC PWM + Embassy Timer).

pub mod pwm_writer;

pub use pwm_writer::{EmbassyStepTimer, LedcPwmWriter};
