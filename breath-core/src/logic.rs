//! Pure Business Logic Functions
//!
//! Rampen-Berechnung ohne Hardware-Dependencies (testbar!)

use crate::types::BREATH_DELAY_MS;

/// Iterator über alle Duty-Werte einer Atem-Rampe
///
/// Liefert jeden ganzzahligen Wert von `start` bis `end` (beide inklusive),
/// aufsteigend wenn `end >= start`, sonst absteigend.
#[derive(Debug, Clone)]
pub struct Ramp {
    next: Option<u8>,
    end: u8,
}

/// Erzeugt die Rampe von `start` nach `end`
///
/// # Beispiele
///
/// ```
/// # use breath_core::ramp;
/// let up: Vec<u8> = ramp(3, 5).collect();
/// assert_eq!(up, [3, 4, 5]);
///
/// let down: Vec<u8> = ramp(5, 3).collect();
/// assert_eq!(down, [5, 4, 3]);
/// ```
pub fn ramp(start: u8, end: u8) -> Ramp {
    Ramp {
        next: Some(start),
        end,
    }
}

impl Iterator for Ramp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current + 1)
        } else if current > self.end {
            Some(current - 1)
        } else {
            None // Endwert erreicht
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.next {
            Some(current) => usize::from(current.abs_diff(self.end)) + 1,
            None => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Ramp {}

impl core::iter::FusedIterator for Ramp {}

/// Gesamtdauer einer Atem-Rampe in Millisekunden
///
/// Nach jedem geschriebenen Wert wird `BREATH_DELAY_MS` gewartet.
pub fn ramp_duration_ms(start: u8, end: u8) -> u64 {
    ramp(start, end).len() as u64 * BREATH_DELAY_MS
}
