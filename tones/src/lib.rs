#![cfg_attr(not(test), no_std)]

use defmt::Format;

/// Microseconds in one second.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Fraction of the period the buzzer pin stays high.
pub const DUTY_CYCLE: f64 = 0.5;

/// A named pitch, in Hz.
#[derive(Format, Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub name: &'static str,
    pub frequency: f64,
}

impl Note {
    pub const fn new(name: &'static str, frequency: f64) -> Self {
        Self { name, frequency }
    }

    /// Time between pin toggles to play this note, truncated to whole microseconds.
    pub fn half_period_micros(&self) -> u32 {
        half_period_micros(self.frequency)
    }
}

pub const C3: Note = Note::new("C3", 130.81);
pub const D3: Note = Note::new("D3", 146.83);
pub const E3: Note = Note::new("E3", 164.81);
pub const F3: Note = Note::new("F3", 174.61);
pub const G3: Note = Note::new("G3", 196.00);
pub const A3: Note = Note::new("A3", 220.00);
pub const B3: Note = Note::new("B3", 246.94);
pub const C4: Note = Note::new("C4", 261.63);

/// The C major scale from C3 up to C4, in table order.
pub const SCALE: [Note; 8] = [C3, D3, E3, F3, G3, A3, B3, C4];

/// `frequency` must be positive. The cast truncates toward zero.
pub fn half_period_micros(frequency: f64) -> u32 {
    (MICROS_PER_SECOND * DUTY_CYCLE / frequency) as u32
}

pub fn half_periods<const N: usize>(notes: &[Note; N]) -> [u32; N] {
    notes.map(|note| note.half_period_micros())
}
