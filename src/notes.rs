//! Musical note to period-register encoding.
//!
//! The period register packs a 3-bit octave exponent above a 10-bit mantissa.
//! Lower exponent values mean higher octaves, so the mantissa table is a
//! descending chromatic scale; it starts on B so that the table index lines
//! up with the exponent boundaries.

use crate::error::{Error, Result};
use crate::regs::regs::MANTISSA_BITS;

/// Chromatic mantissa table, starting on B.
const NOTE_MANTISSAS: [u16; 12] = [1001, 887, 780, 679, 583, 493, 408, 327, 252, 180, 112, 49];

fn semitone_from_c(name: &str) -> Option<i32> {
    Some(match name {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        _ => return None,
    })
}

/// Encode a note (semitones from C in the given octave) as a period-register
/// value. Octaves clamp to the representable 0..=7; in the top two octaves
/// the mantissa rounds down so the derived period stays an integer number of
/// samples.
pub fn period_for(note: i32, octave: i32) -> u16 {
    let note = note + 12 * octave + 1; // the mantissa table starts on B
    let (note, octave) = (note.rem_euclid(12), note.div_euclid(12).clamp(0, 7));

    let mut mantissa = NOTE_MANTISSAS[note as usize];
    if octave >= 6 {
        mantissa &= ((-1i32) << (octave - 5)) as u16;
    }
    mantissa | (((7 - octave) as u16) << MANTISSA_BITS)
}

/// Parse a note name with octave, e.g. `"C#4"` or `"Bb3"`.
pub fn parse_note(s: &str) -> Result<(i32, i32)> {
    let split = s
        .find(|c: char| c.is_ascii_digit() || c == '-')
        .unwrap_or(s.len());
    let (name, octave) = s.split_at(split);
    let note = semitone_from_c(name).ok_or_else(|| Error::UnknownNote(s.to_string()))?;
    let octave = octave
        .parse()
        .map_err(|_| Error::UnknownNote(s.to_string()))?;
    Ok((note, octave))
}

/// Encode a named note, e.g. `period_for_name("G#3")`.
pub fn period_for_name(s: &str) -> Result<u16> {
    let (note, octave) = parse_note(s)?;
    Ok(period_for(note, octave))
}
