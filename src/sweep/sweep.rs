//! Sweep engine: per-sample stepping of one selected channel parameter.

use log::trace;

use crate::pipeline::pipeline::{CoreState, counter_edge_mask};
use crate::regs::regs::{NUM_CHANNELS, OCT_COUNTER_BITS, Reg, RegFile};

/// Step one swept parameter. Runs once per sample, before the counter
/// increments.
///
/// Period sweeps on even selector values; the odd values rotate through the
/// second parameter group (pwm offset, amplitude, the two slopes) at a
/// quarter of the rate, with a wider edge stride to keep the per-parameter
/// rates comparable. Amplitude sweeps run toward a register-encoded target
/// and park there; the slope direction sub-field can invert or disable one
/// slope register's sweep. Values clamp at the field bounds instead of
/// wrapping.
pub fn sweep(core: &mut CoreState, regs: &mut RegFile) {
    let channel = (core.oct_counter as usize) & (NUM_CHANNELS - 1);
    let selector = (core.oct_counter >> 2) & 7;

    let chregs = &regs.channels[channel];
    let (target, sweep, stride) = if selector & 1 == 0 {
        (Reg::Period, chregs.get(Reg::SweepPa) >> 8, 8)
    } else {
        match (selector >> 1) & 3 {
            0 => (Reg::PwmOffset, chregs.get(Reg::SweepWs) >> 8, 32),
            1 => (Reg::Amp, chregs.get(Reg::SweepPa) & 255, 32),
            2 => (Reg::Slope0, chregs.get(Reg::SweepWs) & 255, 32),
            _ => (Reg::Slope1, chregs.get(Reg::SweepWs) & 255, 32),
        }
    };
    let sweep = sweep as u32;

    let rate = sweep & 15;
    let mut sign = sweep & 16 != 0;
    let mut enable = match rate {
        0 => false,
        1 => true,
        _ => counter_edge_mask(core.oct_counter, stride) >> rate & 1 != 0,
    };

    let value = chregs.get(target) as i32;

    match target {
        Reg::Amp => {
            // Step toward the encoded target level and stop on it.
            let amp_target = (((sweep >> 4) & 7) * 9) as i32;
            sign = value > amp_target;
            if value == amp_target {
                enable = false;
            }
        }
        Reg::Slope0 | Reg::Slope1 => {
            let dir = (sweep >> 5) & 3;
            if dir == 0 && target == Reg::Slope1 {
                sign = !sign;
            }
            if dir == 2 && target == Reg::Slope0 {
                enable = false;
            }
            if dir == 1 && target == Reg::Slope1 {
                enable = false;
            }
        }
        _ => {}
    }

    // Clamp at the ends instead of wrapping.
    if sign && value == 0 {
        enable = false;
    }
    if !sign && value == target.mask() as i32 {
        enable = false;
    }

    let value = value + if sign { -1 } else { 1 };
    // The sweep borrows the pipeline adder, so the stepped value lands in the
    // accumulator whether or not the write goes through.
    core.acc = value;
    if enable {
        trace!("sweep: channel {channel} {target:?} -> {value}");
        regs.channels[channel].set(target, value as u16);
    }
}

/// Advance the free-running octave counter; wraps at 24 bits. Read-only to
/// every other stage.
pub fn tick_counter(core: &mut CoreState) {
    core.oct_counter = core.oct_counter.wrapping_add(1) & ((1 << OCT_COUNTER_BITS) - 1);
}
