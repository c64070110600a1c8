//! Synth model: owns the register bank and core state, runs the pipeline.

use crate::pipeline::pipeline::{self, CoreState, Term, sign_extend, term_order};
use crate::regs::regs::{BITS, NUM_CHANNELS, OUT_ACC_FRAC_BITS, Reg, RegFile};
use crate::sweep::sweep;

/// The synth model: register bank plus core pipeline state.
///
/// `advance_term` runs the oscillator→detune→wave-shape→slope→accumulate
/// chain for one (channel, subchannel) slot; `advance_sweep` runs the sweep
/// engine and bumps the octave counter; `advance_sample` drives one whole
/// sample in the hardware's term order. Stepping from identical state is
/// fully deterministic, so a harness can replay the same register writes into
/// the model and the real pipeline and compare after every stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PwlSynth {
    pub regs: RegFile,
    pub core: CoreState,
}

impl PwlSynth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every register and all core state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Width-masked write to one channel register. The channel index decodes
    /// like the hardware's two address bits. No core state is touched.
    pub fn set_register(&mut self, channel: usize, reg: Reg, value: u16) {
        self.regs.channels[channel & (NUM_CHANNELS - 1)].set(reg, value);
    }

    pub fn register(&self, channel: usize, reg: Reg) -> u16 {
        self.regs.channels[channel & (NUM_CHANNELS - 1)].get(reg)
    }

    /// Masked write of the 2-bit global configuration.
    pub fn set_config(&mut self, bits: u16) {
        self.regs.set_config(bits);
    }

    /// Run the pipeline stages for one term.
    ///
    /// The oscillator steps once per channel, on the primary subchannel; the
    /// detune stage always consumes the phase from before that step, so the
    /// primary subchannel reads the pre-update phase and the secondary the
    /// updated one. The common-saturate store slot skips accumulation (its
    /// result is parked in the output accumulator by the slope stage).
    pub fn advance_term(&mut self, term_index: u8) {
        let term = Term(term_index & (Term::COUNT - 1));
        let old_phase = self.regs.channels[term.channel()].phase();

        if term.subchannel() == 0 {
            pipeline::oscillator(&mut self.core, &mut self.regs, term);
        }
        pipeline::detune(&mut self.core, &self.regs, term, old_phase);
        pipeline::wave_shape(&mut self.core, &self.regs, term);
        pipeline::slope(&mut self.core, &self.regs, term);

        if pipeline::common_sat_add(&self.regs, term) {
            pipeline::add_common_sat(&mut self.core);
        }
        if !pipeline::common_sat_store(&self.regs, term) {
            pipeline::accumulate(&mut self.core, &self.regs, term);
        }
    }

    /// Run the sweep engine, then advance the octave counter. Sweep writes
    /// become visible starting with the next sample.
    pub fn advance_sweep(&mut self) {
        sweep::sweep(&mut self.core, &mut self.regs);
        sweep::tick_counter(&mut self.core);
    }

    /// One full sample: every term in hardware order, then the sweep.
    pub fn advance_sample(&mut self) {
        for slot in 0..Term::COUNT {
            self.advance_term(term_order(self.regs.cfg.stereo_en, slot).0);
        }
        self.advance_sweep();
    }

    // Read accessors for the comparable core values.

    /// Working accumulator in its 13-bit signed view.
    pub fn acc(&self) -> i32 {
        sign_extend(self.core.acc, BITS + 1)
    }

    /// Working accumulator's low sample bits as a signed value.
    pub fn acc12(&self) -> i32 {
        sign_extend(self.core.acc, BITS)
    }

    /// Output accumulator (sample bits plus fraction), sign-extended.
    pub fn out_acc(&self) -> i32 {
        sign_extend(self.core.out_acc, BITS)
    }

    /// Stereo alternate-fraction latch.
    pub fn out_acc_alt_frac(&self) -> i32 {
        self.core.out_acc_alt_frac & ((1 << OUT_ACC_FRAC_BITS) - 1)
    }

    /// Slope-stage comparison predicate latch.
    pub fn pred(&self) -> bool {
        self.core.pred
    }

    /// Triangle-half latch from the wave shaper.
    pub fn part(&self) -> bool {
        self.core.part
    }

    /// High bits of the 18-bit noise register.
    pub fn lfsr_extra(&self) -> u8 {
        self.core.lfsr_extra
    }

    pub fn oct_counter(&self) -> u32 {
        self.core.oct_counter
    }

    pub fn last_osc_wrapped(&self) -> bool {
        self.core.last_osc_wrapped
    }
}
