//! Pwlsim: a bit-exact reference model of a 4-channel piecewise-linear
//! wavetable/noise synth peripheral.
//!
//! Recomputes, term for term, the fixed-point arithmetic of the synth's
//! pipelined datapath from the same register state, so a verification harness
//! can step the real device and the model side by side and compare every
//! pipeline stage. The model performs no I/O and produces no audio; it
//! predicts state evolution only.
//!
//! ## Modules
//!
//! - **regs** – per-channel register file: field widths, masked writes,
//!   write-time mode and config decode
//! - **pipeline** – per-term datapath stages: oscillator, detune, wave
//!   shaping, slope, accumulation; term-order mapping
//! - **sweep** – parameter sweep engine, driven by the 24-bit octave counter
//! - **synth** – the model top: core state, per-term and per-sample stepping,
//!   read accessors
//! - **notes** – musical note to period-register encoding
//!
//! All arithmetic is closed under fixed-width wraparound or explicit
//! saturation; given identical register and core state, stepping is fully
//! deterministic.

pub mod error;
pub mod notes;
pub mod pipeline;
pub mod regs;
pub mod sweep;
pub mod synth;
