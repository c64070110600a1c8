use crate::regs::regs::{
    MODE_FLAG_3X, MODE_FLAG_DETUNE_FIFTH, MODE_FLAG_NOISE, MODE_FLAG_OSC_SYNC_EN,
    MODE_FLAG_OSC_SYNC_SOFT, MODE_FLAG_PWL_OSC, OscSync, Reg, RegFile, Waveform,
};

#[test]
fn writes_mask_to_the_declared_width() {
    let mut regs = RegFile::default();
    let ch = &mut regs.channels[0];

    ch.set(Reg::Period, 0xffff);
    assert_eq!(ch.get(Reg::Period), 0x1fff);
    ch.set(Reg::Amp, 0xffff);
    assert_eq!(ch.get(Reg::Amp), 0x3f);
    ch.set(Reg::Slope0, 0xffff);
    assert_eq!(ch.get(Reg::Slope0), 0xff);
    ch.set(Reg::PwmOffset, 0x1ff);
    assert_eq!(ch.get(Reg::PwmOffset), 0xff);
    ch.set(Reg::SweepPa, 0xffff);
    assert_eq!(ch.get(Reg::SweepPa), 0xffff);
    ch.set(Reg::Phase, 0xffff);
    assert_eq!(ch.get(Reg::Phase), 0xfff);
}

#[test]
fn mode_decodes_waveform_and_sync_once_per_write() {
    let mut regs = RegFile::default();
    let ch = &mut regs.channels[0];

    ch.set(Reg::Mode, 0);
    assert_eq!(ch.mode.waveform, Waveform::Triangle);
    assert_eq!(ch.mode.osc_sync, OscSync::Off);

    ch.set(Reg::Mode, MODE_FLAG_NOISE);
    assert_eq!(ch.mode.waveform, Waveform::Noise);
    ch.set(Reg::Mode, MODE_FLAG_PWL_OSC);
    assert_eq!(ch.mode.waveform, Waveform::PwlOsc);
    ch.set(Reg::Mode, MODE_FLAG_NOISE | MODE_FLAG_PWL_OSC);
    assert_eq!(ch.mode.waveform, Waveform::Folded);

    ch.set(Reg::Mode, MODE_FLAG_OSC_SYNC_EN);
    assert_eq!(ch.mode.osc_sync, OscSync::Hard);
    assert!(ch.mode.sync_active());
    ch.set(Reg::Mode, MODE_FLAG_OSC_SYNC_EN | MODE_FLAG_OSC_SYNC_SOFT);
    assert_eq!(ch.mode.osc_sync, OscSync::Soft);
    ch.set(Reg::Mode, MODE_FLAG_OSC_SYNC_SOFT);
    assert_eq!(ch.mode.osc_sync, OscSync::FourBit);
    assert!(!ch.mode.sync_active());
}

#[test]
fn mode_fields_split_the_multiplier_bits() {
    let mut regs = RegFile::default();
    let ch = &mut regs.channels[0];

    ch.set(Reg::Mode, 5 | (6 << 4));
    assert_eq!(ch.mode.detune_exp, 5);
    assert_eq!(ch.mode.freq_mult, 6);
    assert!(!ch.mode.freq_3x());
    assert_eq!(ch.mode.octave_shift(), 3);
    assert_eq!(ch.mode.stereo_pos(), 6);

    ch.set(Reg::Mode, 7 << 4);
    assert!(ch.mode.freq_3x());
    assert_eq!(ch.mode.octave_shift(), 3);
}

#[test]
fn conflicting_detune_fifth_clears_on_write() {
    let mut regs = RegFile::default();
    let ch = &mut regs.channels[0];

    // Max detune exponent: the fifth would overflow the shift range.
    ch.set(Reg::Mode, 7 | MODE_FLAG_DETUNE_FIFTH);
    assert!(!ch.mode.detune_fifth);
    assert_eq!(ch.get(Reg::Mode) & MODE_FLAG_DETUNE_FIFTH, 0);

    // The 3x multiplier path owns the primary subchannel.
    ch.set(Reg::Mode, MODE_FLAG_3X | MODE_FLAG_DETUNE_FIFTH);
    assert!(!ch.mode.detune_fifth);

    ch.set(Reg::Mode, 5 | MODE_FLAG_DETUNE_FIFTH);
    assert!(ch.mode.detune_fifth);
}

#[test]
fn config_decodes_the_two_flags() {
    let mut regs = RegFile::default();
    regs.set_config(3);
    assert!(regs.cfg.stereo_en);
    assert!(regs.cfg.stereo_pos_en);
    regs.set_config(0xfffc);
    assert!(!regs.cfg.stereo_en);
    assert!(!regs.cfg.stereo_pos_en);
}

#[test]
fn raw_register_indices_convert_fallibly() {
    assert_eq!(Reg::try_from(0).unwrap(), Reg::Period);
    assert_eq!(Reg::try_from(8).unwrap(), Reg::Phase);
    assert!(Reg::try_from(9).is_err());
}
