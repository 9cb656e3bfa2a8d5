use anyhow::Result;
use filterscope::filterdsp::Band;
use filterscope::filterdsp::DomainError;
use filterscope::filterdsp::TransferFunction;
use filterscope::filterdsp::butter;
use filterscope::filterdsp::filtfilt;
use filterscope::filterdsp::lfilter;
use std::f64::consts::PI;

fn argmax(x: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in x.iter().enumerate() {
        if *v > x[best] {
            best = i;
        }
    }
    best
}

#[test]
fn zero_phase_peaks_align_and_causal_lags() -> Result<()> {
    let tf = butter(4, Band::Lowpass(0.25), None)?;
    // period of 50 samples, peaks at n = 10 + 50k
    let x: Vec<f64> = (0..500)
        .map(|n| (2.0 * PI * 0.02 * n as f64 + 0.1 * PI).sin())
        .collect();
    let zero_phase = filtfilt(&tf, &x)?;
    let causal = lfilter(&tf, &x);
    assert_eq!(zero_phase.len(), x.len());
    assert_eq!(causal.len(), x.len());

    let window = 250..300;
    let peak = argmax(&x[window.clone()]);
    assert_eq!(argmax(&zero_phase[window.clone()]), peak);
    assert!(argmax(&causal[window]) > peak);
    Ok(())
}

#[test]
fn short_signals_are_rejected() -> Result<()> {
    let tf = TransferFunction::new([0.5, 0.5], [1.0, -0.2])?;
    let err = filtfilt(&tf, &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, DomainError::SignalTooShort { len: 3, pad_len: 6 });
    Ok(())
}

#[test]
fn causal_matches_recurrence() -> Result<()> {
    let tf = TransferFunction::new([2.0, 1.0], [2.0, -1.0])?;
    let y = lfilter(&tf, &[1.0, 0.0, 0.0, 0.0]);
    // y[n] = x[n] + 0.5 x[n-1] + 0.5 y[n-1]
    assert_eq!(y, vec![1.0, 1.0, 0.5, 0.25]);
    Ok(())
}
