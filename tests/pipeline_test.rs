//! Integration tests for the synthesis -> FFT pipeline
//!
//! Exercises the public entry point end to end: parameter dispatch, grid
//! construction, zero-padded transform, centered frequency axis, rounding,
//! and the store collaborator contract.

use rand::Rng;
use spectrogen::{
    compute, compute_and_store, waveform, MemoryStore, PipelineError, ResultStore, SignalParams,
    SignalShape,
};

fn square_pulse_params() -> SignalParams {
    SignalParams {
        a: -20.0,
        b: 20.0,
        shape: SignalShape::Square,
        amplitude: 1.0,
        frequency: 4.0,
        phase: 0.0,
        interval: 0.01,
        freqrange: 4.0,
    }
}

#[test]
fn output_length_is_padded_sample_count() {
    for shape in SignalShape::ALL {
        let params = SignalParams {
            a: -3.0,
            b: 7.0,
            shape,
            interval: 0.05,
            ..SignalParams::default()
        };
        let rows = compute(&params).unwrap();
        let total = waveform::total_samples(params.a, params.b, params.interval);
        assert_eq!(rows.len(), total.next_power_of_two(), "shape {shape}");
    }
}

#[test]
fn square_pulse_matches_reference_scenario() {
    let rows = compute(&square_pulse_params()).unwrap();

    // 4001 samples pad to 4096 bins
    assert_eq!(rows.len(), 4096);

    // time domain: 1 inside |t| < P/2 + T/2 = 2.005, 0 outside
    for row in rows.iter().filter(|r| r.input.is_finite()) {
        let expected = if row.input.abs() < 2.005 { 1.0 } else { 0.0 };
        assert_eq!(row.re_signal, expected, "t = {}", row.input);
    }

    // spectrum peaks at the zero-frequency bin
    let peak = rows
        .iter()
        .max_by(|x, y| x.abs_fft.partial_cmp(&y.abs_fft).unwrap())
        .unwrap();
    assert_eq!(peak.freq, 0.0);

    // sinc-like main lobe: well off-center bins carry much less energy
    let off_center = rows
        .iter()
        .filter(|r| r.freq.abs() > 2.0)
        .map(|r| r.abs_fft)
        .fold(0.0f64, f64::max);
    assert!(off_center < peak.abs_fft / 4.0);
}

#[test]
fn sign_shape_ignores_amplitude_frequency_phase() {
    let rows = compute(&SignalParams {
        a: -10.0,
        b: 10.0,
        shape: SignalShape::Sign,
        amplitude: 123.4,
        frequency: -7.0,
        phase: 0.3,
        interval: 0.1,
        ..SignalParams::default()
    })
    .unwrap();

    for row in rows.iter().filter(|r| r.re_signal.is_finite()) {
        assert!(
            row.re_signal == -1.0 || row.re_signal == 0.0 || row.re_signal == 1.0,
            "unexpected sign value {}",
            row.re_signal
        );
    }
}

#[test]
fn invalid_window_fails_without_touching_the_store() {
    let mut store = MemoryStore::new();
    let err = compute_and_store(
        &SignalParams {
            a: 5.0,
            b: 2.0,
            ..SignalParams::default()
        },
        &mut store,
    )
    .unwrap_err();

    assert_eq!(err, PipelineError::InvalidWindow { a: 5.0, b: 2.0 });
    assert!(!store.has_stored_data());
    assert!(store.load_all().is_empty());
}

#[test]
fn sinc_origin_sample_is_the_amplitude_limit() {
    let rows = compute(&SignalParams {
        amplitude: 2.5,
        ..SignalParams::default() // sinc over [-20, 20], phase 0
    })
    .unwrap();

    let origin = rows
        .iter()
        .find(|r| r.input == 0.0)
        .expect("grid contains t = 0");
    assert_eq!(origin.re_signal, 2.5);
}

#[test]
fn exact_power_of_two_grid_needs_no_padding() {
    // 64 samples over [0, 63] at T = 1
    let rows = compute(&SignalParams {
        a: 0.0,
        b: 63.0,
        shape: SignalShape::Cos,
        interval: 1.0,
        ..SignalParams::default()
    })
    .unwrap();

    assert_eq!(rows.len(), 64);
    assert!(rows
        .iter()
        .all(|r| r.input.is_finite() && r.re_signal.is_finite()));

    // most negative bin is -1/(2T), axis strictly increasing
    assert_eq!(rows[0].freq, -0.5);
    for pair in rows.windows(2) {
        assert!(pair[0].freq < pair[1].freq);
    }
}

#[test]
fn repeated_computation_is_bit_identical() {
    let mut rng = rand::rng();
    for shape in SignalShape::ALL {
        let params = SignalParams {
            a: -rng.random_range(1.0..10.0),
            b: rng.random_range(1.0..10.0),
            shape,
            amplitude: rng.random_range(0.1..5.0),
            frequency: rng.random_range(0.1..4.0),
            phase: rng.random_range(-2.0..2.0),
            interval: rng.random_range(0.01..0.2),
            ..SignalParams::default()
        };

        let first = compute(&params).unwrap();
        let second = compute(&params).unwrap();
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.freq.to_bits(), y.freq.to_bits());
            assert_eq!(x.re_fft.to_bits(), y.re_fft.to_bits());
            assert_eq!(x.im_fft.to_bits(), y.im_fft.to_bits());
            assert_eq!(x.abs_fft.to_bits(), y.abs_fft.to_bits());
        }
    }
}

#[test]
fn magnitude_column_is_coherent_with_parts() {
    let rows = compute(&SignalParams {
        shape: SignalShape::Triangle,
        frequency: 3.0,
        ..SignalParams::default()
    })
    .unwrap();

    for row in &rows {
        let recomputed = row.re_fft.hypot(row.im_fft);
        assert!(
            (row.abs_fft - recomputed).abs() < 2e-5,
            "freq {}: abs {} vs hypot {}",
            row.freq,
            row.abs_fft,
            recomputed
        );
    }
}

#[test]
fn render_square_pulse_charts() -> Result<(), Box<dyn std::error::Error>> {
    use plotters::prelude::*;

    let params = square_pulse_params();
    let rows = compute(&params)?;

    std::fs::create_dir_all("plots")?;
    let root =
        BitMapBackend::new("plots/square_pulse.png", (1200, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let (signal_area, spectrum_area) = root.split_horizontally(600);

    let mut signal_chart = ChartBuilder::on(&signal_area)
        .caption("Square pulse", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(params.a..params.b, -0.1f64..1.1f64)?;
    signal_chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Amplitude")
        .draw()?;
    signal_chart.draw_series(LineSeries::new(
        rows.iter()
            .filter(|r| r.input.is_finite())
            .map(|r| (r.input, r.re_signal)),
        &BLUE,
    ))?;

    let peak = rows.iter().map(|r| r.abs_fft).fold(0.0f64, f64::max);
    let mut spectrum_chart = ChartBuilder::on(&spectrum_area)
        .caption("Spectrum magnitude", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(-params.freqrange..params.freqrange, 0.0f64..peak * 1.1)?;
    spectrum_chart
        .configure_mesh()
        .x_desc("Frequency")
        .y_desc("|FFT|")
        .draw()?;
    spectrum_chart.draw_series(LineSeries::new(
        rows.iter()
            .filter(|r| r.freq.abs() <= params.freqrange)
            .map(|r| (r.freq, r.abs_fft)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}
