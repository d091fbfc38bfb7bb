use std::env;
use std::process;

use spectrogen::{pipeline, tracing_init, FftDataRow, SignalParams, SignalShape};

fn parse_f64(raw: &str, name: &str) -> f64 {
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("{} must be a number, got '{}'", name, raw);
            process::exit(1);
        }
    }
}

fn main() {
    tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 8 {
        eprintln!(
            "Usage: {} <shape> <a> <b> <amplitude> <frequency> <phase> <interval> [freqrange]",
            args[0]
        );
        eprintln!("Shapes, with the role of <frequency> and <phase> for each:");
        for shape in SignalShape::ALL {
            eprintln!(
                "  {:<9} {:<16} {}",
                shape.name(),
                shape.frequency_label(),
                shape.phase_label()
            );
        }
        process::exit(1);
    }

    let shape: SignalShape = match args[1].parse() {
        Ok(shape) => shape,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let defaults = SignalParams::default();
    let params = SignalParams {
        a: parse_f64(&args[2], "a"),
        b: parse_f64(&args[3], "b"),
        shape,
        amplitude: parse_f64(&args[4], "amplitude"),
        frequency: parse_f64(&args[5], "frequency"),
        phase: parse_f64(&args[6], "phase"),
        interval: parse_f64(&args[7], "interval"),
        freqrange: args
            .get(8)
            .map(|raw| parse_f64(raw, "freqrange"))
            .unwrap_or(defaults.freqrange),
    };

    if !(params.interval > 0.0) {
        eprintln!("interval must be a positive number, got {}", params.interval);
        process::exit(1);
    }

    let rows = match pipeline::compute(&params) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!(
        "{} waveform, {} bins ({} samples before padding)",
        shape.waveform_label(),
        rows.len(),
        rows.iter().filter(|r| r.input.is_finite()).count()
    );

    println!();
    println!("Signal ({} / {}):", FftDataRow::COLUMNS[4], FftDataRow::COLUMNS[5]);
    for row in rows.iter().filter(|r| r.input.is_finite()) {
        println!("{:>12.5} {:>12.5}", row.input, row.re_signal);
    }

    println!();
    println!(
        "Spectrum, |{}| <= {} ({} / {} / {} / {}):",
        FftDataRow::COLUMNS[0],
        params.freqrange,
        FftDataRow::COLUMNS[0],
        FftDataRow::COLUMNS[1],
        FftDataRow::COLUMNS[2],
        FftDataRow::COLUMNS[3]
    );
    for row in rows.iter().filter(|r| r.freq.abs() <= params.freqrange) {
        println!(
            "{:>10.2} {:>12.5} {:>12.5} {:>12.5}",
            row.freq, row.re_fft, row.im_fft, row.abs_fft
        );
    }
}
