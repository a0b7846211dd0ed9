//! FFT demo: run one transform over a synthetic signal and print the spectrum

use std::fmt::Display;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use num_complex::Complex;

use fft_workbench::signal::{fill_demo_complex, fill_demo_real};
use fft_workbench::spectrum::{bin_to_frequency, find_peak, normalize, squelch, Magnitude};
use fft_workbench::transform::{
    as_pairs, Direction, Element, Layout, PlanningEffort, TransformBuffer, TransformError,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Effort {
    Estimate,
    Measure,
    Exhaustive,
}

impl From<Effort> for PlanningEffort {
    fn from(effort: Effort) -> Self {
        match effort {
            Effort::Estimate => PlanningEffort::Estimate,
            Effort::Measure => PlanningEffort::Measure,
            Effort::Exhaustive => PlanningEffort::Exhaustive,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Complex to complex
    C2c,
    /// Real to complex half spectrum
    R2c,
    /// Complex to complex, then real to complex
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "fft-demo", version, about = "Run one FFT over a demo signal and print the spectrum")]
struct Args {
    /// Transform length as a power of two
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=24))]
    log2_len: u32,

    /// Planning effort
    #[arg(long, value_enum, default_value_t = Effort::Measure)]
    effort: Effort,

    /// Which transforms to run
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Squelch threshold relative to the normalized maximum
    #[arg(long, default_value_t = 0.1)]
    squelch_ratio: f64,
}

/// Build a transform, fill its input and time one execution.
fn transform<I, O>(
    len: usize,
    effort: PlanningEffort,
    fill: impl FnOnce(&mut [I]),
) -> Result<TransformBuffer<I, O>, TransformError>
where
    I: Layout<O>,
    O: Element,
{
    let mut fft = TransformBuffer::<I, O>::new(len, Direction::Forward, effort)?;
    fill(fft.input_mut());

    let start = Instant::now();
    fft.execute();
    let elapsed = start.elapsed().as_secs_f64();

    println!("FFT {} took {} seconds to execute.", fft.len(), elapsed);
    debug!("{} plan: {}", fft.layout(), fft.strategy());
    Ok(fft)
}

fn print_values<O: Display>(values: &[O]) {
    let line: Vec<String> = values.iter().map(|v| format!("{:.3}", v)).collect();
    println!("{}", line.join(" "));
}

fn print_peak<O: Magnitude>(values: &[O], len: usize) -> Option<f64> {
    let peak = find_peak(values)?;
    println!("{} @ {}", peak.magnitude, peak.index);
    info!("peak at {:.4} π rad/sample", bin_to_frequency(peak.index, len));
    Some(peak.magnitude)
}

/// Normalize, print, squelch and print again.
fn report<O: Magnitude + Display>(out: &mut [O], len: usize, squelch_ratio: f64) {
    normalize(out);
    print_values(out);
    let Some(max) = print_peak(out, len) else {
        return;
    };

    squelch(out, max * squelch_ratio);
    print_values(out);
    print_peak(out, len);
}

fn run(args: &Args) -> Result<(), TransformError> {
    let len = 1usize << args.log2_len;
    let effort = PlanningEffort::from(args.effort);

    if args.mode != Mode::R2c {
        let mut fft: TransformBuffer<Complex<f64>, Complex<f64>> = transform(len, effort, fill_demo_complex)?;
        debug!("raw output: {:?}", as_pairs(fft.output()));
        report(fft.output_mut(), len, args.squelch_ratio);
    }

    if args.mode != Mode::C2c {
        let mut fft: TransformBuffer<f64, Complex<f64>> = transform(len, effort, fill_demo_real)?;
        report(fft.output_mut(), len, args.squelch_ratio);
    }

    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
