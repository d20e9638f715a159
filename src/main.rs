use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use petal_patterns::config::{DEMO_FPS, TEMPLE_PETALS, TEMPLE_PETAL_POINTS};
use petal_patterns::{App, PatternKind, PetalModel};

const USAGE: &str = "usage: petal-patterns [life|ripple] [seconds] [--dump <file>]";

struct Args {
    kind: PatternKind,
    seconds: f64,
    dump: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        kind: PatternKind::Ripple,
        seconds: 30.0,
        dump: None,
    };
    let mut positional = 0;
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dump" => {
                args.dump = Some(iter.next().ok_or("--dump needs a file path")?);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if positional == 0 => {
                args.kind = arg.parse()?;
                positional += 1;
            }
            _ if positional == 1 => {
                args.seconds = arg
                    .parse()
                    .map_err(|_| format!("invalid duration `{}`", arg))?;
                positional += 1;
            }
            _ => return Err(format!("unexpected argument `{}`\n{}", arg, USAGE)),
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let model = PetalModel::temple(TEMPLE_PETALS, TEMPLE_PETAL_POINTS)?;
    let mut app = App::new(model, args.kind)?;

    let mut dump = match &args.dump {
        Some(path) => {
            log::info!("Writing raw frames to {}", path);
            Some(BufWriter::new(File::create(path)?))
        }
        None => None,
    };

    let frame_ms = 1000.0 / DEMO_FPS;
    let frames = (args.seconds * DEMO_FPS).round() as u64;
    let report_every = DEMO_FPS as u64;

    log::info!("Running {} for {:.1}s ({} frames)", app.kind(), args.seconds, frames);
    for _ in 0..frames {
        app.frame(frame_ms);

        if let Some(out) = dump.as_mut() {
            out.write_all(app.frame_bytes())?;
        }
        if app.frame_number() % report_every == 0 {
            log::info!(
                "t={:>5.1}s mean {:>5.1} |{}|",
                app.frame_number() as f64 / DEMO_FPS,
                app.mean_brightness(),
                app.petal_preview(0)
            );
        }
    }

    if let Some(mut out) = dump {
        out.flush()?;
    }
    log::info!("Done after {} frames", app.frame_number());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
