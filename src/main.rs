//! Headless day/night cycle driver
//!
//! Runs a [`DayNightCycle`] without any renderer attached, logging the clock
//! text and sun angle as it goes.
//!
//! Usage:
//!     daycycle [OPTIONS]
//!
//! Options:
//!     -c, --config <PATH>     Load settings from a JSON file
//!     -n, --ticks <N>         Number of ticks to run (default: 600)
//!     --dt <SECONDS>          Real seconds per tick (default: 0.1)
//!     --rate <X>              Simulated seconds per real second
//!     --start <HOUR>          Start hour
//!     --sunrise <HOUR>        Sunrise hour, 0-24
//!     --sunset <HOUR>         Sunset hour, 0-24
//!     --realtime              Measure dt from the wall clock, sleeping between ticks
//!     --json                  Print every tick's state as a JSON line
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use daycycle::core::{logging, time::FrameTimer};
use daycycle::cycle::{CycleConfig, DayNightCycle, LogDisplay, LogOrientation};

fn print_help() {
    eprintln!("daycycle - Headless day/night cycle driver");
    eprintln!();
    eprintln!("Usage: daycycle [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -c, --config <PATH>     Load settings from a JSON file");
    eprintln!("    -n, --ticks <N>         Number of ticks to run (default: 600)");
    eprintln!("    --dt <SECONDS>          Real seconds per tick (default: 0.1)");
    eprintln!("    --rate <X>              Simulated seconds per real second");
    eprintln!("    --start <HOUR>          Start hour");
    eprintln!("    --sunrise <HOUR>        Sunrise hour, 0-24");
    eprintln!("    --sunset <HOUR>         Sunset hour, 0-24");
    eprintln!("    --realtime              Measure dt from the wall clock");
    eprintln!("    --json                  Print every tick's state as a JSON line");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    daycycle --rate 3600 --dt 1 -n 48 --sunrise 7 --sunset 19");
    eprintln!("    RUST_LOG=debug daycycle -c ./cycle.json --realtime");
}

#[derive(Debug)]
struct Args {
    config_path: Option<PathBuf>,
    ticks: u64,
    dt: f64,
    rate: Option<f64>,
    start: Option<f64>,
    sunrise: Option<f64>,
    sunset: Option<f64>,
    realtime: bool,
    json: bool,
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i)
        .ok_or_else(|| format!("Missing value for {flag}"))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {flag}: {raw}"))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut parsed = Args {
        config_path: None,
        ticks: 600,
        dt: 0.1,
        rate: None,
        start: None,
        sunrise: None,
        sunset: None,
        realtime: false,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                i += 1;
                parsed.config_path = Some(PathBuf::from(parse_value::<String>(&args, i, "--config")?));
            }
            "-n" | "--ticks" => {
                i += 1;
                parsed.ticks = parse_value(&args, i, "--ticks")?;
            }
            "--dt" => {
                i += 1;
                parsed.dt = parse_value(&args, i, "--dt")?;
                if !(parsed.dt.is_finite() && parsed.dt >= 0.0) {
                    return Err("--dt must be a non-negative number".to_string());
                }
            }
            "--rate" => {
                i += 1;
                parsed.rate = Some(parse_value(&args, i, "--rate")?);
            }
            "--start" => {
                i += 1;
                parsed.start = Some(parse_value(&args, i, "--start")?);
            }
            "--sunrise" => {
                i += 1;
                parsed.sunrise = Some(parse_value(&args, i, "--sunrise")?);
            }
            "--sunset" => {
                i += 1;
                parsed.sunset = Some(parse_value(&args, i, "--sunset")?);
            }
            "--realtime" => parsed.realtime = true,
            "--json" => parsed.json = true,
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 1;
    }

    Ok(parsed)
}

fn build_config(args: &Args) -> daycycle::core::Result<CycleConfig> {
    let mut config = match &args.config_path {
        Some(path) => CycleConfig::load(path)?,
        None => CycleConfig::default(),
    };
    if let Some(rate) = args.rate {
        config.rate_multiplier = rate;
    }
    if let Some(start) = args.start {
        config.start_hour = start;
    }
    if let Some(sunrise) = args.sunrise {
        config.sunrise_hour = sunrise;
    }
    if let Some(sunset) = args.sunset {
        config.sunset_hour = sunset;
    }
    Ok(config)
}

fn run(args: &Args) -> daycycle::core::Result<()> {
    let config = build_config(args)?;
    let mut cycle = DayNightCycle::new(config)?;
    cycle.attach_display(LogDisplay::default());
    cycle.attach_orientation(LogOrientation);

    let mut timer = FrameTimer::new();
    let tick_interval = Duration::from_secs_f64(args.dt);

    for _ in 0..args.ticks {
        let dt = if args.realtime {
            std::thread::sleep(tick_interval);
            timer.tick();
            timer.delta_secs()
        } else {
            args.dt
        };

        let state = cycle.update(dt);
        if args.json {
            println!("{}", serde_json::to_string(state)?);
        }
    }

    let state = cycle.state();
    log::info!(
        "Finished {} ticks at {} ({}, sun {}, day {})",
        args.ticks,
        state.clock,
        state.phase,
        state.sun_angle,
        state.days_elapsed
    );
    Ok(())
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
