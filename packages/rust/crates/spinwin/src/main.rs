//! main.rs - Headless wheel driver for spinwin
//!
//! Plays the part of the rendering surface: spins the wheel, waits out the
//! spin animation, reports the result and runs the auto-reset countdown.
//!
//! Usage:
//!   Spin once:        spinwin
//!   Reproducible run: spinwin --seed 42 --spins 5 --no-wait
//!   Odds check:       spinwin --preset discounts --simulate 100000
//!
//! Settings are read from `packages/conf/spinwin.yaml` and the user config
//! home (see `--conf`); CLI flags win over both.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use spinwin::{
    Preset, Sector, SeededRandom, SpinGeometry, SpinOutcome, ThreadRandom, TickOutcome,
    UniformSource, WheelSettings, WheelState, probabilities, select,
};

/// SpinWin - weighted prize wheel, headless
#[derive(clap::Parser, Debug)]
#[command(name = "spinwin")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in sector set (default|discounts); overrides configured sectors
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Number of spins to play
    #[arg(short = 'n', long, default_value_t = 1)]
    spins: u32,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Config home directory (holds spinwin/settings.yaml)
    #[arg(long)]
    conf: Option<String>,

    /// Skip animation and countdown sleeps
    #[arg(long, default_value = "false")]
    no_wait: bool,

    /// Draw N outcomes and compare observed with expected frequencies
    #[arg(long)]
    simulate: Option<u32>,

    /// Emit results as JSON lines
    #[arg(long, default_value = "false")]
    json: bool,
}

enum Source {
    Seeded(SeededRandom),
    Thread(ThreadRandom),
}

impl UniformSource for Source {
    fn next_unit(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.next_unit(),
            Self::Thread(rng) => rng.next_unit(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulationRow {
    index: usize,
    label: String,
    expected: f64,
    observed: f64,
    hits: u32,
}

fn resolve_settings(args: &Args, mut settings: WheelSettings) -> WheelSettings {
    if let Some(preset) = args.preset {
        settings.preset = Some(preset);
        settings.sectors = None;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings
}

#[allow(clippy::cast_precision_loss)]
fn simulate<S: UniformSource>(
    sectors: &[Sector],
    draws: u32,
    source: &mut S,
) -> Result<Vec<SimulationRow>> {
    let expected = probabilities(sectors).context("invalid sector weights")?;
    let mut hits = vec![0_u32; sectors.len()];
    for _ in 0..draws {
        let index = select(sectors, source).context("selection failed")?;
        hits[index] += 1;
    }
    let total = f64::from(draws.max(1));
    Ok(sectors
        .iter()
        .enumerate()
        .map(|(index, sector)| SimulationRow {
            index,
            label: sector.label.clone(),
            expected: expected[index],
            observed: f64::from(hits[index]) / total,
            hits: hits[index],
        })
        .collect())
}

fn print_simulation(rows: &[SimulationRow], json: bool) -> Result<()> {
    for row in rows {
        if json {
            println!("{}", serde_json::to_string(row)?);
        } else {
            println!(
                "{:>2} {:<14} expected {:>6.2}%  observed {:>6.2}%  ({} hits)",
                row.index,
                row.label,
                row.expected * 100.0,
                row.observed * 100.0,
                row.hits
            );
        }
    }
    Ok(())
}

fn play_spin<S: UniformSource>(
    state: &mut WheelState,
    geometry: &SpinGeometry,
    source: &mut S,
    spin_duration: Duration,
    wait: bool,
) -> Result<SpinOutcome> {
    let index = state.spin_with(source).context("failed to start spin")?;
    let angle = geometry
        .target_angle(index, state.sectors().len())
        .context("failed to compute target angle")?;
    info!("spinning to {angle:.1} degrees");
    if wait {
        thread::sleep(spin_duration);
    }
    let outcome = state
        .complete_spin(index)
        .context("failed to complete spin")?
        .clone();
    Ok(outcome)
}

fn run_countdown(state: &mut WheelState, wait: bool) {
    loop {
        if wait {
            thread::sleep(Duration::from_secs(1));
        }
        match state.tick() {
            TickOutcome::Counting { remaining } => {
                debug!("Getting ready for the next spin in {remaining} seconds...");
            }
            TickOutcome::AutoReset | TickOutcome::Idle => break,
        }
    }
}

fn main() -> Result<()> {
    spinwin::init_logger();

    let args = Args::parse();
    if let Some(conf) = &args.conf {
        spinwin::set_config_home_override(conf);
    }
    let settings = resolve_settings(&args, spinwin::load_wheel_settings());

    let mut source = match settings.seed {
        Some(seed) => {
            info!("Using seeded draws (seed={seed})");
            Source::Seeded(SeededRandom::new(seed))
        }
        None => Source::Thread(ThreadRandom),
    };

    if let Some(draws) = args.simulate {
        info!("Simulating {draws} draws");
        let rows = simulate(&settings.resolved_sectors(), draws, &mut source)?;
        return print_simulation(&rows, args.json);
    }

    let mut state = settings.to_state();
    let geometry = settings.geometry();
    let wait = !args.no_wait;
    info!(
        "Wheel ready with {} sectors, {} spin(s)",
        state.sectors().len(),
        args.spins
    );

    for round in 1..=args.spins {
        let outcome = play_spin(
            &mut state,
            &geometry,
            &mut source,
            settings.spin_duration(),
            wait,
        )?;
        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("[{round}] {}", outcome.message());
        }
        if round < args.spins {
            run_countdown(&mut state, wait);
        }
    }

    info!("spinwin done");
    Ok(())
}
