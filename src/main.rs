use std::{
    env::args,
    fs,
    io::{self, stdout, Write},
    process::exit,
    thread,
};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toruslife::{
    config::{Config, EXTENT, USAGE},
    demo, view, Grid, History, Sim,
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}

fn run_pattern(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let path = config.pattern.as_ref().context("no pattern given")?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read pattern {}", path.display()))?;
    let grid: Grid<EXTENT> = content
        .parse()
        .with_context(|| format!("failed to load pattern {}", path.display()))?;
    info!(
        path = %path.display(),
        population = grid.population(),
        "pattern loaded"
    );

    let mut sim = Sim::new(grid);
    let mut history = History::<EXTENT>::default();
    show(config, out, &sim)?;
    for _ in 0..config.generations {
        if config.until_cycle {
            if let Some(cycle) = history.record(sim.generation(), sim.snapshot()) {
                info!(
                    first_seen = cycle.first_seen,
                    period = cycle.period,
                    "pattern repeats, stopping"
                );
                break;
            }
        }
        sim.evolve();
        show(config, out, &sim)?;
    }
    Ok(())
}

fn show(config: &Config, out: &mut impl Write, sim: &Sim<EXTENT>) -> io::Result<()> {
    if config.animate {
        view::draw_frame(out, sim.snapshot(), sim.generation())?;
        thread::sleep(config.delay);
        Ok(())
    } else {
        view::print_generation(out, sim.snapshot())
    }
}

pub fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_args(args().skip(1)).unwrap_or_else(|err| {
        eprintln!("[error] {err}");
        eprintln!("{USAGE}");
        exit(2);
    });

    let mut out = stdout().lock();
    match config.pattern {
        None => {
            if config.animate || config.until_cycle {
                warn!("no pattern given, running the demo and ignoring display flags");
            }
            demo::run(&mut out).context("failed to write demo output")
        }
        Some(_) => run_pattern(&config, &mut out),
    }
}
