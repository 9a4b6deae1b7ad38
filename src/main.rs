// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line front end: animate a tangent walk and write it out as SVG.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tangent_walk::{
    NoDelay, Scheduler, SleepScheduler, SmallCircle, SvgCanvas, TangentWalk, WalkConfig,
    WalkStatus,
};

/// Walk a point around a circle along chords tangent to a smaller one.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Radius of the big circle.
    #[arg(short = 'R', long)]
    big_radius: Option<f64>,

    /// Radius of the small circle.
    #[arg(short = 'r', long, conflicts_with = "sides")]
    small_radius: Option<f64>,

    /// Derive the small circle from a regular polygon with this many sides.
    #[arg(short = 'n', long)]
    sides: Option<u32>,

    /// Canvas width.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    height: Option<f64>,

    /// Pause between ticks, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Decimal digits walked points are rounded to.
    #[arg(long)]
    precision: Option<u32>,

    /// Stop after this many segments.
    #[arg(long, conflicts_with = "unlimited")]
    max_ticks: Option<usize>,

    /// Keep walking until the loop closes or no tangent remains.
    #[arg(long)]
    unlimited: bool,

    /// Read settings from a TOML file; flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the final frame here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write every frame into this directory as `frame_NNNN.svg`.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Don't pause between ticks.
    #[arg(long)]
    no_delay: bool,
}

impl Cli {
    fn walk_config(&self) -> Result<WalkConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => WalkConfig::default(),
        };
        if let Some(r) = self.big_radius {
            config.big_radius = r;
        }
        if let Some(r) = self.small_radius {
            config.small = SmallCircle::Radius(r);
        }
        if let Some(n) = self.sides {
            config.small = SmallCircle::Sides(n);
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(ms) = self.delay_ms {
            config.delay_ms = ms;
        }
        if let Some(p) = self.precision {
            config.precision = p;
        }
        if self.unlimited {
            config.max_ticks = None;
        } else if let Some(max) = self.max_ticks {
            config.max_ticks = Some(max);
        }
        Ok(config)
    }
}

/// Real-time or batch pacing, picked at startup.
enum Pace {
    Sleep(SleepScheduler),
    Batch(NoDelay),
}

impl Scheduler for Pace {
    fn wait(&mut self, delay: Duration) {
        match self {
            Pace::Sleep(s) => s.wait(delay),
            Pace::Batch(s) => s.wait(delay),
        }
    }
}

fn write_frame(dir: &Path, index: usize, canvas: &SvgCanvas) -> Result<()> {
    let path = dir.join(format!("frame_{index:04}.svg"));
    let file = fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    canvas
        .write_to(io::BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))
}

fn animate(
    walk: &mut TangentWalk,
    canvas: &mut SvgCanvas,
    pace: &mut Pace,
    frames: &Path,
) -> Result<()> {
    fs::create_dir_all(frames).with_context(|| format!("creating {}", frames.display()))?;
    loop {
        let drawn = walk.state().segments().len();
        let status = walk.tick(canvas);
        let now = walk.state().segments().len();
        if now > drawn {
            write_frame(frames, now, canvas)?;
        }
        match status {
            WalkStatus::Running => pace.wait(walk.delay()),
            WalkStatus::Halted(_) => return Ok(()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.walk_config()?;
    log::info!(
        "tangent-walk v{} starting: R={} small={:?}",
        env!("CARGO_PKG_VERSION"),
        config.big_radius,
        config.small
    );

    let mut walk = config.build().context("invalid walk configuration")?;
    let mut canvas = SvgCanvas::new(config.width, config.height);
    let mut pace = if cli.no_delay {
        Pace::Batch(NoDelay::new())
    } else {
        Pace::Sleep(SleepScheduler)
    };

    match &cli.frames {
        Some(dir) => animate(&mut walk, &mut canvas, &mut pace, dir)?,
        None => {
            walk.run(&mut canvas, &mut pace);
        }
    }
    match &cli.output {
        Some(path) => {
            let file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            canvas
                .write_to(io::BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => canvas
            .write_to(io::stdout().lock())
            .context("writing to stdout")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["tangent-walk", "-R", "100", "-n", "5", "--unlimited"]);
        let config = cli.walk_config().unwrap();
        assert_eq!(config.big_radius, 100.0);
        assert_eq!(config.small, SmallCircle::Sides(5));
        assert_eq!(config.max_ticks, None);
        assert_eq!(config.delay_ms, 50);
    }

    #[test]
    fn huge_precision_flag_fails_to_build() {
        let cli = Cli::parse_from(["tangent-walk", "--precision", "400"]);
        let config = cli.walk_config().unwrap();
        assert!(config.build().is_err());
    }

    #[test]
    fn radius_and_sides_conflict() {
        assert!(Cli::try_parse_from(["tangent-walk", "-r", "10", "-n", "5"]).is_err());
    }

    #[test]
    fn config_file_then_flags() {
        let dir = std::env::temp_dir().join(format!("tangent-walk-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("walk.toml");
        fs::write(
            &path,
            "big_radius = 120.0\nprecision = 3\n\n[small]\nsides = 6\n",
        )
        .unwrap();
        let cli = Cli::parse_from([
            "tangent-walk",
            "--config",
            path.to_str().unwrap(),
            "--precision",
            "1",
        ]);
        let config = cli.walk_config().unwrap();
        assert_eq!(config.big_radius, 120.0);
        assert_eq!(config.small, SmallCircle::Sides(6));
        assert_eq!(config.precision, 1);
        assert_eq!(config.width, 500.0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn frames_are_written() {
        let dir = std::env::temp_dir().join(format!("tangent-walk-frames-{}", std::process::id()));
        let mut walk = WalkConfig {
            small: SmallCircle::Sides(4),
            ..WalkConfig::default()
        }
        .build()
        .unwrap();
        let mut canvas = SvgCanvas::new(500.0, 500.0);
        animate(&mut walk, &mut canvas, &mut Pace::Batch(NoDelay::new()), &dir).unwrap();
        for i in 1..=4 {
            assert!(dir.join(format!("frame_{i:04}.svg")).exists());
        }
        assert!(!dir.join("frame_0005.svg").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
