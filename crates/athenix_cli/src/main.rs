//! Athenix CLI
//!
//! Headless tooling for the marketing screens:
//! - `athenix preview <screen>`: step a screen's entrance timeline and print it
//! - `athenix press <label>`: tap one element and carry out its action
//! - `athenix content`: dump the static copy and document head as JSON
//! - `athenix init`: write a default athenix.toml

mod config;
mod press;
mod preview;
mod project;

use anyhow::{Context, Result};
use athenix_platform::{LayoutScrollSurface, LinkRecorder, Route, SystemLinkOpener};
use athenix_site::{head_tags, Action, Breakpoint, Metrics, SiteContent};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::AthenixConfig;
use crate::preview::{Frame, Preview, MAX_FPS};

#[derive(Parser)]
#[command(name = "athenix")]
#[command(about = "Athenix marketing site tooling")]
#[command(version)]
struct Cli {
    /// Directory holding athenix.toml
    #[arg(short = 'C', long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a screen's animation timeline headlessly
    Preview {
        /// Screen route ("home" or "features")
        screen: Option<String>,

        #[arg(long)]
        fps: Option<u32>,

        /// Milliseconds of timeline to simulate
        #[arg(long)]
        duration: Option<u32>,

        /// Viewport width for breakpoint selection
        #[arg(long)]
        width: Option<f32>,

        /// Pace frames with a wall-clock interval
        #[arg(long)]
        realtime: bool,

        /// Snap everything to its final state
        #[arg(long)]
        reduced_motion: bool,

        /// Print frames as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tap an element by label and carry out its action
    Press {
        /// Element label, e.g. "hero.button" or "footer.terms"
        label: String,

        /// Screen the element lives on ("home" or "features")
        #[arg(long, default_value = "home")]
        screen: String,

        /// Laid-out section offset as name=y, repeatable
        #[arg(long = "section", value_parser = press::parse_section)]
        sections: Vec<(String, f32)>,

        /// Record links instead of opening them
        #[arg(long)]
        dry_run: bool,
    },
    /// Dump static content and head tags as JSON
    Content,
    /// Create athenix.toml
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            screen,
            fps,
            duration,
            width,
            realtime,
            reduced_motion,
            json,
        } => {
            let mut config = AthenixConfig::load_or_default(&cli.dir)?;
            if let Some(screen) = screen {
                config.preview.screen = screen;
            }
            if let Some(fps) = fps {
                config.preview.fps = fps;
            }
            if let Some(duration) = duration {
                config.preview.duration_ms = duration;
            }
            if let Some(width) = width {
                config.preview.width = width;
            }
            config.preview.realtime |= realtime;
            config.motion.reduced_motion |= reduced_motion;

            cmd_preview(&config, json).await
        }
        Commands::Press {
            label,
            screen,
            sections,
            dry_run,
        } => {
            let config = AthenixConfig::load_or_default(&cli.dir)?;
            cmd_press(&config, &screen, &label, &sections, dry_run)
        }
        Commands::Content => cmd_content(),
        Commands::Init { force } => {
            let path = project::init_config(&cli.dir, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

async fn cmd_preview(config: &AthenixConfig, json: bool) -> Result<()> {
    let route: Route = config
        .preview
        .screen
        .parse()
        .with_context(|| format!("Unknown screen '{}'", config.preview.screen))?;
    let options = config.site_options()?;
    let breakpoint = Breakpoint::from_width(config.preview.width);
    let metrics = Metrics::for_breakpoint(breakpoint);

    if config.preview.fps > MAX_FPS {
        tracing::warn!(fps = config.preview.fps, max = MAX_FPS, "clamping frame rate");
    }
    tracing::info!(
        %route,
        fps = config.preview.fps.clamp(1, MAX_FPS),
        ?breakpoint,
        motion = ?options.motion,
        "starting preview"
    );

    let mut preview = Preview::new(route, &options, config.preview.fps);
    let duration_ms = config.preview.duration_ms;

    let frames = if config.preview.realtime {
        let mut interval = tokio::time::interval(preview.frame_interval());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut frames = vec![preview.initial()];
        interval.tick().await;
        while !preview.is_done(duration_ms) {
            interval.tick().await;
            let frame = preview.step();
            if !json {
                print_frame(&frame)?;
            }
            frames.push(frame);
        }
        frames
    } else {
        let frames = preview.run(duration_ms);
        if !json {
            for frame in &frames {
                print_frame(frame)?;
            }
        }
        frames
    };

    let settled = preview.screen().entrances_settled();
    if json {
        let out = serde_json::json!({
            "route": route.path(),
            "breakpoint": breakpoint,
            "metrics": metrics,
            "frames": frames,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} frames, {:.0}ms, entrances {}",
            frames.len(),
            preview.time_ms(),
            if settled { "settled" } else { "still running" }
        );
    }

    preview.finish();
    Ok(())
}

fn print_frame(frame: &Frame) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for element in frame.moving() {
        writeln!(
            out,
            "{:>7.1}ms  {:<32} opacity {:.3}  offset {:>6.2}  scale {:.3}",
            frame.time_ms, element.label, element.opacity, element.offset, element.scale
        )?;
    }
    Ok(())
}

fn cmd_press(
    config: &AthenixConfig,
    screen: &str,
    label: &str,
    sections: &[(String, f32)],
    dry_run: bool,
) -> Result<()> {
    let route: Route = screen
        .parse()
        .with_context(|| format!("Unknown screen '{screen}'"))?;
    let options = config.site_options()?;
    let scroll = press::layout(sections);

    if dry_run {
        let (action, site) = press::press_on(LinkRecorder::new(), scroll, options, route, label)?;
        for url in site.links().opened() {
            println!("would open {url}");
        }
        print_press(label, action, site.scroll());
    } else {
        let (action, site) = press::press_on(SystemLinkOpener, scroll, options, route, label)?;
        print_press(label, action, site.scroll());
    }
    Ok(())
}

fn print_press(label: &str, action: Action, scroll: &LayoutScrollSurface) {
    match action {
        Action::ScrollTo(anchor) if scroll.requests().is_empty() => {
            println!("{label}: {action:?} (section '{}' not laid out)", anchor.id());
        }
        Action::ScrollTo(_) => println!("{label}: {action:?} -> y {}", scroll.position()),
        _ => println!("{label}: {action:?}"),
    }
}

fn cmd_content() -> Result<()> {
    let out = serde_json::json!({
        "content": SiteContent::get(),
        "head": head_tags().iter().map(|tag| tag.to_html()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
