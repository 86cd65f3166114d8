//! Runs the head-coupled frame loop over a recorded pose log without a
//! window, logging what would be drawn.

#[macro_use]
extern crate log;

use clap::Parser;
use headtrack::api::{HeadlessRasterizer, HeadlessTarget, ReplayPoseSource};
use headtrack::{Calibration, FrameDriver, PoseSource, PresentationManager, StereoMode};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "headtrack-replay", about = "Replay a head tracker log through the stereo camera")]
struct Cli {
    /// Pose log to replay, one `px py pz qx qy qz qw` sample per line
    endpoint: PathBuf,

    /// Stereo mode: none, quad-buffer, side-by-side or top-bottom
    #[arg(long, default_value = "none")]
    stereo: StereoMode,

    /// Draw buffer width in pixels
    #[arg(long, default_value = "600")]
    width: i32,

    /// Draw buffer height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Stop after this many frames (default: when the log runs out)
    #[arg(long)]
    frames: Option<u64>,

    /// Rewind the log when it runs out
    #[arg(long = "loop")]
    looping: bool,
}

// With a frame limit, run exactly that many frames. Otherwise run until the
// log is used up, but always produce at least one frame.
fn keep_running(limit: Option<u64>, frames_done: u64, source_available: bool) -> bool {
    match limit {
        Some(limit) => frames_done < limit,
        None => frames_done == 0 || source_available,
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.looping && cli.frames.is_none() {
        warn!("--loop without --frames runs until interrupted");
    }

    let source = match ReplayPoseSource::open(&cli.endpoint) {
        Ok(source) => source.looping(cli.looping),
        Err(err) => {
            error!("{}: {}", cli.endpoint.display(), err);
            process::exit(1);
        },
    };
    if source.is_empty() {
        warn!("{} holds no samples, rendering untracked", cli.endpoint.display());
    }

    let presentation = PresentationManager::new(cli.stereo, cli.width, cli.height);
    let mut driver = match FrameDriver::new(source, Calibration::default(), presentation) {
        Ok(driver) => driver,
        Err(err) => {
            error!("Invalid calibration: {}", err);
            process::exit(1);
        },
    };

    let mut target = HeadlessTarget::new();
    let mut rasterizer = HeadlessRasterizer::keeping_last(2);
    let mut skipped = 0;

    while keep_running(cli.frames, driver.frame_count(), driver.source().is_available()) {
        let data = driver.frame(&mut target, &mut rasterizer, &mut |eye| trace!("draw {:?}", eye));
        skipped += data.skipped.len();
        for view in &data.eyes {
            debug!("frame {} {:?} eye at {:?}", driver.frame_count(), view.eye, view.position);
        }
        target.take_calls();
    }

    info!("Replayed {} frames ({} presented, {} eyes skipped)",
          driver.frame_count(), target.presented_frames(), skipped);
}
