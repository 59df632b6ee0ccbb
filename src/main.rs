//! Headless runner
//!
//! Plays a session with the autopilot at a fixed 60 Hz step and reports how
//! it went. Usage: `dino-run [seed] [seconds] [--tuning file.json] [--dump-tuning]`

use std::path::PathBuf;
use std::thread;

use clap::Parser;

use dino_run::consts::SIM_DT;
use dino_run::feedback::{ChannelFeedback, Cue, FeedbackSink, LogFeedback};
use dino_run::{FixedStepClock, GameSession, TickInput, Tuning, format_score};

#[derive(Parser)]
#[command(name = "dino-run")]
#[command(about = "Play a headless endless-runner session with the autopilot")]
struct Args {
    /// RNG seed
    #[arg(default_value_t = 12345)]
    seed: u64,

    /// Simulated time in seconds
    #[arg(default_value_t = 60.0)]
    seconds: f32,

    /// JSON tuning file
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    if args.dump_tuning {
        match tuning.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize tuning: {}", e),
        }
        return;
    }

    log::info!("Dino Run (headless) starting, seed {}", args.seed);

    // Cues go to a separate thread, as a real audio backend would
    let (feedback, cues) = ChannelFeedback::new();
    let listener = thread::spawn(move || {
        let mut backend = LogFeedback;
        let mut counts = [0u32; 4];
        for cue in cues {
            backend.play(cue);
            let slot = match cue {
                Cue::Jump => 0,
                Cue::Hit => 1,
                Cue::Milestone => 2,
                Cue::PickupCollected => 3,
            };
            counts[slot] += 1;
        }
        counts
    });

    let mut session = GameSession::new(args.seed, tuning, feedback);
    let mut clock = FixedStepClock::new(SIM_DT);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let ticks = (args.seconds / SIM_DT).round() as u64;
    for _ in 0..ticks {
        session.tick_clock(&mut clock, &input);
    }

    let final_score = session.score();
    let best = session.high_score().max(final_score);
    drop(session);

    let [jumps, hits, milestones, pickups] = match listener.join() {
        Ok(counts) => counts,
        Err(_) => {
            log::error!("Cue listener panicked");
            [0; 4]
        }
    };

    println!("Simulated {:.1}s ({} ticks)", args.seconds, ticks);
    println!("Current run score: {}", format_score(final_score));
    println!("Best score:        {}", format_score(best));
    println!(
        "Cues: {} jumps, {} hits, {} milestones, {} pickups",
        jumps, hits, milestones, pickups
    );
}
