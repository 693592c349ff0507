//! vowelsynth - formant vowel synthesizer

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::Path;

use vowelsynth::config::{self, SynthConfig};
use vowelsynth::control::ControlState;
use vowelsynth::engine::{render_voice, Recorder, VowelSession};
use vowelsynth::formant::{calculate_bandwidth, catalog, find_anchor, nearest_anchor, recompute, VowelAnchor};
use vowelsynth::synth::{SawVoice, Voice};
use vowelsynth::viz::render_ascii;

mod cli;

use cli::{Cli, Commands, ControlArgs, OutputFormat};

const SCOPE_WIDTH: usize = 72;
const SCOPE_HEIGHT: usize = 11;

/// Longest render accepted on the command line, in seconds
const MAX_DURATION_SECS: f64 = 600.0;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Formants { controls, format } => {
            let (_, control) = resolve_controls(&controls)?;
            print_formants(&control, format)?;
        }

        Commands::Vowels => {
            println!("{:<4} {:<8} {:>6} {:>6} {:>6} {:>6} {:>6}", "ipa", "word", "F1", "F2", "F3", "x", "y");
            for anchor in catalog() {
                println!(
                    "{:<4} {:<8} {:>6.0} {:>6.0} {:>6.0} {:>6.2} {:>6.2}",
                    anchor.label, anchor.word, anchor.formants[0], anchor.formants[1], anchor.formants[2], anchor.x, anchor.y
                );
            }
        }

        Commands::Render {
            controls,
            output,
            duration,
            scope,
        } => {
            let (cfg, control) = resolve_controls(&controls)?;
            let sample_rate = cfg.audio.sample_rate;
            let total_samples = samples_for(duration, sample_rate)?;

            println!(
                "Rendering /{}/ at {:.0} Hz for {}s to {:?}...",
                nearest_anchor(control.x, control.y).label,
                control.pitch,
                duration,
                output
            );

            let mut session = VowelSession::new(sample_rate as f64, control);
            session.set_gate_times(cfg.audio.attack, cfg.audio.release);
            let mut recorder = Recorder::new(&output, sample_rate)?;
            session.start();

            let mut buffer = vec![0.0f32; cfg.audio.buffer_size];
            let mut remaining = total_samples;
            while remaining > 0 {
                let n = remaining.min(buffer.len());
                session.fill_buffer(&mut buffer[..n]);
                recorder.write_buffer(&buffer[..n])?;
                remaining -= n;
            }

            if scope {
                let samples = session.analyser().get_recent(SCOPE_WIDTH * 8);
                for row in render_ascii(&samples, SCOPE_WIDTH, SCOPE_HEIGHT) {
                    println!("  {}", row);
                }
            }

            recorder.write_buffer(&session.drain())?;
            finish(recorder, &output)?;
        }

        Commands::Glide {
            from,
            to,
            controls,
            output,
            duration,
        } => {
            let start = lookup_vowel(&from)?;
            let end = lookup_vowel(&to)?;
            let (cfg, mut control) = resolve_controls(&controls)?;
            control.x = start.x;
            control.y = start.y;

            let sample_rate = cfg.audio.sample_rate;
            let total_samples = samples_for(duration, sample_rate)?;

            println!("Gliding /{}/ -> /{}/ over {}s to {:?}...", start.label, end.label, duration, output);

            let mut session = VowelSession::new(sample_rate as f64, control);
            session.set_gate_times(cfg.audio.attack, cfg.audio.release);
            let mut recorder = Recorder::new(&output, sample_rate)?;
            session.start();
            session.render_glide(
                (start.x, start.y),
                (end.x, end.y),
                total_samples,
                cfg.audio.buffer_size,
                |block| recorder.write_buffer(block),
            )?;

            recorder.write_buffer(&session.drain())?;
            finish(recorder, &output)?;
        }

        Commands::Saw {
            config: config_path,
            frequency,
            volume,
            output,
            duration,
        } => {
            let cfg = config::load_or_default(config_path.as_deref())?;
            let sample_rate = cfg.audio.sample_rate;
            let total_samples = samples_for(duration, sample_rate)?;

            let mut voice = SawVoice::with_waveform(sample_rate as f64, cfg.saw.waveform);
            voice.set_gate_times(cfg.audio.attack, cfg.audio.release);
            voice.set_parameter("frequency", frequency.unwrap_or(cfg.saw.frequency));
            voice.set_parameter("volume", volume.unwrap_or(cfg.saw.volume));

            println!(
                "Rendering {:?} at {:.1} Hz for {}s to {:?}...",
                voice.waveform(),
                voice.get_parameter("frequency").unwrap_or_default(),
                duration,
                output
            );

            let mut recorder = Recorder::new(&output, sample_rate)?;
            render_voice(&mut voice, total_samples, sample_rate as f64, cfg.audio.buffer_size, |block| {
                recorder.write_buffer(block)
            })?;
            finish(recorder, &output)?;
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
                    println!("  Buffer size: {}", cfg.audio.buffer_size);
                    println!("  Gate: attack {}s, release {}s", cfg.audio.attack, cfg.audio.release);
                    let v = &cfg.voice;
                    println!(
                        "  Voice: x={:.2} y={:.2} gender={:.2} quality={:.2} pitch={:.1} Hz volume={:.2}",
                        v.x, v.y, v.gender, v.quality, v.pitch, v.volume
                    );
                    println!("  Nearest vowel: /{}/", nearest_anchor(v.x, v.y).label);
                    println!(
                        "  Saw: {:?} at {:.1} Hz, volume {:.2}",
                        cfg.saw.waveform, cfg.saw.frequency, cfg.saw.volume
                    );
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let path = "vowelsynth.yaml";
            if Path::new(path).exists() {
                println!("vowelsynth.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, config::EXAMPLE_CONFIG)?;
                println!("Created vowelsynth.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialise logger")
}

/// Config defaults, then a reference vowel, then explicit flags
fn resolve_controls(args: &ControlArgs) -> Result<(SynthConfig, ControlState)> {
    let cfg = config::load_or_default(args.config.as_deref())?;
    let mut control = cfg.voice;

    if let Some(name) = &args.vowel {
        let anchor = lookup_vowel(name)?;
        control.x = anchor.x;
        control.y = anchor.y;
    }
    if let Some(x) = args.x {
        control.x = x;
    }
    if let Some(y) = args.y {
        control.y = y;
    }
    if let Some(g) = args.gender {
        control.gender = g;
    }
    if let Some(q) = args.quality {
        control.quality = q;
    }
    if let Some(p) = args.pitch {
        control.pitch = p;
    }
    if let Some(v) = args.volume {
        control.volume = v;
    }

    if args.clamp {
        let clamped = control.clamped();
        if clamped != control {
            log::warn!("controls clamped from {:?} to {:?}", control, clamped);
        }
        control = clamped;
    } else {
        control.validate().context("invalid controls (pass --clamp to pull them into range)")?;
    }

    Ok((cfg, control))
}

fn lookup_vowel(name: &str) -> Result<&'static VowelAnchor> {
    find_anchor(name).ok_or_else(|| anyhow!("unknown vowel '{}' (see `vowelsynth vowels`)", name))
}

fn samples_for(duration: f64, sample_rate: u32) -> Result<usize> {
    if !(duration > 0.0 && duration.is_finite()) {
        return Err(anyhow!("duration must be a positive number of seconds"));
    }
    if duration > MAX_DURATION_SECS {
        return Err(anyhow!("duration {}s exceeds the {}s limit", duration, MAX_DURATION_SECS));
    }
    Ok((duration * sample_rate as f64) as usize)
}

fn finish(recorder: Recorder, output: &Path) -> Result<()> {
    println!(
        "Recorded {:.2}s ({} samples at {} Hz) to {:?}",
        recorder.duration_secs(),
        recorder.samples_written(),
        recorder.sample_rate(),
        output
    );
    recorder.finalize()
}

fn print_formants(control: &ControlState, format: OutputFormat) -> Result<()> {
    let output = recompute(control);
    let nearest = nearest_anchor(control.x, control.y);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "control": control,
                "nearest": nearest,
                "formants": output,
                "pitch": control.pitch,
                "volume": control.volume,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "Position ({:.2}, {:.2}) nearest /{}/ as in \"{}\"",
                control.x, control.y, nearest.label, nearest.word
            );
            println!("Gender {:.2}, quality {:.2}", control.gender, control.quality);
            println!("{:<4} {:>9} {:>11} {:>7}", "band", "freq Hz", "bandwidth", "Q");
            for (i, band) in output.bands.iter().enumerate() {
                println!(
                    "F{:<3} {:>9.1} {:>11.1} {:>7.2}",
                    i + 1,
                    band.frequency,
                    calculate_bandwidth(band.frequency, control.quality),
                    band.q
                );
            }
            println!("Pitch {:.1} Hz, volume {:.2}", control.pitch, control.volume);
        }
    }

    Ok(())
}
