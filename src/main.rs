//! Compass Accuracy Monitor CLI
//!
//! Watches magnetometer accuracy against a required level and demonstrates
//! the calibration-prompt lifecycle with scripted sensor playback.

use clap::{Parser, Subcommand};
use compass_accuracy_monitor::{
    monitor::CurrentAccuracyResult,
    sensor::{parse_script, AccuracyListener, ScriptedPlayback, SensorFeed},
    AccuracyMonitor, MonitorSettings, PromptDriver, TextPresenter, VERSION,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "compass-monitor")]
#[command(version = VERSION)]
#[command(about = "Magnetometer accuracy watchdog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch accuracy changes and print watch events as JSON lines
    Watch {
        /// Required accuracy level (unreliable, low, medium, high)
        #[arg(long)]
        required_accuracy: Option<String>,

        /// Scripted sensor playback, e.g. "low:2,medium:1,high"
        #[arg(long)]
        script: Option<String>,

        /// Disable the calibration prompt (event stream only)
        #[arg(long)]
        no_prompt: bool,
    },

    /// Print the current accuracy after optional scripted playback
    Current {
        /// Scripted sensor playback to run first
        #[arg(long)]
        script: Option<String>,
    },

    /// Inject a simulated accuracy change into an active watch
    Simulate {
        /// Accuracy level to simulate (required)
        accuracy: Option<String>,

        /// Required accuracy level for the demonstration watch
        #[arg(long)]
        required_accuracy: Option<String>,
    },

    /// Show configuration
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Watch {
            required_accuracy,
            script,
            no_prompt,
        } => {
            cmd_watch(required_accuracy.as_deref(), script.as_deref(), no_prompt);
        }
        Commands::Current { script } => {
            cmd_current(script.as_deref());
        }
        Commands::Simulate {
            accuracy,
            required_accuracy,
        } => {
            cmd_simulate(accuracy.as_deref(), required_accuracy.as_deref());
        }
        Commands::Config => {
            cmd_config();
        }
    }
}

fn load_settings() -> MonitorSettings {
    MonitorSettings::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load settings, using defaults: {e}");
        MonitorSettings::default()
    })
}

fn build_monitor(settings: &MonitorSettings, no_prompt: bool) -> Arc<AccuracyMonitor> {
    if settings.show_calibration_prompt && !no_prompt {
        let driver = PromptDriver::new(Box::new(TextPresenter::new()));
        AccuracyMonitor::with_prompt(settings.clone(), driver)
    } else {
        AccuracyMonitor::new(settings.clone())
    }
}

fn start_playback(feed: &SensorFeed, script: &str) -> ScriptedPlayback {
    match parse_script(script) {
        Ok(steps) => ScriptedPlayback::start(feed.reporter(), steps),
        Err(e) => {
            eprintln!("Error: Invalid script: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_watch(required: Option<&str>, script: Option<&str>, no_prompt: bool) {
    println!("Compass Accuracy Monitor v{VERSION}");
    println!();

    let settings = load_settings();
    let required = required.unwrap_or(settings.required_accuracy.as_str());

    let monitor = build_monitor(&settings, no_prompt);
    let feed = Arc::new(SensorFeed::new());
    monitor.connect_source(feed.clone());

    let handle = monitor.start_monitoring(Some(required));
    println!("Watch ID: {}", handle.id);
    println!("Required accuracy: {required}");
    if script.is_none() {
        println!("Press Ctrl+C to stop");
    }
    println!();

    let playback = script.map(|s| start_playback(&feed, s));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || r.store(false, Ordering::SeqCst)) {
        eprintln!("Warning: Could not set Ctrl+C handler: {e}");
    }

    while running.load(Ordering::SeqCst) {
        match handle.events.recv_timeout(Duration::from_millis(200)) {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Warning: Could not serialize event: {e}"),
            },
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                // A finished script ends the session once the queue is drained
                if playback.as_ref().is_some_and(ScriptedPlayback::is_finished) {
                    break;
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
        }
    }

    monitor.stop_monitoring();
    println!();
    println!("{}", monitor.stats_summary());
}

fn cmd_current(script: Option<&str>) {
    let settings = load_settings();
    let monitor = AccuracyMonitor::new(settings);
    let feed = Arc::new(SensorFeed::new());

    // Query works with no watch active, so attach the listener directly
    let listener: Arc<dyn AccuracyListener> = monitor.clone();
    feed.attach(Arc::downgrade(&listener));

    if let Some(script) = script {
        start_playback(&feed, script).wait();
        // Let the dispatch thread drain the queued readings
        std::thread::sleep(Duration::from_millis(200));
    }

    let result = CurrentAccuracyResult {
        current_accuracy: monitor.current_accuracy(),
    };
    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: Could not serialize result: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_simulate(accuracy: Option<&str>, required: Option<&str>) {
    let settings = load_settings();
    let monitor = build_monitor(&settings, false);

    let handle = monitor.start_monitoring(required);
    if let Err(e) = monitor.simulate_accuracy_change(accuracy) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Drain the started event and whatever the simulation produced
    while let Ok(event) = handle.events.recv_timeout(Duration::from_millis(200)) {
        match serde_json::to_string(&event) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Warning: Could not serialize event: {e}"),
        }
    }
    monitor.stop_monitoring();
}

fn cmd_config() {
    let settings = load_settings();
    println!("Config file: {:?}", MonitorSettings::config_path());
    println!();
    match serde_json::to_string_pretty(&settings) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: Could not serialize settings: {e}"),
    }
}
