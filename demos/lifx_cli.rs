//! CLI application for controlling LIFX lights through the HTTP API.
//!
//! Reads the access token from `LIFX_API_ACCESS_TOKEN` unless `--token` is given.
//!
//! Run with: cargo run --example lifx_cli -- --help

use clap::{Parser, Subcommand};
use filament::{
    ActivateScene, Client, Cycle, Direction, Effect, Power, Response, State, StateDelta, Toggle,
};

#[derive(Parser)]
#[command(name = "lifx-cli")]
#[command(about = "Control LIFX lights from the command line", long_about = None)]
struct Cli {
    /// Access token (defaults to $LIFX_API_ACCESS_TOKEN)
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Selector for commands acting on lights (default: all)
    #[arg(short, long, global = true, default_value = "")]
    selector: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the lights matching the selector
    List,

    /// List the scenes on the account
    Scenes,

    /// Ask the API to parse a color string
    Color {
        /// Color string, e.g. "red" or "hue:120 saturation:1.0"
        color: String,
    },

    /// Turn the lights on
    On,

    /// Turn the lights off
    Off,

    /// Toggle power
    Toggle {
        /// Transition time in seconds
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Set color and/or brightness
    Set {
        #[arg(short, long)]
        color: Option<String>,
        /// Brightness between 0.0 and 1.0
        #[arg(short, long)]
        brightness: Option<f64>,
        /// Transition time in seconds
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Change brightness by a relative amount
    Dim {
        /// Amount between -1.0 and 1.0
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Flash between colors
    Pulse {
        color: String,
        #[arg(short, long, default_value = "3")]
        cycles: f64,
    },

    /// Fade between colors
    Breathe {
        color: String,
        #[arg(short, long, default_value = "2")]
        period: f64,
    },

    /// Cycle the lights through a list of colors
    Cycle {
        colors: Vec<String>,
        #[arg(short, long)]
        backward: bool,
    },

    /// Activate a scene by uuid
    Activate {
        uuid: String,
        #[arg(short, long)]
        duration: Option<f64>,
    },
}

fn report(response: Response) {
    for result in &response.results {
        println!("  {:20} {:14} {}", result.label, result.id, result.status);
    }
    let failed = response.failed().count();
    if failed > 0 {
        eprintln!("{} light(s) did not apply the change", failed);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let client = match &cli.token {
        Some(token) => Client::new(token)?,
        None => Client::from_env()?,
    };
    let selector = cli.selector.as_str();

    match cli.command {
        Commands::List => {
            let devices = client.list_lights(selector).await?;
            if devices.is_empty() {
                println!("No lights matched.");
            }
            for device in devices {
                println!(
                    "  {:20} {:4} brightness {:.2}  {}  [{} / {}]",
                    device.label,
                    device.power,
                    device.brightness,
                    device.color,
                    device.location.name,
                    device.group.name,
                );
            }
        }

        Commands::Scenes => {
            for scene in client.list_scenes().await? {
                println!(
                    "  {}  {} ({} state(s))",
                    scene.uuid,
                    scene.name,
                    scene.states.len()
                );
            }
        }

        Commands::Color { color } => {
            let parsed = client.validate_color(&color).await?;
            println!("{}", parsed);
        }

        Commands::On => {
            let mut state = State::new();
            state.power(Power::On);
            report(client.set_state(selector, &state).await?);
        }

        Commands::Off => {
            let mut state = State::new();
            state.power(Power::Off);
            report(client.set_state(selector, &state).await?);
        }

        Commands::Toggle { duration } => {
            let mut toggle = Toggle::new();
            if let Some(duration) = duration {
                toggle.duration(duration);
            }
            report(client.toggle_power_with(selector, &toggle).await?);
        }

        Commands::Set {
            color,
            brightness,
            duration,
        } => {
            let mut state = State::new();
            if let Some(color) = color {
                state.color(color);
            }
            if let Some(brightness) = brightness {
                state.brightness(brightness);
            }
            if let Some(duration) = duration {
                state.duration(duration);
            }
            if state.is_empty() {
                return Err("nothing to set; pass --color, --brightness or --duration".into());
            }
            report(client.set_state(selector, &state).await?);
        }

        Commands::Dim { amount } => {
            let mut delta = StateDelta::new();
            delta.brightness(amount);
            report(client.state_delta(selector, &delta).await?);
        }

        Commands::Pulse { color, cycles } => {
            let mut effect = Effect::new();
            effect.color(&color);
            effect.cycles(cycles);
            report(client.pulse_effect(selector, &effect).await?);
        }

        Commands::Breathe { color, period } => {
            let mut effect = Effect::new();
            effect.color(&color);
            effect.period(period);
            report(client.breathe_effect(selector, &effect).await?);
        }

        Commands::Cycle { colors, backward } => {
            let mut cycle: Cycle = colors
                .into_iter()
                .map(|color| {
                    let mut state = State::new();
                    state.color(color);
                    state
                })
                .collect();
            if backward {
                cycle.direction(Direction::Backward);
            }
            report(client.cycle(selector, &cycle).await?);
        }

        Commands::Activate { uuid, duration } => {
            let mut body = ActivateScene::new();
            if let Some(duration) = duration {
                body.duration(duration);
            }
            report(client.activate_scene(&uuid, &body).await?);
        }
    }

    Ok(())
}
