//! Collab CLI
//!
//! The `collab` command assembles collaborators and hands them to a
//! coordinator.
//!
//! ## Commands
//!
//! - `team`: run a developer team (default or from a roster file)
//! - `shapes`: draw a circle and a square
//! - `discount`: compute a regular or VIP discount
//! - `vehicles`: send a car and a bicycle on their way

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use collab_core::{
    vip, Bicycle, Capability, Car, Circle, Coordinator, Drawable, EngineKind, RegularDiscount,
    RoleName, Roster, RosterConfig, Square, METRICS,
};

#[derive(Parser)]
#[command(name = "collab")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run role-based collaborations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a developer team and print what each role produced
    Team {
        /// Roster file (JSON); defaults to a Python backend and a JavaScript frontend
        #[arg(short, long, env = "COLLAB_ROSTER")]
        roster: Option<PathBuf>,

        /// Print the full run report as JSON
        #[arg(long)]
        report: bool,
    },

    /// Draw a circle and a square through one coordinator
    Shapes {
        /// Circle radius
        #[arg(long, default_value = "1")]
        radius: u32,

        /// Square side
        #[arg(long, default_value = "1")]
        side: u32,
    },

    /// Compute a discount in cents
    Discount {
        /// Price in cents
        #[arg(long)]
        price_cents: u64,

        /// Customer tier
        #[arg(long, value_enum, default_value_t = Tier::Regular)]
        tier: Tier,
    },

    /// Run a car and a bicycle through one coordinator
    Vehicles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tier {
    Regular,
    Vip,
}

impl Tier {
    fn name(self) -> &'static str {
        match self {
            Tier::Regular => "regular",
            Tier::Vip => "vip",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    collab_core::init_tracing(cli.json, level);

    let output = match cli.command {
        Commands::Team { roster, report } => cmd_team(roster.as_deref(), report),
        Commands::Shapes { radius, side } => cmd_shapes(radius, side),
        Commands::Discount { price_cents, tier } => cmd_discount(price_cents, tier),
        Commands::Vehicles => cmd_vehicles(),
    }?;

    println!("{output}");
    METRICS.flush();
    Ok(())
}

fn role(name: &str) -> Result<RoleName> {
    RoleName::new(name).with_context(|| format!("invalid role name {name:?}"))
}

fn cmd_team(roster_path: Option<&Path>, report: bool) -> Result<String> {
    let config = match roster_path {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => RosterConfig::standard_team(),
    };
    let roster = config.build_roster().context("Invalid roster")?;
    info!(roles = roster.len(), "assembled team");

    let coordinator = Coordinator::new(roster);
    let run = coordinator.run_report().context("Team run failed")?;

    if report {
        return serde_json::to_string_pretty(&run).context("Failed to serialize run report");
    }
    Ok(run
        .entries
        .iter()
        .map(|e| format!("{}: {}", e.role, e.output))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_shapes(radius: u32, side: u32) -> Result<String> {
    let coordinator = Coordinator::new(
        Roster::new()
            .with(role("circle")?, Drawable::new(Circle::new(radius)))
            .with(role("square")?, Drawable::new(Square::new(side))),
    );
    let drawings = coordinator.run().context("Drawing failed")?;
    Ok(drawings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_discount(price_cents: u64, tier: Tier) -> Result<String> {
    let discount: Box<dyn Capability<Output = u64>> = match tier {
        Tier::Regular => Box::new(RegularDiscount::new(price_cents)),
        Tier::Vip => Box::new(vip(price_cents)),
    };
    let name = tier.name();

    let mut roster = Roster::new();
    roster.insert_boxed(role(name)?, discount);
    let amounts = Coordinator::new(roster)
        .run()
        .context("Discount calculation failed")?;

    Ok(amounts
        .iter()
        .map(|cents| format!("{name}: {cents}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_vehicles() -> Result<String> {
    let coordinator = Coordinator::new(
        Roster::new()
            .with(role("car")?, Car::new(EngineKind::Petrol))
            .with(role("bicycle")?, Bicycle),
    );
    Ok(coordinator.run().context("Vehicle run failed")?.join("\n"))
}
