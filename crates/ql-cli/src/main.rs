//! CLI frontend for Questline: manage a character and its quests in a save file.

mod commands;
mod save;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `QL_LOG=ql_quest=debug`).
const LOG_ENV: &str = "QL_LOG";

#[derive(Parser)]
#[command(
    name = "ql",
    about = "Questline: character progression and quests",
    version,
    propagate_version = true
)]
struct Cli {
    /// Save file to operate on
    #[arg(short, long, global = true, default_value = "ql-save.json")]
    save: PathBuf,

    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game with a fresh character
    New {
        /// Character name
        name: String,

        /// Character class
        #[arg(short, long, default_value = "Adventurer")]
        class: String,

        /// Load quests from a JSON file instead of the stock quests
        #[arg(short, long)]
        quests: Option<PathBuf>,

        /// Overwrite an existing save
        #[arg(short, long)]
        force: bool,
    },

    /// Show the character sheet
    Show,

    /// List quests and their state
    Quests {
        /// Only quests from this giver
        #[arg(short, long)]
        giver: Option<String>,
    },

    /// Accept a quest
    Accept {
        /// Quest ID (e.g. quest_1)
        id: String,
    },

    /// Record an objective as completed (e.g. "Goblin x 10")
    Objective {
        /// Objective text
        objective: String,
    },

    /// Turn in a quest and collect its reward
    Complete {
        /// Quest ID
        id: String,
    },

    /// Gain experience
    Exp {
        /// Amount of experience
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },

    /// Take a hit (reduced by defense)
    Damage {
        /// Raw damage
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },

    /// Restore HP
    Heal {
        /// HP to restore
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },

    /// Use a consumable from the inventory
    Use {
        /// Item ID (e.g. potion_hp50)
        item: String,

        /// Use it as if in battle
        #[arg(short, long)]
        battle: bool,
    },

    /// Equip an item from the catalog
    Equip {
        /// Item ID (e.g. iron_sword)
        item: String,
    },

    /// Remove the item in a slot
    Unequip {
        /// Slot: head, body, weapon, accessory
        slot: String,
    },

    /// Craft an item from inventory materials
    Craft {
        /// Recipe name (e.g. iron_blade)
        recipe: String,
    },

    /// Put items into the inventory
    Give {
        /// Item ID
        item: String,

        /// How many
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// Buy items with gold at their catalog value
    Buy {
        /// Item ID
        item: String,

        /// How many
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// Collect the rewards for defeating an enemy
    Defeat {
        /// Enemy ID (goblin, dragon)
        enemy: String,

        /// Scale the enemy to this level
        #[arg(short, long)]
        level: Option<u32>,

        /// RNG seed for the loot rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source currency (e.g. gold)
        from: String,

        /// Target currency (e.g. silver)
        to: String,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let save = cli.save.as_path();
    let result = match cli.command {
        Commands::New {
            name,
            class,
            quests,
            force,
        } => commands::new::run(save, &name, &class, quests.as_deref(), force),
        Commands::Show => commands::show::run(save),
        Commands::Quests { giver } => commands::quests::run(save, giver.as_deref()),
        Commands::Accept { id } => commands::accept::run(save, &id),
        Commands::Objective { objective } => commands::objective::run(save, &objective),
        Commands::Complete { id } => commands::complete::run(save, &id),
        Commands::Exp { amount } => commands::vitals::exp(save, amount),
        Commands::Damage { amount } => commands::vitals::damage(save, amount),
        Commands::Heal { amount } => commands::vitals::heal(save, amount),
        Commands::Use { item, battle } => commands::item::use_item(save, &item, battle),
        Commands::Equip { item } => commands::gear::equip(save, &item),
        Commands::Unequip { slot } => commands::gear::unequip(save, &slot),
        Commands::Craft { recipe } => commands::craft::run(save, &recipe),
        Commands::Give { item, count } => commands::give::run(save, &item, count),
        Commands::Buy { item, count } => commands::buy::run(save, &item, count),
        Commands::Defeat { enemy, level, seed } => {
            commands::defeat::run(save, &enemy, level, seed)
        }
        Commands::Convert { amount, from, to } => commands::convert::run(amount, &from, &to),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
