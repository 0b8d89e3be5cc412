pub mod accept;
pub mod buy;
pub mod complete;
pub mod convert;
pub mod craft;
pub mod defeat;
pub mod gear;
pub mod give;
pub mod item;
pub mod new;
pub mod objective;
pub mod quests;
pub mod show;
pub mod vitals;

use colored::Colorize;
use ql_progression::ProgressionEvent;

/// Print progression events as they happened to `name`.
fn print_events(name: &str, events: &[ProgressionEvent]) {
    for event in events {
        let line = format!("{name} {event}");
        match event {
            ProgressionEvent::LeveledUp { .. } => println!("  {}", line.green().bold()),
            ProgressionEvent::Defeated => println!("  {}", line.red().bold()),
            _ => println!("  {line}"),
        }
    }
}
