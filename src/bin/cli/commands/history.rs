use anyhow::Result;

use crate::app::App;
use crate::render::terminal::progress_bar;
use crate::OutputFormat;

pub fn run(app: &App, limit: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let history = app.session.daily().history();
    let recent: Vec<_> = history.iter().rev().take(limit).collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recent)?);
        }
        OutputFormat::Plain => {
            if recent.is_empty() {
                println!("No history yet.");
                return Ok(());
            }

            println!("{:<12} {:<22} Done", "Date", "Progress");
            println!(
                "{} {} {}",
                "\u{2500}".repeat(12),
                "\u{2500}".repeat(22),
                "\u{2500}".repeat(7)
            );

            for day in &recent {
                println!(
                    "{:<12} {} {}/{}",
                    day.id,
                    progress_bar(day.progress(), 20, use_color),
                    day.completed_count(),
                    day.total_count()
                );
            }

            println!("\n{} of {} days shown", recent.len(), history.len());
        }
    }

    Ok(())
}
