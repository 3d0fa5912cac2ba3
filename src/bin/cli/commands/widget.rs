use anyhow::{bail, Result};
use chrono::{Local, Timelike};

use devlingo_lib::widget::entry_at;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, hour: Option<u32>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let hour = hour.unwrap_or_else(|| Local::now().hour());
    if hour > 23 {
        bail!("Hour must be between 0 and 23, got {}", hour);
    }

    let entries = app.session.widget().entries();
    let entry = entry_at(&entries, hour);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "hour": hour,
                "entries": entries.len(),
                "phrase": entry,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let Some(entry) = entry else {
                println!("Widget feed is empty. Run `devlingo-cli today` first.");
                return Ok(());
            };

            println!("{}", paint(&entry.english, Color::BOLD, use_color));
            if app.show_translations() && entry.translation != entry.english {
                println!("{}", paint(&entry.translation, Color::ITALIC, use_color));
            }
            println!("{}", paint(&entry.context, Color::DIM, use_color));
            println!("{} \u{00b7} {}", entry.category, entry.difficulty);
        }
    }

    Ok(())
}
