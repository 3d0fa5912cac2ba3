use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::{render_phrase, PhraseView};
use crate::OutputFormat;

pub fn run_toggle(app: &App, id: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let phrase = app.find_phrase(id)?;
    let saved = app
        .session
        .toggle_saved(id)
        .context(format!("No phrase with id '{}'", id))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": phrase.id,
                "saved": saved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let verb = if saved { "Saved" } else { "Removed" };
            println!("{}: {}", verb, phrase.english);
        }
    }

    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let daily = app.session.daily();
    let phrases = daily.saved_phrases();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = phrases.iter().map(|p| app.phrase_json(p)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if phrases.is_empty() {
                println!("No saved phrases.");
                return Ok(());
            }

            for phrase in &phrases {
                let view = PhraseView {
                    language: app.language(),
                    show_translation: app.show_translations(),
                    completed: daily.is_completed(&phrase.id),
                    saved: true,
                    use_color,
                };
                for line in render_phrase(phrase, None, &view) {
                    println!("{}", line);
                }
                println!();
            }

            println!("{} saved phrases", phrases.len());
        }
    }

    Ok(())
}
