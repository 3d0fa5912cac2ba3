use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, progress_bar, render_phrase, Color, PhraseView};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let phrases = app.session.open_today();
    let daily = app.session.daily();
    let today = daily.today_set();
    let streak = app.session.progress().progress().current_streak;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": today.as_ref().map(|t| t.id.clone()),
                "completed": today.as_ref().map_or(0, |t| t.completed_count()),
                "total": phrases.len(),
                "streak": streak,
                "phrases": phrases.iter().map(|p| app.phrase_json(p)).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if phrases.is_empty() {
                println!("No phrases available. Check the phrases directory.");
                return Ok(());
            }

            let (date, done, fraction) = match &today {
                Some(set) => (set.id.as_str(), set.completed_count(), set.progress()),
                None => ("today", 0, 0.0),
            };

            println!(
                "{}  {} {}/{}  streak {}",
                paint(date, Color::BOLD, use_color),
                progress_bar(fraction, 20, use_color),
                done,
                phrases.len(),
                streak
            );
            println!("{}", "\u{2500}".repeat(60));

            for (i, phrase) in phrases.iter().enumerate() {
                let view = PhraseView {
                    language: app.language(),
                    show_translation: app.show_translations(),
                    completed: daily.is_completed(&phrase.id),
                    saved: daily.is_saved(&phrase.id),
                    use_color,
                };
                for line in render_phrase(phrase, Some(i), &view) {
                    println!("{}", line);
                }
                println!();
            }

            if today.as_ref().map_or(false, |t| t.is_complete()) {
                println!("{}", paint("All done for today!", Color::GREEN, use_color));
            }
        }
    }

    Ok(())
}
