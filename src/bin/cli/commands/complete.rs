use anyhow::{bail, Result};

use devlingo_lib::Completion;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let phrase = app.find_phrase(id)?;
    let outcome = app.session.complete(id);
    let progress = app.session.progress().progress();

    let newly_completed = match outcome {
        Completion::Recorded(_) => true,
        Completion::AlreadyCompleted => false,
        Completion::UnknownPhrase => bail!("No phrase with id '{}'", id),
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": phrase.id,
                "newlyCompleted": newly_completed,
                "totalPhrasesLearned": progress.total_phrases_learned,
                "currentStreak": progress.current_streak,
                "level": progress.level(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if newly_completed {
                println!(
                    "{} {}",
                    paint("Learned:", Color::GREEN, use_color),
                    phrase.english
                );
                println!(
                    "  {} total, level {} ({} to next), streak {}",
                    progress.total_phrases_learned,
                    progress.level(),
                    progress.phrases_to_next_level(),
                    progress.current_streak
                );
            } else {
                println!("Already learned: {}", phrase.english);
            }
        }
    }

    Ok(())
}
