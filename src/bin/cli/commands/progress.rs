use anyhow::Result;

use devlingo_lib::phrases::{PhraseCategory, PhraseDifficulty};

use crate::app::App;
use crate::render::terminal::{difficulty_color, paint, progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let progress = app.session.progress().progress();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "totalPhrasesLearned": progress.total_phrases_learned,
                "currentStreak": progress.current_streak,
                "longestStreak": progress.longest_streak,
                "lastActiveDate": progress.last_active_date,
                "level": progress.level(),
                "levelTitle": progress.level_title().to_string(),
                "levelProgress": progress.level_progress(),
                "phrasesToNextLevel": progress.phrases_to_next_level(),
                "phrasesByCategory": progress.phrases_by_category,
                "phrasesByDifficulty": progress.phrases_by_difficulty,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} {} ({})",
                paint("Level", Color::BOLD, use_color),
                progress.level(),
                progress.level_title()
            );
            println!(
                "{} {} to next level",
                progress_bar(progress.level_progress(), 20, use_color),
                progress.phrases_to_next_level()
            );
            println!();
            println!("Learned          {}", progress.total_phrases_learned);
            println!("Current streak   {} days", progress.current_streak);
            println!("Longest streak   {} days", progress.longest_streak);
            if let Some(date) = progress.last_active_date {
                println!("Last active      {}", date);
            }

            println!();
            println!("{:<18} {}", "Difficulty", "Learned");
            println!("{} {}", "\u{2500}".repeat(18), "\u{2500}".repeat(7));
            for difficulty in PhraseDifficulty::ALL {
                println!(
                    "{:<18} {}",
                    paint(difficulty.label(), difficulty_color(difficulty), use_color),
                    progress.difficulty_count(difficulty)
                );
            }

            println!();
            println!("{:<18} {}", "Category", "Learned");
            println!("{} {}", "\u{2500}".repeat(18), "\u{2500}".repeat(7));
            for category in PhraseCategory::ALL {
                let count = progress.category_count(category);
                if count > 0 {
                    println!("{:<18} {}", category.label(), count);
                }
            }
        }
    }

    Ok(())
}
