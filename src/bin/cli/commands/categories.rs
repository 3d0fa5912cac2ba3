use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{render_phrase, PhraseView};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let counts = app.session.catalog().category_counts();
    let progress = app.session.progress().progress();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = counts
                .iter()
                .map(|(category, count)| {
                    serde_json::json!({
                        "category": category.as_str(),
                        "label": category.label(),
                        "phrases": count,
                        "learned": progress.category_count(*category),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let name_w = counts
                .iter()
                .map(|(c, _)| c.label().len())
                .max()
                .unwrap_or(8)
                .max(8);

            println!("{:<name_w$} {:>7} {:>7}", "Category", "Phrases", "Learned", name_w = name_w);
            println!(
                "{} {} {}",
                "\u{2500}".repeat(name_w),
                "\u{2500}".repeat(7),
                "\u{2500}".repeat(7)
            );

            for (category, count) in &counts {
                println!(
                    "{:<name_w$} {:>7} {:>7}",
                    category.label(),
                    count,
                    progress.category_count(*category),
                    name_w = name_w
                );
            }

            println!("\n{} phrases total", app.session.catalog().len());
        }
    }

    Ok(())
}

pub fn run_show(app: &App, name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let category = app.find_category(name)?;
    let phrases = app.session.catalog().by_category(category);
    let daily = app.session.daily();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = phrases.iter().map(|p| app.phrase_json(p)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if phrases.is_empty() {
                println!("No phrases in {}.", category.label());
                return Ok(());
            }

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

            println!("{} phrases in {}", phrases.len(), category.label());
        }
    }

    Ok(())
}
