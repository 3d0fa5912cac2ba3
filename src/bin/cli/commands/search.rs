use anyhow::Result;

use crate::app::App;
use crate::render::terminal::truncate;
use crate::OutputFormat;

pub fn run(
    app: &App,
    query: &str,
    limit: usize,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let mut results = app.session.catalog().search(query);
    results.truncate(limit);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = results.iter().map(|p| app.phrase_json(p)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if results.is_empty() {
                println!("No results found for '{}'.", query);
                return Ok(());
            }

            let id_w = results.iter().map(|p| p.id.len()).max().unwrap_or(2).clamp(2, 24);
            let text_w = 50;

            println!("{:<id_w$} {:<text_w$} {}", "Id", "Phrase", "Category", id_w = id_w, text_w = text_w);
            println!(
                "{} {} {}",
                "\u{2500}".repeat(id_w),
                "\u{2500}".repeat(text_w),
                "\u{2500}".repeat(16)
            );

            for phrase in &results {
                println!(
                    "{:<id_w$} {:<text_w$} {}",
                    truncate(&phrase.id, id_w),
                    truncate(&phrase.english, text_w),
                    phrase.category.label(),
                    id_w = id_w,
                    text_w = text_w
                );
            }

            println!("\n{} results", results.len());
        }
    }

    Ok(())
}
