use anyhow::{Context, Result};

use devlingo_lib::phrases::UserLanguage;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &mut App, code: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    if let Some(code) = code {
        let language = app.find_language(code)?;
        app.session
            .set_language(language)
            .context("Failed to save settings")?;
        log::info!(
            "Language set to {} in {}",
            language.code(),
            app.data_dir.join("settings.json").display()
        );
    }

    let current = app.language();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "language": current.code(),
                "name": current.english_name(),
                "nativeName": current.native_name(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for language in UserLanguage::ALL {
                let line = format!(
                    "{:<8} {:<12} {}",
                    language.code(),
                    language.english_name(),
                    language.native_name()
                );
                if language == current {
                    println!("{} {}", paint("*", Color::GREEN, use_color), paint(&line, Color::BOLD, use_color));
                } else {
                    println!("  {}", line);
                }
            }
        }
    }

    Ok(())
}
