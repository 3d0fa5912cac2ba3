use devlingo_lib::phrases::{Phrase, PhraseDifficulty, UserLanguage};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const STRIKETHROUGH: &str = "\x1b[9m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when color is on
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn difficulty_color(difficulty: PhraseDifficulty) -> &'static str {
    match difficulty {
        PhraseDifficulty::Easy => Color::GREEN,
        PhraseDifficulty::Medium => Color::YELLOW,
        PhraseDifficulty::Hard => Color::RED,
    }
}

/// Options for rendering a phrase card
pub struct PhraseView {
    pub language: UserLanguage,
    pub show_translation: bool,
    pub completed: bool,
    pub saved: bool,
    pub use_color: bool,
}

/// Render a phrase as an indented card
pub fn render_phrase(phrase: &Phrase, index: Option<usize>, view: &PhraseView) -> Vec<String> {
    let mut lines = Vec::new();

    let check = if view.completed { "[x]" } else { "[ ]" };
    let star = if view.saved { " *" } else { "" };
    let number = index.map(|i| format!("{:>2}. ", i + 1)).unwrap_or_default();

    let english = if view.completed {
        paint(&phrase.english, Color::STRIKETHROUGH, view.use_color)
    } else {
        paint(&phrase.english, Color::BOLD, view.use_color)
    };
    lines.push(format!("{}{} {}{}", number, check, english, star));

    let indent = " ".repeat(number.len() + 4);
    if view.show_translation {
        let translation = phrase.translation(view.language);
        if translation != phrase.english {
            for line in wrap_lines(translation, &indent, 80) {
                lines.push(paint(&line, Color::ITALIC, view.use_color));
            }
        }
    }

    for line in wrap_lines(&phrase.context, &indent, 80) {
        lines.push(paint(&line, Color::DIM, view.use_color));
    }

    let tag = format!(
        "{} \u{00b7} {}",
        phrase.category.label(),
        paint(
            phrase.difficulty.label(),
            difficulty_color(phrase.difficulty),
            view.use_color
        )
    );
    lines.push(format!("{}{} {}", indent, paint(&phrase.id, Color::GRAY, view.use_color), tag));

    lines
}

/// A fixed-width bar like `[#####-----]`
pub fn progress_bar(fraction: f64, width: usize, use_color: bool) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(width - filled));
    format!("[{}]", paint(&bar, Color::CYAN, use_color))
}

/// Simple word-wrapping for terminal output
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.len() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= effective_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(format!("{}{}", prefix, current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(format!("{}{}", prefix, current_line));
        }
    }

    lines
}

/// Truncate to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
