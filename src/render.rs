use crate::error::AgeError;
use crate::report::Report;

const MIN_ROW_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub dog_age: &'static str,
    pub human_age: &'static str,
    pub note: &'static str,
    pub error: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                dog_age: "#0366d6",
                human_age: "#d73a49",
                note: "#6a737d",
                error: "#cf222e",
            },
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                dog_age: "#a5d6ff",
                human_age: "#ffa657",
                note: "#8b949e",
                error: "#f85149",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?} (expected light or dark)")),
        }
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `key: ....... value`, padded with dots to `align_width`.
pub fn build_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let available = align_width.saturating_sub(key_part.len() + value.len());

    let dots = match available {
        0 => String::new(),
        1 => " ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn rows(report: &Report) -> [(&'static str, String); 4] {
    [
        ("Size", report.category.label().to_string()),
        ("Born", report.birth.to_string()),
        ("Dog age", report.dog_age_display()),
        ("Human age", format!("{} years", report.human_age)),
    ]
}

/// Plain-text result panel for the terminal.
pub fn render_text(report: &Report) -> String {
    let rows = rows(report);
    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let mut out = String::new();
    for (key, value) in &rows {
        out.push_str(&build_row(key, value, align_width));
        out.push('\n');
    }
    if let Some(note) = report.cap_note() {
        out.push_str(note);
        out.push('\n');
    }
    out
}

pub fn render_html(report: &Report, theme: Theme) -> String {
    let colors = theme.colors();
    let note = report
        .cap_note()
        .map(|n| format!("\n  <p class=\"note\">{}</p>", escape_html(n)))
        .unwrap_or_default();

    let body = format!(
        r#"  <p><strong>Size:</strong> {label}</p>
  <p>Your dog's actual age: <span class="dog-age">{dog_age}</span></p>
  <hr>
  <p>Human-equivalent age: <span class="human-age">{human_age} years</span></p>{note}"#,
        label = escape_html(report.category.label()),
        dog_age = escape_html(&report.dog_age_display()),
        human_age = report.human_age,
    );
    panel(&colors, &body)
}

pub fn render_error_html(err: &AgeError, theme: Theme) -> String {
    let colors = theme.colors();
    let body = format!(
        "  <p class=\"error\">{}</p>",
        escape_html(&err.user_message())
    );
    panel(&colors, &body)
}

fn panel(colors: &ThemeColors, body: &str) -> String {
    format!(
        r#"<section id="result-display" style="background: {bg}; color: {text};">
<style>
#result-display .dog-age   {{ color: {dog_age}; font-weight: bold; }}
#result-display .human-age {{ color: {human_age}; font-weight: bold; }}
#result-display .note      {{ color: {note}; font-size: 0.9em; }}
#result-display .error     {{ color: {error}; }}
</style>
{body}
</section>
"#,
        bg = colors.bg,
        text = colors.text,
        dog_age = colors.dog_age,
        human_age = colors.human_age,
        note = colors.note,
        error = colors.error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_align_to_width() {
        assert_eq!(build_row("Size", "small", 20), "Size: ........ small");
        assert_eq!(build_row("Size", "small", 20).len(), 20);
        assert_eq!(build_row("Size", "small", 11), "Size: small");
        assert_eq!(build_row("Size", "small", 12), "Size:  small");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
