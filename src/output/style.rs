//! Text styling

/// Semantic tone of a piece of console text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
    Err,
    Info,
}

/// Presentation capability applied to console text
pub trait Style {
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// No decoration
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI bright colours
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiStyle;

impl AnsiStyle {
    fn code(tone: Tone) -> &'static str {
        match tone {
            Tone::Ok => "\x1b[92m",
            Tone::Warn => "\x1b[93m",
            Tone::Err => "\x1b[91m",
            Tone::Info => "\x1b[96m",
        }
    }
}

impl Style for AnsiStyle {
    fn paint(&self, tone: Tone, text: &str) -> String {
        format!("{}{text}\x1b[0m", Self::code(tone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style() {
        assert_eq!(PlainStyle.paint(Tone::Err, "Failed: 1"), "Failed: 1");
    }

    #[test]
    fn test_ansi_style() {
        assert_eq!(AnsiStyle.paint(Tone::Ok, "Passed: 3"), "\x1b[92mPassed: 3\x1b[0m");
        assert!(AnsiStyle.paint(Tone::Warn, "x").starts_with("\x1b[93m"));
    }
}
