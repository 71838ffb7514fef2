use crate::error::LanguageError;

/// One classified line of a language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank lines, `//` comments and anything without meaning to the loader.
    Skip,
    /// `[Display Name]`, names the language.
    Header(&'a str),
    /// `key=value`, with the key already lowercased.
    Assignment { key: String, value: &'a str },
}

fn strip_inline_comment(line: &str) -> &str {
    match line.find("//") {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Classifies a single line. `number` is 1-based and only used for errors.
pub fn parse_line(line: &str, number: usize) -> Result<Line<'_>, LanguageError> {
    if line.trim().is_empty() || line.starts_with("//") {
        return Ok(Line::Skip);
    }

    if let Some(rest) = line.strip_prefix('[') {
        let rest = strip_inline_comment(rest);
        return match rest.find(']') {
            Some(end) => Ok(Line::Header(&rest[..end])),
            None => Err(LanguageError::MalformedHeader {
                line: number,
                text: line.to_string(),
            }),
        };
    }

    if !line.contains('=') {
        return Ok(Line::Skip);
    }

    let stripped = strip_inline_comment(line);
    match stripped.split_once('=') {
        Some((key, value)) => Ok(Line::Assignment {
            key: key.trim().to_lowercase(),
            value: value.trim(),
        }),
        // the only '=' sat inside the comment
        None => Ok(Line::Skip),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        assert_eq!(parse_line("", 1).unwrap(), Line::Skip);
        assert_eq!(parse_line("   \t", 1).unwrap(), Line::Skip);
        assert_eq!(parse_line("// genericok=Nope", 1).unwrap(), Line::Skip);
        assert_eq!(parse_line("just some words", 1).unwrap(), Line::Skip);
    }

    #[test]
    fn test_header() {
        assert_eq!(parse_line("[My Language]", 1).unwrap(), Line::Header("My Language"));
        assert_eq!(
            parse_line("[My Language] // the header", 1).unwrap(),
            Line::Header("My Language")
        );
    }

    #[test]
    fn test_header_without_closing_bracket_fails() {
        let err = parse_line("[Bad Header", 7).unwrap_err();
        assert!(matches!(err, LanguageError::MalformedHeader { line: 7, .. }));

        // a bracket that only appears inside the comment does not count
        assert!(parse_line("[Bad // Header]", 1).is_err());
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            parse_line("GenericOK = Sure thing ", 1).unwrap(),
            Line::Assignment { key: "genericok".to_string(), value: "Sure thing" }
        );
        assert_eq!(
            parse_line("genericok=a=b", 1).unwrap(),
            Line::Assignment { key: "genericok".to_string(), value: "a=b" }
        );
        assert_eq!(
            parse_line("genericok=", 1).unwrap(),
            Line::Assignment { key: "genericok".to_string(), value: "" }
        );
    }

    #[test]
    fn test_assignment_inline_comment_is_stripped() {
        assert_eq!(
            parse_line("genericok=Yes // translated by hand", 1).unwrap(),
            Line::Assignment { key: "genericok".to_string(), value: "Yes" }
        );
        assert_eq!(parse_line("genericok // =Yes", 1).unwrap(), Line::Skip);
    }
}
