//! Line-based cleanup applied to fully materialized text blocks.

/// Here-document terminator that echoed shell commands leave behind.
const HEREDOC_SENTINEL: &str = "EOF";

/// Clean up a materialized text block for terminal display.
///
/// Works line by line: bare `EOF` here-document terminators are erased,
/// and markdown-style `**` headings get a blank line in front so they do
/// not run straight into the preceding prose. Applying the transform to
/// its own output changes nothing.
pub fn reflow(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line == HEREDOC_SENTINEL {
            lines.push("");
            continue;
        }
        if line.starts_with("**") && lines.last().map(|prev| !prev.is_empty()).unwrap_or(false) {
            lines.push("");
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heredoc_sentinel_becomes_blank_line() {
        assert_eq!(reflow("cat <<EOF\nhello\nEOF"), "cat <<EOF\nhello\n");
    }

    #[test]
    fn test_sentinel_must_be_the_whole_line() {
        assert_eq!(reflow("EOF marker"), "EOF marker");
        assert_eq!(reflow(" EOF"), " EOF");
    }

    #[test]
    fn test_blank_line_before_bold_heading() {
        assert_eq!(
            reflow("some prose\n**Heading**\nbody"),
            "some prose\n\n**Heading**\nbody"
        );
    }

    #[test]
    fn test_no_blank_line_for_leading_heading() {
        assert_eq!(reflow("**Heading**\nbody"), "**Heading**\nbody");
    }

    #[test]
    fn test_no_extra_blank_line_when_already_separated() {
        assert_eq!(
            reflow("prose\n\n**Heading**"),
            "prose\n\n**Heading**"
        );
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(reflow("one line\n"), "one line\n");
        assert_eq!(reflow("no newline"), "no newline");
    }

    #[test]
    fn test_reflow_is_idempotent() {
        let input = "intro\n**Section**\ncat <<EOF\ndata\nEOF\ntail";
        let once = reflow(input);
        assert_eq!(reflow(&once), once);
        assert!(!once.split('\n').any(|line| line == "EOF"));
    }
}
