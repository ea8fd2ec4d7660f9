use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` terminal columns, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

/// Fold line breaks and tabs into spaces so text fits a single-line span.
pub fn single_line(s: &str) -> String {
    s.replace("\r\n", " ")
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect()
}

/// Left text and right text on one line of `width` columns, right text flush right.
pub fn spread(left: &str, right: &str, width: usize) -> (String, String) {
    let right_width = right.width();
    let left = truncate_with_ellipsis(left, width.saturating_sub(right_width + 1));
    let gap = width.saturating_sub(left.width() + right_width);
    (left, format!("{}{}", " ".repeat(gap), right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char takes two columns
        let truncated = truncate_with_ellipsis("日本語テキスト", 5);
        assert_eq!(truncated, "日本…");
        assert!(truncated.width() <= 5);
    }

    #[test]
    fn test_single_line_folds_breaks() {
        assert_eq!(single_line("<html>\r\n<body>\n502\tBad</body>"), "<html> <body> 502 Bad</body>");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn test_spread_fills_width() {
        let (left, right) = spread("Ana", "2 tkt", 12);
        assert_eq!(format!("{left}{right}"), "Ana    2 tkt");
    }

    #[test]
    fn test_spread_truncates_left_side() {
        let (left, right) = spread("Maria Fernanda Gonzalez", "2 tkt", 12);
        assert_eq!(right.trim_start(), "2 tkt");
        assert!(format!("{left}{right}").width() <= 12);
    }
}
