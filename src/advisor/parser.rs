//! Parsing of free oracle text into bullet tips

use once_cell::sync::Lazy;
use regex::Regex;

use super::fallback::TIPS_PER_ANSWER;

/// Minimum bullets an oracle answer must carry to be used as tips
pub const MIN_PARSED_TIPS: usize = 2;

/// Oracle answers shorter than this are treated as canned text
pub const MIN_ORACLE_TEXT_LEN: usize = 100;

static BULLET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*•\s*(.+?)\s*$").expect("bullet pattern is valid")
});

/// Up to three `•` tips from oracle text; `None` with fewer than two
pub fn parse_tips(text: &str) -> Option<Vec<String>> {
    let tips: Vec<String> = BULLET_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| format!("• {}", m.as_str()))
        .take(TIPS_PER_ANSWER)
        .collect();

    (tips.len() >= MIN_PARSED_TIPS).then_some(tips)
}

/// Heuristic for answers that carry no oracle value
pub fn looks_like_fallback(text: &str) -> bool {
    text.contains("Focus on the fundamentals")
        || text.contains("Build an emergency fund")
        || text.chars().count() < MIN_ORACLE_TEXT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tips() {
        let text = "Here you go:\n• Save first  \n  • Pay card debt\nnoise\n• Invest monthly\n• Extra";
        let tips = parse_tips(text).unwrap();
        assert_eq!(
            tips,
            vec!["• Save first", "• Pay card debt", "• Invest monthly"]
        );
    }

    #[test]
    fn test_parse_tips_requires_two() {
        assert!(parse_tips("• Only one").is_none());
        assert!(parse_tips("no bullets at all").is_none());
    }

    #[test]
    fn test_looks_like_fallback() {
        assert!(looks_like_fallback("short"));
        let canned = format!("{} {}", "Focus on the fundamentals:", "x".repeat(200));
        assert!(looks_like_fallback(&canned));
        assert!(!looks_like_fallback(&"A long and specific answer. ".repeat(10)));
    }
}
