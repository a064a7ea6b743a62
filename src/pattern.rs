//! Pattern assembly.
//!
//! Turns a query plus a config into one compiled regex. Every alternative is
//! a literal, escaped individually before joining, so query text can never
//! inject pattern syntax.

use crate::config::MatcherConfig;
use crate::tables;
use regex::{Regex, RegexBuilder};

/// Builds the matchable pattern for `query` under `config`.
///
/// Returns `None` for an empty query: the match-nothing pattern. An empty
/// regex would match everything, which is the opposite of what an empty
/// search box means.
pub(crate) fn build(
    query: &str,
    config: &MatcherConfig,
) -> Result<Option<Regex>, regex::Error> {
    if query.is_empty() {
        return Ok(None);
    }

    let groups: Vec<String> = query
        .chars()
        .map(|c| position_group(c, config))
        .collect();

    let joiner = if config.strict { "" } else { ".*" };

    RegexBuilder::new(&groups.join(joiner))
        .case_insensitive(config.ignorecase)
        .build()
        .map(Some)
}

/// One query position: its alternative set rendered as an escaped literal
/// or a non-capturing alternation group.
fn position_group(c: char, config: &MatcherConfig) -> String {
    let alts = alternatives(c, config);
    if alts.len() == 1 {
        regex::escape(&alts[0])
    } else {
        let escaped: Vec<String> = alts.iter().map(|a| regex::escape(a)).collect();
        format!("(?:{})", escaped.join("|"))
    }
}

/// The acceptable literal alternatives for one query character, deduplicated,
/// in a fixed order: the character itself, its layout-mapped form, its
/// transliterations, then the transliterations of the layout-mapped form.
fn alternatives(c: char, config: &MatcherConfig) -> Vec<String> {
    let mut alts = vec![c.to_string()];
    // Unmapped characters fall back to themselves.
    let mapped = tables::layout_swap(c).unwrap_or(c);

    if config.multi {
        push_unique(&mut alts, mapped.to_string());
    }
    if config.translit {
        for t in tables::transliterations(c) {
            push_unique(&mut alts, (*t).to_string());
        }
    }
    // Smart transliterates what was actually typed under the wrong layout,
    // so it reads from the layout-mapped character, not the original.
    if config.smart && config.multi && config.translit {
        for t in tables::transliterations(mapped) {
            push_unique(&mut alts, (*t).to_string());
        }
    }

    alts
}

fn push_unique(alts: &mut Vec<String>, candidate: String) {
    if !alts.contains(&candidate) {
        alts.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_character_has_single_alternative() {
        let config = MatcherConfig::default();
        assert_eq!(alternatives('с', &config), vec!["с"]);
    }

    #[test]
    fn test_multi_and_translit_extend_the_set() {
        let config = MatcherConfig {
            multi: true,
            translit: true,
            ..Default::default()
        };
        // layout maps с to c, transliteration maps с to s
        assert_eq!(alternatives('с', &config), vec!["с", "c", "s"]);
    }

    #[test]
    fn test_duplicate_alternatives_are_dropped() {
        let config = MatcherConfig {
            multi: true,
            ..Default::default()
        };
        // An unmapped character layout-swaps to itself.
        assert_eq!(alternatives('7', &config), vec!["7"]);
    }

    #[test]
    fn test_smart_adds_transliteration_of_mapped_form() {
        let config = MatcherConfig {
            multi: true,
            translit: true,
            smart: true,
            ..Default::default()
        };
        // b -> layout и -> transliterations i and y; translit of b itself is б
        assert_eq!(alternatives('b', &config), vec!["b", "и", "б", "i", "y"]);
    }

    #[test]
    fn test_smart_is_inert_without_multi_and_translit() {
        let config = MatcherConfig {
            smart: true,
            translit: true,
            ..Default::default()
        };
        assert_eq!(alternatives('b', &config), vec!["b", "б"]);
    }

    #[test]
    fn test_metacharacters_are_escaped_per_alternative() {
        let config = MatcherConfig::default();
        let re = build(".+", &config).unwrap().unwrap();
        assert!(re.is_match("a.+b"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_empty_query_builds_no_pattern() {
        let config = MatcherConfig::default();
        assert!(build("", &config).unwrap().is_none());
    }

    #[test]
    fn test_non_strict_join_allows_gaps() {
        let config = MatcherConfig {
            strict: false,
            ..Default::default()
        };
        let re = build("ab", &config).unwrap().unwrap();
        assert!(re.is_match("a--b"));
        assert!(re.is_match("ab"));
        assert!(!re.is_match("b a"));
    }
}
