//! Profanity Gate: reject submissions containing disallowed words before any scoring.
//!
//! The dictionary is the built-in list in `data/profanity_words.txt` plus the classroom
//! extension list ([`DOMAIN_EXTENSIONS`]). Deployments can merge extra terms from a file
//! (one term per line) or from configuration. Matching runs on the raw, unexpanded text.

use crate::error::{MoodError, MoodResult};
use regex::Regex;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Built-in dictionary shipped with the crate.
const BUILTIN_WORDS: &str = include_str!("../data/profanity_words.txt");

/// Classroom additions on top of the general dictionary.
pub const DOMAIN_EXTENSIONS: &[&str] = &["idiot", "stupid", "dumb", "kill", "fool"];

/// Characters that count as part of a word, so `a$$` is one token.
const WORD_CLASS: &str = r"\w@$*";

/// Checks text against a dictionary of disallowed words (case-insensitive, whole word,
/// common character substitutions).
#[derive(Debug, Default)]
pub struct ProfanityGate {
    terms: Vec<String>,
    /// Compiled alternation of every term; `None` when the dictionary is empty.
    pattern: Option<Regex>,
}

impl ProfanityGate {
    /// Create an empty gate (no terms; nothing is flagged).
    pub fn empty() -> Self {
        Self {
            terms: Vec::new(),
            pattern: None,
        }
    }

    /// Built-in dictionary plus [`DOMAIN_EXTENSIONS`].
    pub fn with_defaults() -> MoodResult<Self> {
        let mut terms = parse_terms(BUILTIN_WORDS.lines());
        terms.extend(DOMAIN_EXTENSIONS.iter().map(|t| t.to_string()));
        Self::from_terms(terms)
    }

    /// Build a gate from a list of terms. Blank terms are dropped, duplicates collapsed.
    pub fn from_terms(terms: Vec<String>) -> MoodResult<Self> {
        let mut gate = Self::empty();
        gate.set_terms(terms)?;
        Ok(gate)
    }

    /// Merge additional terms (e.g. from configuration). Preserves existing terms.
    pub fn extend_terms<I, S>(&mut self, extra: I) -> MoodResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms = std::mem::take(&mut self.terms);
        terms.extend(extra.into_iter().map(|t| t.as_ref().to_string()));
        self.set_terms(terms)
    }

    /// Merge terms from a word-list file. A missing file adds nothing.
    pub fn merge_terms_from_path(&mut self, path: &Path) -> MoodResult<()> {
        let extra = Self::read_terms_from_path(path)?;
        tracing::debug!(path = %path.display(), count = extra.len(), "merging profanity terms");
        self.extend_terms(extra)
    }

    /// Read terms from a file (one per line; empty and # lines ignored).
    pub fn read_terms_from_path(path: &Path) -> std::io::Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let f = fs::File::open(path)?;
        let mut lines = Vec::new();
        for line in std::io::BufReader::new(f).lines() {
            lines.push(line?);
        }
        Ok(parse_terms(lines.iter().map(String::as_str)))
    }

    fn set_terms(&mut self, terms: Vec<String>) -> MoodResult<()> {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        terms.sort();
        terms.dedup();
        self.terms = terms;
        self.rebuild_pattern()
    }

    fn rebuild_pattern(&mut self) -> MoodResult<()> {
        if self.terms.is_empty() {
            self.pattern = None;
            return Ok(());
        }
        let alternation = self
            .terms
            .iter()
            .map(|t| term_pattern(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern_str = format!(
            r"(?i)(?:^|[^{w}])(?:{alt})(?:[^{w}]|$)",
            w = WORD_CLASS,
            alt = alternation
        );
        let pattern = Regex::new(&pattern_str)
            .map_err(|e| MoodError::Config(format!("profanity dictionary: {}", e)))?;
        self.pattern = Some(pattern);
        Ok(())
    }

    /// True if `text` contains any dictionary term.
    pub fn contains_profanity(&self, text: &str) -> bool {
        match &self.pattern {
            None => false,
            Some(r) => r.is_match(text),
        }
    }

    /// Return true if any terms are loaded.
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

fn parse_terms<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Substitutions a writer might use to dodge the filter.
fn variants(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("a@*4"),
        'e' => Some("e*3"),
        'i' => Some("i*l1"),
        'l' => Some("l1"),
        'o' => Some("o*0@"),
        's' => Some("s$5"),
        't' => Some("t7"),
        'u' => Some("u*v"),
        'v' => Some("v*u"),
        _ => None,
    }
}

/// Regex fragment for one term: each letter becomes a class of its variants,
/// whitespace inside multi-word terms matches any whitespace run.
fn term_pattern(term: &str) -> String {
    let mut out = String::new();
    let mut in_space = false;
    for c in term.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push_str(r"\s+");
            }
            in_space = true;
            continue;
        }
        in_space = false;
        match variants(c) {
            Some(set) => {
                out.push('[');
                out.push_str(&regex::escape(set));
                out.push(']');
            }
            None => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> ProfanityGate {
        ProfanityGate::with_defaults().unwrap()
    }

    #[test]
    fn empty_gate_flags_nothing() {
        let g = ProfanityGate::empty();
        assert!(!g.is_active());
        assert!(!g.contains_profanity("you are a stupid idiot"));
    }

    #[test]
    fn domain_extensions_are_flagged() {
        let g = gate();
        for word in DOMAIN_EXTENSIONS {
            assert!(g.contains_profanity(&format!("you are a {}", word)), "{word} not flagged");
        }
        assert!(g.contains_profanity("you are a stupid idiot"));
    }

    #[test]
    fn general_dictionary_is_flagged() {
        let g = gate();
        assert!(g.term_count() > 300);
        for word in ["porn", "boobs", "tits", "horny", "penis", "bullshit", "wank"] {
            assert!(g.contains_profanity(&format!("you are {}", word)), "{word} not flagged");
        }
        assert!(g.contains_profanity("piece   of shit"));
    }

    #[test]
    fn case_insensitive() {
        let g = gate();
        assert!(g.contains_profanity("STUPID game"));
        assert!(g.contains_profanity("What the Fuck"));
    }

    #[test]
    fn whole_words_only() {
        let g = gate();
        assert!(!g.contains_profanity("I learned a new skill today"));
        assert!(!g.contains_profanity("I passed my class"));
        assert!(!g.contains_profanity("The dumbbells were heavy"));
        assert!(!g.contains_profanity("I feel happy and proud"));
    }

    #[test]
    fn character_substitutions_are_caught() {
        let g = gate();
        assert!(g.contains_profanity("you are so st*pid"));
        assert!(g.contains_profanity("what a f00l"));
        assert!(g.contains_profanity("sh1t happens"));
        assert!(g.contains_profanity("kiss my a$$"));
    }

    #[test]
    fn multi_word_terms_match_any_spacing() {
        let g = gate();
        assert!(g.contains_profanity("oh screw   you"));
    }

    #[test]
    fn punctuation_bounds_words() {
        let g = gate();
        assert!(g.contains_profanity("idiot!"));
        assert!(g.contains_profanity("(dumb)"));
    }

    #[test]
    fn extra_terms_merge_with_defaults() {
        let mut g = gate();
        let before = g.term_count();
        assert!(!g.contains_profanity("that is so lame"));
        g.extend_terms(["lame", "  ", "idiot"]).unwrap();
        assert_eq!(g.term_count(), before + 1);
        assert!(g.contains_profanity("that is so lame"));
    }

    #[test]
    fn merge_from_file_ignores_comments_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# classroom list\n\nloser\n  nerd  \n").unwrap();

        let mut g = ProfanityGate::empty();
        g.merge_terms_from_path(&path).unwrap();
        assert_eq!(g.term_count(), 2);
        assert!(g.contains_profanity("what a loser"));
        assert!(g.contains_profanity("NERD"));
    }

    #[test]
    fn missing_word_list_adds_nothing() {
        let mut g = ProfanityGate::empty();
        g.merge_terms_from_path(Path::new("/nonexistent/words.txt")).unwrap();
        assert!(!g.is_active());
    }
}
