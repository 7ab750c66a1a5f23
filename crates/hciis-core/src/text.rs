//! Text preprocessing and tokenization.
//!
//! Provides whitespace normalization, sentence splitting, and treebank-style
//! word tokenization shared by every analyzer. The splitter is rule-based and
//! bundled; [`Tokenizer::new`] is the explicit initialization step and the
//! only place tokenization can fail.

use regex::Regex;

use crate::dictionaries::abbreviations::{is_abbreviation, is_title};
use crate::error::{AnalysisError, AnalysisResult};

/// Clitic suffixes split off a word as their own token ("we're" -> "we", "'re").
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Collapse every whitespace run (newlines included) to one space and trim.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a token consists only of alphabetic characters.
///
/// Tokens such as `"3.14"`, `"n't"`, or `"."` are not alphabetic.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Keep only the alphabetic tokens.
pub fn alphabetic_only(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| is_alphabetic(t)).collect()
}

/// Rule-based sentence and word tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    decimal: Regex,
    url: Regex,
    email: Regex,
    initials: Regex,
}

impl Tokenizer {
    /// Compile the boundary-detection patterns.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TokenizerUnavailable`] if a pattern fails to
    /// compile.
    pub fn new() -> AnalysisResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| AnalysisError::TokenizerUnavailable(e.to_string()))
        };
        Ok(Self {
            decimal: compile(r"\d+\.\d+")?,
            url: compile(r"(?:https?://|www\.)\S+")?,
            email: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            initials: compile(r"\b[A-Z]\.(?:[A-Z]\.)*")?,
        })
    }

    /// Split text into sentences with abbreviation, decimal, URL, and email
    /// awareness. Order is preserved; empty input yields no sentences.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn sentences(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        let mut current = String::new();
        let chars: Vec<char> = text.chars().collect();

        for (i, &ch) in chars.iter().enumerate() {
            current.push(ch);

            if is_sentence_terminator(ch) && !continues_terminator(&chars, i) {
                let context = extract_context(&chars, i);
                if self.is_sentence_boundary(&context, &current) {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
            }
        }

        push_sentence(&mut sentences, &current);
        sentences
    }

    /// Split text into lower-cased word tokens.
    ///
    /// Leading and trailing punctuation become separate tokens, runs of
    /// periods stay together (`"..."`), and clitics are split off
    /// (`"can't"` -> `"ca"`, `"n't"`). Inside a sentence a trailing period
    /// stays attached to known abbreviations and initials (`"dr."`,
    /// `"u.s."`); the sentence-final period is always its own token.
    pub fn words(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for sentence in self.sentences(text) {
            let chunks: Vec<&str> = sentence.split_whitespace().collect();
            let last = chunks.len().saturating_sub(1);
            for (i, chunk) in chunks.iter().enumerate() {
                tokenize_chunk(&chunk.to_lowercase(), i == last, &mut tokens);
            }
        }
        tokens
    }

    fn is_sentence_boundary(&self, context: &SentenceContext, current_sentence: &str) -> bool {
        if context.is_end_of_text {
            return true;
        }

        if context.punctuation == '!' || context.punctuation == '?' {
            return check_next_char_capitalization(context);
        }

        if abbreviation_continues(&context.word_before, context.char_after)
            || self.is_likely_initial(&context.word_before)
        {
            return false;
        }

        if current_sentence.ends_with("..") {
            return false;
        }

        if self.tail_matches(&self.decimal, current_sentence, 10)
            || self.tail_matches(&self.url, current_sentence, 50)
            || self.tail_matches(&self.email, current_sentence, 50)
        {
            return false;
        }

        // Digit after period following a digit = decimal number (e.g., "3.14")
        if let Some(next_char) = context.char_after
            && next_char.is_ascii_digit()
            && context
                .word_before
                .chars()
                .last()
                .is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        match context.char_after {
            Some(next_char) if next_char.is_lowercase() => false,
            _ => true,
        }
    }

    fn is_likely_initial(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if word.chars().count() == 2
            && word.chars().next().is_some_and(char::is_uppercase)
            && word.ends_with('.')
        {
            return true;
        }
        self.initials.is_match(word)
    }

    /// Match `pattern` against the last `window` characters of `sentence`.
    fn tail_matches(&self, pattern: &Regex, sentence: &str, window: usize) -> bool {
        let start = sentence
            .char_indices()
            .rev()
            .nth(window.saturating_sub(1))
            .map_or(0, |(idx, _)| idx);
        pattern.is_match(&sentence[start..])
    }
}

fn push_sentence(sentences: &mut Vec<String>, current: &str) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// A terminator immediately followed by another terminator ("?!", "...")
/// defers the boundary decision to the last one in the run.
fn continues_terminator(chars: &[char], pos: usize) -> bool {
    chars.get(pos + 1).copied().is_some_and(is_sentence_terminator)
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    text_after: String,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        word_before: word_before(chars, pos),
        char_after: chars.get(after_start).copied(),
        text_after: chars[after_start..].iter().take(20).collect(),
        is_end_of_text: after_start >= chars.len(),
    }
}

/// Longest run `word_before` will look back over. Abbreviations and
/// initials fit comfortably; dotted runs longer than this are not words.
const WORD_WINDOW: usize = 32;

fn word_before(chars: &[char], pos: usize) -> String {
    let floor = pos.saturating_sub(WORD_WINDOW);
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > floor {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    let word_floor = i.saturating_sub(WORD_WINDOW);
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == word_floor {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    match context.char_after {
        Some('"' | '\'') => context
            .text_after
            .chars()
            .nth(1)
            .is_none_or(|c| !c.is_lowercase()),
        _ => true,
    }
}

/// Whether a period after `word` belongs to an abbreviation rather than
/// ending the sentence.
fn abbreviation_continues(word: &str, char_after: Option<char>) -> bool {
    let word_clean = word.trim_end_matches('.');
    if word_clean.is_empty() {
        return false;
    }
    // Single uppercase letter = likely initial
    let mut letters = word_clean.chars();
    if matches!((letters.next(), letters.next()), (Some(c), None) if c.is_uppercase()) {
        return true;
    }
    if is_title(word_clean) {
        return true;
    }
    is_abbreviation(word_clean) && !char_after.is_some_and(char::is_uppercase)
}

/// Split one whitespace-delimited, lower-cased chunk into tokens.
fn tokenize_chunk(chunk: &str, sentence_final: bool, out: &mut Vec<String>) {
    let chunk = chunk.replace('\u{2019}', "'");
    let chars: Vec<char> = chunk.chars().collect();

    let Some(first) = chars.iter().position(|c| c.is_alphanumeric()) else {
        // Pure punctuation ("--", "...", "!")
        push_punctuation(&chars, out);
        return;
    };
    let last = chars
        .iter()
        .rposition(|c| c.is_alphanumeric())
        .unwrap_or(first);

    push_punctuation(&chars[..first], out);

    let mut core: String = chars[first..=last].iter().collect();
    let mut trailing = &chars[last + 1..];

    // Keep the period on abbreviations and dotted initials
    if !sentence_final
        && trailing.first() == Some(&'.')
        && (is_abbreviation(&core) || core.contains('.'))
    {
        core.push('.');
        trailing = &trailing[1..];
    }

    push_word(&core, out);
    push_punctuation(trailing, out);
}

fn push_word(core: &str, out: &mut Vec<String>) {
    for clitic in CLITICS {
        if let Some(stem) = core.strip_suffix(clitic)
            && !stem.is_empty()
        {
            out.push(stem.to_string());
            out.push((*clitic).to_string());
            return;
        }
    }
    out.push(core.to_string());
}

/// Emit punctuation one character per token, except runs of periods.
fn push_punctuation(chars: &[char], out: &mut Vec<String>) {
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '.' {
            let run = chars[i..].iter().take_while(|c| **c == '.').count();
            out.push(".".repeat(run));
            i += run;
        } else {
            out.push(chars[i].to_string());
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new().unwrap()
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Hello\n\n  world\t again  "), "Hello world again");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(" a \n b  c ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn basic_sentences() {
        let sentences = tokenizer().sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
        assert_eq!(sentences[1], "This is another sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = tokenizer().sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn abbreviation_before_capital_ends_sentence() {
        let sentences = tokenizer().sentences("Bring pens, paper, etc. The rest is provided.");
        assert_eq!(sentences.len(), 2);
        let sentences = tokenizer().sentences("Bring pens etc. and paper.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = tokenizer().sentences("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = tokenizer().sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn repeated_terminators_stay_together() {
        let sentences = tokenizer().sentences("Really?! Yes. Wait... Then go.");
        assert_eq!(sentences[0], "Really?!");
        assert_eq!(sentences[1], "Yes.");
    }

    #[test]
    fn trailing_text_without_terminator_is_a_sentence() {
        let sentences = tokenizer().sentences("First one. second part without end");
        assert_eq!(sentences.len(), 1);
        let sentences = tokenizer().sentences("First one. Second part without end");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "Second part without end");
    }

    #[test]
    fn empty_input() {
        let t = tokenizer();
        assert!(t.sentences("").is_empty());
        assert!(t.sentences("   ").is_empty());
        assert!(t.words("").is_empty());
    }

    #[test]
    fn words_split_punctuation() {
        let words = tokenizer().words("Hello, world! This is a test.");
        assert_eq!(
            words,
            vec!["hello", ",", "world", "!", "this", "is", "a", "test", "."]
        );
    }

    #[test]
    fn words_split_clitics() {
        let words = tokenizer().words("We can't stop, it's done.");
        assert_eq!(
            words,
            vec!["we", "ca", "n't", "stop", ",", "it", "'s", "done", "."]
        );
    }

    #[test]
    fn words_keep_abbreviation_periods() {
        let words = tokenizer().words("Ask Dr. Smith in the U.S. now.");
        assert!(words.contains(&"dr.".to_string()));
        assert!(words.contains(&"u.s.".to_string()));
        assert_eq!(words.last().map(String::as_str), Some("."));
    }

    #[test]
    fn sentence_final_abbreviation_splits_period() {
        let words = tokenizer().words("The fox sat in. It ran.");
        assert_eq!(words, vec!["the", "fox", "sat", "in", ".", "it", "ran", "."]);
    }

    #[test]
    fn words_keep_ellipsis_and_numbers() {
        let words = tokenizer().words("(Wait... 3.14)");
        assert_eq!(words, vec!["(", "wait", "...", "3.14", ")"]);
    }

    #[test]
    fn curly_apostrophes_are_clitics() {
        let words = tokenizer().words("They\u{2019}re here");
        assert_eq!(words, vec!["they", "'re", "here"]);
    }

    #[test]
    fn alphabetic_filter() {
        assert!(is_alphabetic("fox"));
        assert!(!is_alphabetic("n't"));
        assert!(!is_alphabetic("3.14"));
        assert!(!is_alphabetic("."));
        assert!(!is_alphabetic(""));
        let kept = alphabetic_only(tokenizer().words("It's 5 o'clock, go!"));
        assert_eq!(kept, vec!["it", "go"]);
    }

    #[test]
    fn word_before_is_bounded() {
        let chars: Vec<char> = "a.".repeat(1_000).chars().collect();
        let word = word_before(&chars, chars.len() - 1);
        assert!(word.chars().count() <= WORD_WINDOW + 1);
    }

    #[test]
    fn word_before_keeps_short_words() {
        let chars: Vec<char> = "See the U.S. today".chars().collect();
        // position of the period after "S"
        assert_eq!(word_before(&chars, 11), "U.S");
    }

    #[test]
    fn long_dotted_run_splits_in_linear_time() {
        let text = "a.".repeat(200_000);
        let started = std::time::Instant::now();
        let sentences = tokenizer().sentences(&text);
        assert_eq!(sentences.len(), 1);
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }
}
