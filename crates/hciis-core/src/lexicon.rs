//! Curated lexicons for the five analyzers.
//!
//! Two matching styles are used:
//!
//! - [`Lexicon`] holds single words and is matched by token membership
//!   against the lower-cased word sequence.
//! - [`PhraseLexicon`] holds words or multi-word phrases and is matched by
//!   substring containment against lower-cased text. Each entry counts at most
//!   once per searched text, no matter how often it occurs.
//!
//! The built-in set is constructed once per process by [`Lexicons::builtin`]
//! and shared read-only by every analyzer.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::emotion::Emotion;

/// A named set of single words.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: &'static str,
    entries: HashSet<&'static str>,
}

impl Lexicon {
    /// Build a lexicon from a list of lower-case words.
    pub fn new(name: &'static str, words: &[&'static str]) -> Self {
        Self {
            name,
            entries: words.iter().copied().collect(),
        }
    }

    /// The lexicon's name, for logging and diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `token` (already lower-cased) is an entry.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains(token)
    }

    /// Count every token that is an entry. Repeated tokens count each time.
    pub fn count_in<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens
            .iter()
            .filter(|t| self.contains(t.as_ref()))
            .count()
    }

    /// Whether any of `tokens` is an entry.
    pub fn matches_any<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().any(|t| self.contains(t.as_ref()))
    }
}

/// A named set of words or phrases matched by substring containment.
#[derive(Debug, Clone)]
pub struct PhraseLexicon {
    name: &'static str,
    entries: Vec<&'static str>,
}

impl PhraseLexicon {
    /// Build a phrase lexicon. Duplicate entries are collapsed.
    pub fn new(name: &'static str, phrases: &[&'static str]) -> Self {
        let mut seen = HashSet::new();
        let entries = phrases
            .iter()
            .copied()
            .filter(|p| seen.insert(*p))
            .collect();
        Self { name, entries }
    }

    /// The lexicon's name, for logging and diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count how many distinct entries occur as substrings of `lowered`.
    ///
    /// `lowered` must already be lower-cased. Overlapping entries all count,
    /// so "losses" registers both "loss" and "losses".
    pub fn count_present(&self, lowered: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| lowered.contains(**entry))
            .count()
    }

    /// The entries that occur as substrings of `lowered`, in declaration order.
    pub fn present_in(&self, lowered: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .copied()
            .filter(|entry| lowered.contains(*entry))
            .collect()
    }
}

/// Category lexicons for the emotion analyzer.
#[derive(Debug, Clone)]
pub struct EmotionLexicons {
    joy: Lexicon,
    sadness: Lexicon,
    anger: Lexicon,
    fear: Lexicon,
    surprise: Lexicon,
}

impl EmotionLexicons {
    /// The lexicon for one emotion category.
    pub const fn get(&self, emotion: Emotion) -> &Lexicon {
        match emotion {
            Emotion::Joy => &self.joy,
            Emotion::Sadness => &self.sadness,
            Emotion::Anger => &self.anger,
            Emotion::Fear => &self.fear,
            Emotion::Surprise => &self.surprise,
        }
    }
}

/// Every lexicon the analyzers consult.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// English function words excluded from lexical density.
    pub stop_words: Lexicon,
    /// Fear framing terms.
    pub fear: Lexicon,
    /// Appeals to unnamed authority.
    pub authority: PhraseLexicon,
    /// Absolute, certainty-inflating terms.
    pub certainty: Lexicon,
    /// Emotionally loaded adjectives.
    pub emotional: Lexicon,
    /// Emotion categories.
    pub emotions: EmotionLexicons,
    /// Positive polarity terms.
    pub positive: Lexicon,
    /// Negative polarity terms.
    pub negative: Lexicon,
    /// Verbs that signal a decision being asked for or made.
    pub decision_verbs: Lexicon,
    /// Financial, legal, operational, security, and reputational risk terms.
    pub risk: PhraseLexicon,
    /// Hedges and conditional markers.
    pub ambiguity: PhraseLexicon,
    /// Vague commitment phrases.
    pub vague: PhraseLexicon,
    /// Research and data vocabulary.
    pub evidence: Lexicon,
    /// Intensifiers that add emphasis without content.
    pub rhetorical: Lexicon,
}

static BUILTIN: LazyLock<Lexicons> = LazyLock::new(Lexicons::english);

impl Lexicons {
    /// The process-wide built-in English lexicons.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Construct a fresh copy of the built-in English lexicons.
    pub fn english() -> Self {
        Self {
            stop_words: Lexicon::new("stop_words", STOP_WORDS),
            fear: Lexicon::new("fear", FEAR_WORDS),
            authority: PhraseLexicon::new("authority", AUTHORITY_PHRASES),
            certainty: Lexicon::new("certainty", CERTAINTY_WORDS),
            emotional: Lexicon::new("emotional", EMOTIONAL_WORDS),
            emotions: EmotionLexicons {
                joy: Lexicon::new("joy", JOY_WORDS),
                sadness: Lexicon::new("sadness", SADNESS_WORDS),
                anger: Lexicon::new("anger", ANGER_WORDS),
                fear: Lexicon::new("fear_emotion", FEAR_EMOTION_WORDS),
                surprise: Lexicon::new("surprise", SURPRISE_WORDS),
            },
            positive: Lexicon::new("positive", POSITIVE_WORDS),
            negative: Lexicon::new("negative", NEGATIVE_WORDS),
            decision_verbs: Lexicon::new("decision_verbs", DECISION_VERBS),
            risk: PhraseLexicon::new("risk", RISK_TERMS),
            ambiguity: PhraseLexicon::new("ambiguity", AMBIGUITY_MARKERS),
            vague: PhraseLexicon::new("vague", VAGUE_PHRASES),
            evidence: Lexicon::new("evidence", EVIDENCE_MARKERS),
            rhetorical: Lexicon::new("rhetorical", RHETORICAL_WORDS),
        }
    }
}

/// English stop words: articles, pronouns, prepositions, auxiliaries, and
/// the contraction fragments a treebank-style tokenizer produces.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

const FEAR_WORDS: &[&str] = &[
    "crisis", "danger", "threat", "risk", "urgent", "warning", "collapse", "disaster",
    "catastrophe", "panic", "fear", "loss", "fatal", "deadly", "severe", "critical", "emergency",
    "alarming", "unstable", "unsafe", "harm", "damage", "destruction", "chaos", "uncertain",
    "instability", "breakdown", "failure", "attack", "exposed", "vulnerable", "irreversible",
];

const AUTHORITY_PHRASES: &[&str] = &[
    "experts say",
    "studies show",
    "research proves",
    "scientists agree",
    "according to experts",
    "authorities say",
    "official sources confirm",
    "it is widely believed",
    "industry leaders agree",
    "medical experts warn",
    "government sources indicate",
    "analysts predict",
    "reports suggest",
    "research indicates",
    "evidence suggests",
    "it is well known",
];

const CERTAINTY_WORDS: &[&str] = &[
    "always", "never", "undeniable", "guaranteed", "certainly", "definitely", "absolutely",
    "proven", "inevitable", "unquestionable", "indisputable", "conclusive", "undoubtedly",
];

const EMOTIONAL_WORDS: &[&str] = &[
    "shocking", "outrageous", "incredible", "devastating", "amazing", "terrible",
    "unbelievable", "heartbreaking", "disturbing", "horrifying", "tragic", "disgusting",
    "remarkable", "astonishing", "terrifying", "emotional", "painful", "exciting", "frightening",
];

const JOY_WORDS: &[&str] = &[
    "happy", "joy", "delight", "pleased", "excited", "satisfied", "hope", "optimistic",
    "relieved", "cheerful", "positive",
];

const SADNESS_WORDS: &[&str] = &[
    "sad", "loss", "grief", "depressed", "unhappy", "regret", "disappointed", "hopeless",
    "miserable", "downcast",
];

const ANGER_WORDS: &[&str] = &[
    "angry", "furious", "rage", "outrage", "annoyed", "frustrated", "irritated", "resentful",
    "hostile",
];

const FEAR_EMOTION_WORDS: &[&str] = &[
    "fear", "afraid", "panic", "threat", "danger", "risk", "anxious", "worried", "terrified",
    "nervous",
];

const SURPRISE_WORDS: &[&str] = &[
    "surprised", "shocked", "unexpected", "sudden", "astonished", "startled",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "positive", "beneficial", "excellent", "success", "effective", "improved",
    "efficient", "reliable", "valuable", "strong", "favorable",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "negative", "poor", "harmful", "failure", "problem", "ineffective", "weak", "costly",
    "dangerous", "damaging", "unreliable",
];

const DECISION_VERBS: &[&str] = &[
    "decide", "choose", "select", "agree", "accept", "reject", "approve", "commit", "proceed",
    "consider", "opt", "authorize", "confirm", "decline", "terminate", "continue", "discontinue",
    "enroll", "withdraw", "sign", "cancel",
];

const RISK_TERMS: &[&str] = &[
    // general
    "risk", "loss", "damage", "harm", "threat", "danger", "exposure", "impact", "consequence",
    "liability", "uncertainty",
    // financial
    "cost", "penalty", "fine", "charge", "expense", "debt", "default", "bankruptcy", "losses",
    "decline",
    // legal and contractual
    "breach", "violation", "noncompliance", "lawsuit", "claim", "dispute", "termination",
    "revocation", "sanction",
    // operational and technical
    "failure", "outage", "downtime", "error", "malfunction", "breakdown", "defect",
    "vulnerability", "incident",
    // security and safety
    "attack", "leak", "theft", "fraud", "compromise", "unauthorized", "unsafe", "hazard",
    // human and reputational
    "injury", "fatality", "reputation", "reputational", "trust", "misconduct", "negligence",
];

const AMBIGUITY_MARKERS: &[&str] = &[
    "may",
    "might",
    "could",
    "possible",
    "potential",
    "likely",
    "subject to",
    "as applicable",
    "at discretion",
    "from time to time",
    "where feasible",
    "as appropriate",
    "depending on",
    "in some cases",
    "to the extent possible",
];

const VAGUE_PHRASES: &[&str] = &[
    "as necessary",
    "if required",
    "where appropriate",
    "reasonable efforts",
    "best efforts",
    "as determined",
    "at our discretion",
    "when needed",
    "as decided",
    "subject to change",
    "without notice",
];

const EVIDENCE_MARKERS: &[&str] = &[
    "data", "dataset", "study", "studies", "evidence", "research", "analysis", "report", "survey",
    "experiment", "results", "statistics", "figures", "findings", "metrics", "sample",
    "observations", "measured", "evaluated", "validated",
];

const RHETORICAL_WORDS: &[&str] = &[
    "very", "extremely", "clearly", "obviously", "undoubtedly", "remarkably", "highly",
    "significantly", "truly", "deeply", "entirely", "completely", "totally", "absolutely",
    "purely",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(Lexicons::builtin(), Lexicons::builtin()));
    }

    #[test]
    fn stop_word_list_size() {
        let lex = Lexicons::builtin();
        assert!((150..=200).contains(&lex.stop_words.len()));
        assert!(lex.stop_words.contains("the"));
        assert!(!lex.stop_words.contains("fox"));
    }

    #[test]
    fn duplicate_phrases_collapse() {
        let lex = PhraseLexicon::new("t", &["breach", "liability", "breach"]);
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn count_in_counts_every_occurrence() {
        let lex = Lexicon::new("t", &["harm", "risk"]);
        let tokens = ["harm", "and", "harm", "risk"];
        assert_eq!(lex.count_in(&tokens), 3);
        assert!(lex.matches_any(&tokens));
        assert!(!lex.matches_any(&["nothing"]));
    }

    #[test]
    fn count_present_counts_each_entry_once() {
        let lex = PhraseLexicon::new("t", &["studies show", "experts say"]);
        assert_eq!(
            lex.count_present("studies show x. studies show y. experts say z."),
            2
        );
    }

    #[test]
    fn count_present_matches_overlapping_substrings() {
        let risk = &Lexicons::builtin().risk;
        // "losses" contains "loss"; both entries register
        assert_eq!(risk.present_in("heavy losses"), vec!["loss", "losses"]);
        // substring matching also hits inside longer words
        assert_eq!(risk.count_present("the risky plan"), 1);
    }

    #[test]
    fn emotion_lexicons_by_category() {
        let lex = Lexicons::builtin();
        assert!(lex.emotions.get(Emotion::Joy).contains("happy"));
        assert!(lex.emotions.get(Emotion::Fear).contains("afraid"));
        assert!(!lex.emotions.get(Emotion::Anger).contains("happy"));
    }
}
