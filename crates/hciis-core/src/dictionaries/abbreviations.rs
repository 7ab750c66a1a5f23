//! Abbreviation dictionary for sentence boundary detection.
//!
//! Titles ("Dr.", "Mrs.") never end a sentence because a capitalized name
//! follows them. Other abbreviations ("etc.", "approx.", "in.") end a sentence
//! when the next word is capitalized.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Titles, honorifics, and ranks that precede a proper name.
static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr", "hon",
        "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "rep", "gov",
        "pres", "st", "mt",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that do not by themselves end a sentence.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set: HashSet<&'static str> = TITLES.iter().copied().collect();

    // Academic degrees and post-nominals
    set.extend([
        "esq", "phd", "md", "dds", "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d",
        "ll.b", "ll.m", "d.d.s", "d.v.m", "pharm.d", "ed.d", "psy.d",
    ]);

    // Latin and scholarly
    set.extend([
        "etc", "vs", "e.g", "i.e", "et al", "cf", "viz", "ibid", "op. cit", "loc. cit", "n.b",
        "p.s", "r.s.v.p",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "mar", "apr", "jun", "jul",
        "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu", "thur",
        "thurs", "fri", "sat", "sun",
    ]);

    // Addresses and places
    set.extend([
        "ave", "blvd", "rd", "ct", "ln", "pl", "ter", "apt", "ste", "rm", "fl", "bldg", "dept",
        "u.s", "u.k", "u.s.a", "e.u", "n.y", "calif", "fla", "mass", "penn", "wash",
    ]);

    // Organizations
    set.extend([
        "inc", "corp", "ltd", "llc", "co", "bros", "assn", "div", "mfg", "dist", "intl",
    ]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "g", "mg", "l", "ml", "cm", "mm", "m", "km", "in", "ft", "yd",
        "mi", "sq", "cu", "mph", "kph", "rpm", "hp",
    ]);

    // References and figures
    set.extend([
        "vol", "no", "nos", "p", "pp", "par", "sec", "ch", "fig", "eq", "est", "approx", "min",
        "max", "avg", "misc", "nr", "ref", "refs", "ed", "eds", "trans", "supp", "app", "encl",
    ]);

    set
});

fn clean(word: &str) -> String {
    word.to_lowercase().trim_matches('.').to_string()
}

/// Check if a word is a known abbreviation (case-insensitive, periods ignored).
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(clean(word).as_str())
}

/// Check if a word is a title that precedes a name.
pub fn is_title(word: &str) -> bool {
    TITLES.contains(clean(word).as_str())
}
