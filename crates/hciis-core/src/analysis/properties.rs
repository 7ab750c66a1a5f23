//! Property tests across all five analyzers.

use proptest::prelude::*;

use super::{Analyzer, Engine};
use crate::analysis::reports::DominantEmotion;
use crate::text::normalize;

const POOL: &[&str] = &[
    "the", "crisis", "data", "happy", "sad", "may", "decide", "very", "good", "bad", "experts",
    "say", "studies", "show", "report", "fox", "quickly", "absolutely", "risk", "loss",
    "shocking", "approve", "could", "angry", "surprised", "and", "of", "plan", "team", "results",
];

const PUNCT: &[&str] = &[" ", " ", " ", ", ", ". ", "! ", "? "];

fn pool_text() -> impl Strategy<Value = String> {
    prop::collection::vec((0..POOL.len(), 0..PUNCT.len()), 0..80).prop_map(|picks| {
        let mut text = String::new();
        for (w, p) in picks {
            text.push_str(POOL[w]);
            text.push_str(PUNCT[p]);
        }
        text
    })
}

fn engine() -> Engine {
    Engine::new().unwrap()
}

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn in_percent(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}

proptest! {
    #[test]
    fn prop_scores_within_bounds(raw in prop_oneof![pool_text(), "\\PC{0,200}"]) {
        let e = engine();
        let text = normalize(&raw);
        prop_assert!(in_percent(e.cognitive_load().analyze(&text).load));
        prop_assert!(in_percent(e.manipulation().analyze(&text).score));
        prop_assert!(in_unit(e.emotion().analyze(&text).volatility));
        let decision = e.decision_risk().analyze(&text);
        prop_assert!(in_unit(decision.density));
        prop_assert!(in_unit(decision.ambiguity));
        prop_assert!(in_percent(e.information_quality().analyze(&text).quality));
    }

    #[test]
    fn prop_analysis_is_deterministic(raw in pool_text()) {
        let e = engine();
        let first = e.analyze_document(&raw, None);
        let second = e.analyze_document(&raw, None);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            ),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "runs disagreed"),
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(raw in "\\PC{0,200}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_joy_fear_tie_resolves_to_joy(n in 1usize..6, fear_first in any::<bool>()) {
        let joy = vec!["happy"; n].join(" ");
        let fear = vec!["afraid"; n].join(" ");
        let text = if fear_first {
            format!("{fear} then {joy}.")
        } else {
            format!("{joy} then {fear}.")
        };
        let report = engine().emotion().analyze(&text);
        prop_assert_eq!(report.dominant, DominantEmotion::Joy);
    }

    #[test]
    fn prop_more_fear_never_lowers_manipulation(k in 0usize..20) {
        // 20-word sentence; k then k+1 filler words replaced by fear words
        let build = |fear: usize| {
            let mut words = vec!["table"; 20];
            for w in words.iter_mut().take(fear) {
                *w = "danger";
            }
            format!("{}.", words.join(" "))
        };
        let e = engine();
        let lower = e.manipulation().analyze(&build(k)).score;
        let higher = e.manipulation().analyze(&build(k + 1)).score;
        prop_assert!(higher >= lower);
    }
}

#[test]
fn empty_text_yields_degenerate_shapes() {
    let e = engine();
    let load = e.cognitive_load().analyze("");
    assert_eq!(load.load, 0.0);
    assert!(load.breakdown.is_none());
    assert_eq!(e.manipulation().analyze("").score, 0.0);
    assert_eq!(e.emotion().analyze("").dominant, DominantEmotion::Neutral);
    let decision = e.decision_risk().analyze("");
    assert_eq!((decision.density, decision.ambiguity), (0.0, 0.0));
    assert_eq!(e.information_quality().analyze("").quality, 0.0);
}

#[test]
fn fox_scenario() {
    let e = engine();
    let text = "The quick brown fox jumps. The fox runs fast.";
    let decision = e.decision_risk().analyze(text);
    assert_eq!(decision.density, 0.0);
    assert_eq!(decision.ambiguity, 0.0);
    let quality = e.information_quality().analyze(text);
    assert_eq!(quality.details.unwrap().evidence_density, 0.0);
}
