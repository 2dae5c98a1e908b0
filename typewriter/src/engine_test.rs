use super::*;

fn engine(phrases: &[&str]) -> TypingEngine {
    TypingEngine::new(
        phrases.iter().map(|p| (*p).to_owned()).collect(),
        TypingConfig::default(),
    )
    .unwrap()
}

/// Collect every fully typed phrase over `ticks` ticks, in display order.
fn full_phrases(eng: &mut TypingEngine, ticks: usize) -> Vec<String> {
    let hold_full = eng.config().hold_full_ms;
    let mut seen = Vec::new();
    for _ in 0..ticks {
        let frame = eng.advance();
        if frame.delay_ms == hold_full {
            seen.push(frame.text);
        }
    }
    seen
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_phrase_list_does_not_start() {
    assert!(TypingEngine::new(Vec::new(), TypingConfig::default()).is_none());
}

#[test]
fn blank_phrases_are_dropped() {
    assert!(TypingEngine::new(vec![String::new()], TypingConfig::default()).is_none());

    let eng = TypingEngine::new(
        vec![String::new(), "Rust".to_owned()],
        TypingConfig::default(),
    )
    .unwrap();
    assert_eq!(eng.current_phrase(), "Rust");
}

#[test]
fn default_config_matches_consts() {
    let config = TypingConfig::default();
    assert_eq!(config.type_ms, consts::TYPE_TICK_MS);
    assert_eq!(config.delete_ms, consts::DELETE_TICK_MS);
    assert_eq!(config.hold_full_ms, consts::HOLD_FULL_MS);
    assert_eq!(config.hold_empty_ms, consts::HOLD_EMPTY_MS);
}

// =============================================================
// Typing phase
// =============================================================

#[test]
fn types_one_character_per_tick() {
    let mut eng = engine(&["abc"]);
    assert_eq!(eng.advance().text, "a");
    assert_eq!(eng.advance().text, "ab");
    assert_eq!(eng.advance().text, "abc");
}

#[test]
fn typing_delay_is_per_character_until_full() {
    let mut eng = engine(&["abc"]);
    assert_eq!(eng.advance().delay_ms, consts::TYPE_TICK_MS);
    assert_eq!(eng.advance().delay_ms, consts::TYPE_TICK_MS);
    // Full phrase holds for the reading pause.
    assert_eq!(eng.advance().delay_ms, consts::HOLD_FULL_MS);
}

#[test]
fn full_phrase_flips_to_deleting() {
    let mut eng = engine(&["ab"]);
    eng.advance();
    assert_eq!(eng.phase(), Phase::Typing);
    eng.advance();
    assert_eq!(eng.phase(), Phase::Deleting);
}

// =============================================================
// Deleting phase
// =============================================================

#[test]
fn deletes_one_character_per_tick() {
    let mut eng = engine(&["abc"]);
    for _ in 0..3 {
        eng.advance();
    }
    assert_eq!(eng.advance().text, "ab");
    assert_eq!(eng.advance().text, "a");
    assert_eq!(eng.advance().text, "");
}

#[test]
fn delete_delay_is_faster_than_typing() {
    let mut eng = engine(&["abc"]);
    for _ in 0..3 {
        eng.advance();
    }
    assert_eq!(eng.advance().delay_ms, consts::DELETE_TICK_MS);
    assert_eq!(eng.advance().delay_ms, consts::DELETE_TICK_MS);
    // Empty display holds for the shorter inter-phrase pause.
    assert_eq!(eng.advance().delay_ms, consts::HOLD_EMPTY_MS);
    assert!(consts::DELETE_TICK_MS < consts::TYPE_TICK_MS);
    assert!(consts::HOLD_EMPTY_MS < consts::HOLD_FULL_MS);
}

#[test]
fn empty_display_advances_to_next_phrase() {
    let mut eng = engine(&["ab", "xy"]);
    // Type "ab", delete it, then the next typed character comes from "xy".
    for _ in 0..4 {
        eng.advance();
    }
    assert_eq!(eng.phase(), Phase::Typing);
    assert_eq!(eng.advance().text, "x");
}

// =============================================================
// Cycle order
// =============================================================

#[test]
fn visits_phrases_in_order_and_wraps() {
    let mut eng = engine(&["one", "two", "three"]);
    // Each phrase costs 2 * chars ticks per full cycle; 60 ticks covers
    // more than three full passes over this list.
    let seen = full_phrases(&mut eng, 60);
    assert!(seen.len() >= 6);
    for (i, phrase) in seen.iter().enumerate() {
        let expected = ["one", "two", "three"][i % 3];
        assert_eq!(phrase, expected, "out of order at pass position {i}");
    }
}

#[test]
fn single_phrase_repeats_forever() {
    let mut eng = engine(&["loop"]);
    let seen = full_phrases(&mut eng, 40);
    assert!(seen.len() >= 4);
    assert!(seen.iter().all(|p| p == "loop"));
}

// =============================================================
// Frame invariants
// =============================================================

#[test]
fn visible_length_changes_by_exactly_one_per_tick() {
    let mut eng = engine(&["alpha", "beta gamma", "z"]);
    let mut previous = 0_i64;
    for _ in 0..200 {
        let frame = eng.advance();
        let len = i64::try_from(frame.text.chars().count()).unwrap();
        assert_eq!((len - previous).abs(), 1, "jumped from {previous} to {len}");
        previous = len;
    }
}

#[test]
fn multibyte_phrases_stay_on_char_boundaries() {
    let mut eng = engine(&["Rust 🦀"]);
    let mut longest = String::new();
    for _ in 0..12 {
        let frame = eng.advance();
        if frame.text.chars().count() > longest.chars().count() {
            longest = frame.text;
        }
    }
    assert_eq!(longest, "Rust 🦀");
}

#[test]
fn custom_config_delays_are_honored() {
    let config = TypingConfig {
        type_ms: 10,
        delete_ms: 5,
        hold_full_ms: 100,
        hold_empty_ms: 50,
    };
    let mut eng = TypingEngine::new(vec!["ab".to_owned()], config).unwrap();
    assert_eq!(eng.advance().delay_ms, 10);
    assert_eq!(eng.advance().delay_ms, 100);
    assert_eq!(eng.advance().delay_ms, 5);
    assert_eq!(eng.advance().delay_ms, 50);
}
