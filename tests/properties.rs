use aliasmatch::{AliasMatcher, match_rule, matches, reverse_first_middle, try_match};

const ALIAS_SETS: &[&[&str]] = &[
    &["FIG WorldWide LLC", "Al LLC"],
    &["FIG LLC"],
    &["FIG WorldWide LLC", "FIG F LLC"],
    &["FIG Risk LLC"],
    &["FIG WorldWide LLC", "FIG Finance LLC", "FIG Risk LLC"],
    &["Acme Inc", "Acme Holdings Inc", "A Global Inc"],
];

const RECORDS: &[&str] = &[
    "FIG WorldWide LLC",
    "WorldWide FIG LLC",
    "FIG W LLC",
    "FIG LLC",
    "Risk LLC",
    "Risk FIG LLC",
    "FIG LLC WorldWide",
    "Acme H Inc",
    "Holdings Acme Inc",
    "Global Inc",
    "Al LLC",
];

#[test]
fn listed_records_always_match() {
    for &aliases in ALIAS_SETS {
        for alias in aliases.iter() {
            assert!(matches(aliases, alias), "{alias:?} should match {aliases:?}");
        }
    }
}

#[test]
fn short_and_long_records_never_match() {
    let aliases = [
        "FIG",
        "",
        "FIG WorldWide LLC",
        "FIG Global Risk LLC",
        "FIG LLC",
    ];
    for record in ["", " ", "FIG", "LLC", "FIG Global Risk LLC", "A B C D E"] {
        assert!(!matches(&aliases, record), "{record:?}");
    }
}

#[test]
fn last_token_moved_never_matches() {
    for aliases in [
        &["FIG WorldWide LLC"][..],
        &["FIG LLC"][..],
        &["FIG Risk LLC", "FIG R LLC"][..],
    ] {
        for record in [
            "FIG LLC WorldWide",
            "LLC FIG WorldWide",
            "LLC WorldWide",
            "LLC FIG",
            "FIG LLC Risk",
        ] {
            assert!(!matches(aliases, record), "{record:?} vs {aliases:?}");
        }
    }
}

#[test]
fn exact_and_omission_rules_hold_in_both_orders() {
    // No record here has a one-character middle, so the initial rule cannot
    // fire and the decision must not depend on first/middle order.
    let sets: &[&[&str]] = &[&["FIG LLC"], &["Risk LLC"], &["FIG Risk LLC"], &["Al LLC"]];
    for &aliases in sets {
        for record in ["FIG Risk LLC", "Risk FIG LLC", "FIG Capital LLC", "Al Risk LLC"] {
            let reversed = reverse_first_middle(record).expect("three tokens");
            assert_eq!(
                matches(aliases, record),
                matches(aliases, &reversed),
                "{record:?} / {reversed:?} vs {aliases:?}"
            );
        }
    }
}

#[test]
fn comparisons_are_case_sensitive() {
    let aliases = ["FIG WorldWide LLC"];
    assert!(!matches(&aliases, "fig worldwide llc"));
    assert!(!matches(&aliases, "FIG LLc"));
    assert!(!matches(&aliases, "FIG w LLC"));
}

#[test]
fn prepared_and_free_matching_agree() {
    for &aliases in ALIAS_SETS {
        let prepared = AliasMatcher::new(aliases.iter().copied());
        for record in RECORDS {
            assert_eq!(
                prepared.match_rule(record),
                match_rule(aliases, record),
                "{record:?} vs {aliases:?}"
            );
        }
    }
}

#[test]
fn strict_entry_point_agrees_on_valid_input() {
    for &aliases in ALIAS_SETS {
        for record in RECORDS {
            assert_eq!(
                try_match(aliases, record).expect("valid record"),
                match_rule(aliases, record)
            );
        }
    }
}

#[test]
fn matching_is_thread_safe() {
    let prepared = std::sync::Arc::new(AliasMatcher::new(["FIG WorldWide LLC", "FIG F LLC"]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let prepared = std::sync::Arc::clone(&prepared);
            std::thread::spawn(move || {
                (0..100).all(|_| prepared.matches("FIG W LLC") && !prepared.matches("FIG E LLC"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("worker panicked"));
    }
}
