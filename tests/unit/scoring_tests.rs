use arec::scoring::{explain, score};
use arec::test_utils::{TestCase, assessment, run_table_tests};

#[test]
fn duration_terms() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "fits ceiling",
            input: ("complete within 40 minutes", "35 minutes"),
            expected: (3, 0),
            should_panic: false,
        },
        TestCase {
            name: "over ceiling",
            input: ("complete within 40 minutes", "45 minutes"),
            expected: (-10, 0),
            should_panic: false,
        },
        TestCase {
            name: "inside range",
            input: ("a 30-45 mins test", "40 minutes"),
            expected: (0, 4),
            should_panic: false,
        },
        TestCase {
            name: "outside range",
            input: ("a 30 to 35 min test", "40 minutes"),
            expected: (0, 0),
            should_panic: false,
        },
        TestCase {
            name: "no constraint",
            input: ("about an hour", "60 minutes"),
            expected: (0, 0),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |(query, duration)| {
        let entry = assessment("Probe | SHL", duration, "Other");
        let breakdown = explain(query, &entry);
        (breakdown.duration_ceiling, breakdown.duration_range)
    })?;
    Ok(())
}

#[test]
fn dictionary_terms() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "python skill through name",
            input: ("python", "Python Basics | SHL", "Other"),
            expected: (5, 0),
            should_panic: false,
        },
        TestCase {
            name: "selling maps to sales role",
            input: ("selling", "Retail | SHL", "Sales"),
            expected: (0, 5),
            should_panic: false,
        },
        TestCase {
            name: "english maps to language role",
            input: ("english", "Spoken | SHL", "Language"),
            expected: (0, 5),
            should_panic: false,
        },
        TestCase {
            name: "unknown word",
            input: ("gardening", "Retail | SHL", "Sales"),
            expected: (0, 0),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |(query, name, test_type)| {
        let entry = assessment(name, "30 minutes", test_type);
        let breakdown = explain(query, &entry);
        (breakdown.skill_synonyms, breakdown.role_synonyms)
    })?;
    Ok(())
}

#[test]
fn negative_scores_are_possible() {
    let entry = assessment("Marathon | SHL", "90 minutes", "Other");
    assert_eq!(score("must finish under 30 minutes", &entry), -10);
}

#[test]
fn scoring_is_pure() {
    let entry = assessment("Java 8 (New) | SHL", "40 minutes", "Technical");
    let query = "senior java developer, 30-45 minutes";
    assert_eq!(score(query, &entry), score(query, &entry));
    assert_eq!(explain(query, &entry), explain(query, &entry));
}
