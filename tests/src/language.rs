use fa_regex_compiler::*;

use crate::strings_up_to;

/// Asserts that `pattern`'s automaton accepts exactly the strings over
/// `alphabet`, up to `max_len` long, that satisfy `expected`.
fn assert_language(
    pattern: &str,
    alphabet: &[char],
    max_len: usize,
    expected: impl Fn(&str) -> bool,
) {
    let nfa = create_nfa(pattern).unwrap();

    for input in strings_up_to(alphabet, max_len) {
        assert_eq!(
            (pattern, input.as_str(), expected(&input)),
            (pattern, input.as_str(), nfa.accepts(&input))
        );
    }
}

#[test]
fn should_accept_exactly_single_literal() {
    for c in ['a', 'z', '0', ' ', '.', 'é', '?'] {
        let pattern = c.to_string();
        assert_language(&pattern, &[c, 'x'], 3, |input| input == pattern);
    }
}

#[test]
fn should_accept_exactly_concatenation() {
    assert_language("ab", &['a', 'b'], 4, |input| input == "ab");
}

#[test]
fn should_accept_exactly_either_alternative() {
    assert_language("a|b", &['a', 'b'], 3, |input| input == "a" || input == "b");
}

#[test]
fn should_accept_zero_or_more_repetitions() {
    assert_language("a*", &['a', 'b'], 6, |input| input.chars().all(|c| c == 'a'));
}

#[test]
fn should_accept_one_or_more_repetitions() {
    assert_language("a+", &['a', 'b'], 6, |input| {
        !input.is_empty() && input.chars().all(|c| c == 'a')
    });
}

#[test]
fn should_scope_precedence_with_groups() {
    assert_language("(a|b)c", &['a', 'b', 'c'], 4, |input| {
        input == "ac" || input == "bc"
    });
}

#[test]
fn should_bind_alternation_looser_than_concatenation() {
    assert_language("a|bc", &['a', 'b', 'c'], 4, |input| input == "a" || input == "bc");
}

#[test]
fn should_treat_redundant_grouping_as_transparent() {
    assert_language("((a))", &['a', 'b'], 4, |input| input == "a");
}

#[test]
fn should_repeat_groups_as_a_unit() {
    assert_language("(ab)+", &['a', 'b'], 6, |input| {
        !input.is_empty() && input.as_bytes().chunks(2).all(|pair| pair == b"ab")
    });
}

#[test]
fn should_fail_construction_of_malformed_patterns() {
    for pattern in ["(a", "a)", "|a", "a|", ""] {
        let res = create_nfa(pattern);

        assert!(res.is_err(), "{} should be rejected", pattern);
        assert!(try_create_nfa(pattern).is_none());
    }
}
