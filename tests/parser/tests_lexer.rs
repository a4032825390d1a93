//! Lexer invariants over the full fixtures.

use crate::helpers::RESERVOIR;
use rddl::{TokenKind, tokenize};
use rstest::rstest;

/// Every reserved word in the language, as written in source.
const RESERVED: &[&str] = &[
    "domain",
    "instance",
    "horizon",
    "discount",
    "objects",
    "init-state",
    "requirements",
    "state-action-constraints",
    "action-preconditions",
    "state-invariants",
    "types",
    "object",
    "bool",
    "int",
    "real",
    "neg-inf",
    "pos-inf",
    "pvariables",
    "non-fluent",
    "non-fluents",
    "state-fluent",
    "interm-fluent",
    "derived-fluent",
    "observ-fluent",
    "action-fluent",
    "level",
    "default",
    "max-nondef-actions",
    "terminate-when",
    "terminal",
    "cpfs",
    "cdfs",
    "reward",
    "forall",
    "exists",
    "true",
    "false",
    "if",
    "then",
    "else",
    "switch",
    "case",
    "otherwise",
    "KronDelta",
    "DiracDelta",
    "Uniform",
    "Bernoulli",
    "Discrete",
    "Normal",
    "Poisson",
    "Exponential",
    "Weibull",
    "Gamma",
    "Multinomial",
    "Dirichlet",
];

#[test]
fn test_line_counter_matches_newlines() {
    let tokens = tokenize(RESERVOIR);
    let newlines = RESERVOIR.matches('\n').count() as u32;
    assert_eq!(tokens.last().unwrap().line, newlines + 1);
}

#[test]
fn test_numeric_lexemes_decode() {
    for token in tokenize(RESERVOIR) {
        match token.kind {
            TokenKind::INTEGER => {
                assert!(
                    token.text.parse::<i64>().is_ok(),
                    "bad integer lexeme {:?}",
                    token.text
                );
            }
            TokenKind::DOUBLE => {
                assert!(token.text.contains('.'));
                assert!(
                    token.text.parse::<f64>().is_ok(),
                    "bad double lexeme {:?}",
                    token.text
                );
            }
            _ => {}
        }
    }
}

#[test]
fn test_identifiers_are_never_reserved() {
    for token in tokenize(RESERVOIR) {
        if token.kind == TokenKind::IDENT {
            assert!(
                !RESERVED.contains(&token.text),
                "reserved word {:?} lexed as IDENT",
                token.text
            );
        }
        if RESERVED.contains(&token.text) {
            assert_ne!(token.kind, TokenKind::IDENT);
        }
    }
}

#[rstest]
#[case("domain", TokenKind::DOMAIN_KW)]
#[case("instance", TokenKind::INSTANCE_KW)]
#[case("non-fluents", TokenKind::NON_FLUENTS_KW)]
#[case("non-fluent", TokenKind::NON_FLUENT_KW)]
#[case("state-fluent", TokenKind::STATE_FLUENT_KW)]
#[case("interm-fluent", TokenKind::INTERM_FLUENT_KW)]
#[case("derived-fluent", TokenKind::DERIVED_FLUENT_KW)]
#[case("observ-fluent", TokenKind::OBSERV_FLUENT_KW)]
#[case("action-fluent", TokenKind::ACTION_FLUENT_KW)]
#[case("init-state", TokenKind::INIT_STATE_KW)]
#[case("max-nondef-actions", TokenKind::MAX_NONDEF_ACTIONS_KW)]
#[case("terminate-when", TokenKind::TERMINATE_WHEN_KW)]
#[case("terminal", TokenKind::TERMINAL_KW)]
#[case("pos-inf", TokenKind::POS_INF_KW)]
#[case("neg-inf", TokenKind::NEG_INF_KW)]
#[case("otherwise", TokenKind::OTHERWISE_KW)]
#[case("KronDelta", TokenKind::KRON_DELTA_KW)]
#[case("DiracDelta", TokenKind::DIRAC_DELTA_KW)]
#[case("Multinomial", TokenKind::MULTINOMIAL_KW)]
#[case("Dirichlet", TokenKind::DIRICHLET_KW)]
fn test_reserved_word_kinds(#[case] word: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(word);
    assert_eq!(tokens.len(), 1, "{word:?} should be a single token");
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].text, word);
}

#[test]
fn test_variable_lexemes() {
    for token in tokenize(RESERVOIR) {
        if token.kind == TokenKind::VAR {
            assert!(token.text.len() >= 2);
            assert!(token.text.starts_with('?'));
        }
        if token.text.starts_with('?') && token.text.len() > 1 {
            assert_eq!(token.kind, TokenKind::VAR);
        }
    }
}

#[test]
fn test_no_trivia_in_lexemes() {
    for token in tokenize(RESERVOIR) {
        assert!(!token.text.contains(' '));
        assert!(!token.text.contains('\t'));
        assert!(!token.text.contains('\n'));
        assert!(!token.text.starts_with("//"));
    }
}
