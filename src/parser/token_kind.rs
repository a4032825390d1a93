//! Token kinds for the RDDL lexer.
//!
//! One flat enum covers reserved words, literals, and the operator set.
//! Reserved-word recognition rides on logos' longest-match rule: an exact
//! `#[token]` wins against the identifier regex at equal length, while a
//! longer identifier (`domains`, `iffy`, `pos-inf-x`) stays an `IDENT`.

use logos::Logos;

/// All token kinds in RDDL.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"//[^\r\n]*", allow_greedy = true))]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA (consumed by the lexer wrapper, never handed to the parser)
    // =========================================================================
    /// One or more line breaks; drives the line counter.
    #[regex(r"\n+")]
    NEWLINE,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// `rlevel`, `robot-at`, `rlevel'`; a trailing prime is part of the lexeme.
    #[regex(r"[A-Za-z]([A-Za-z0-9_-]*[A-Za-z0-9])?'?")]
    IDENT,

    /// `?r`, `?up`: a bound or parameter variable.
    #[regex(r"\?[A-Za-z0-9_-]*[A-Za-z0-9]")]
    VAR,

    /// `@low`, `@high`: an enum value.
    #[regex(r"@[A-Za-z0-9_-]*[A-Za-z0-9]")]
    ENUM_VAL,

    #[regex(r"[0-9]+")]
    INTEGER,

    /// The integer part may be empty (`.5`), the fraction may not (`1.` is
    /// an integer followed by a dot).
    #[regex(r"[0-9]*\.[0-9]+")]
    DOUBLE,

    // =========================================================================
    // RESERVED WORDS: blocks and sections
    // =========================================================================
    #[token("domain")]
    DOMAIN_KW,
    #[token("instance")]
    INSTANCE_KW,
    #[token("horizon")]
    HORIZON_KW,
    #[token("discount")]
    DISCOUNT_KW,
    #[token("objects")]
    OBJECTS_KW,
    #[token("init-state")]
    INIT_STATE_KW,
    #[token("requirements")]
    REQUIREMENTS_KW,
    #[token("state-action-constraints")]
    STATE_ACTION_CONSTRAINTS_KW,
    #[token("action-preconditions")]
    ACTION_PRECONDITIONS_KW,
    #[token("state-invariants")]
    STATE_INVARIANTS_KW,
    #[token("types")]
    TYPES_KW,
    #[token("pvariables")]
    PVARIABLES_KW,
    #[token("cpfs")]
    CPFS_KW,
    #[token("cdfs")]
    CDFS_KW,
    #[token("reward")]
    REWARD_KW,
    #[token("max-nondef-actions")]
    MAX_NONDEF_ACTIONS_KW,
    #[token("terminate-when")]
    TERMINATE_WHEN_KW,
    #[token("terminal")]
    TERMINAL_KW,

    // =========================================================================
    // RESERVED WORDS: types, ranges, fluent kinds
    // =========================================================================
    #[token("object")]
    OBJECT_KW,
    #[token("bool")]
    BOOL_KW,
    #[token("int")]
    INT_KW,
    #[token("real")]
    REAL_KW,
    #[token("neg-inf")]
    NEG_INF_KW,
    #[token("pos-inf")]
    POS_INF_KW,
    #[token("non-fluent")]
    NON_FLUENT_KW,
    #[token("non-fluents")]
    NON_FLUENTS_KW,
    #[token("state-fluent")]
    STATE_FLUENT_KW,
    #[token("interm-fluent")]
    INTERM_FLUENT_KW,
    #[token("derived-fluent")]
    DERIVED_FLUENT_KW,
    #[token("observ-fluent")]
    OBSERV_FLUENT_KW,
    #[token("action-fluent")]
    ACTION_FLUENT_KW,
    #[token("level")]
    LEVEL_KW,
    #[token("default")]
    DEFAULT_KW,

    // =========================================================================
    // RESERVED WORDS: expressions
    // =========================================================================
    #[token("forall")]
    FORALL_KW,
    #[token("exists")]
    EXISTS_KW,
    #[token("true")]
    TRUE_KW,
    #[token("false")]
    FALSE_KW,
    #[token("if")]
    IF_KW,
    #[token("then")]
    THEN_KW,
    #[token("else")]
    ELSE_KW,
    #[token("switch")]
    SWITCH_KW,
    #[token("case")]
    CASE_KW,
    #[token("otherwise")]
    OTHERWISE_KW,

    // =========================================================================
    // RESERVED WORDS: distributions
    // =========================================================================
    #[token("KronDelta")]
    KRON_DELTA_KW,
    #[token("DiracDelta")]
    DIRAC_DELTA_KW,
    #[token("Uniform")]
    UNIFORM_KW,
    #[token("Bernoulli")]
    BERNOULLI_KW,
    #[token("Discrete")]
    DISCRETE_KW,
    #[token("Normal")]
    NORMAL_KW,
    #[token("Poisson")]
    POISSON_KW,
    #[token("Exponential")]
    EXPONENTIAL_KW,
    #[token("Weibull")]
    WEIBULL_KW,
    #[token("Gamma")]
    GAMMA_KW,
    #[token("Multinomial")]
    MULTINOMIAL_KW,
    #[token("Dirichlet")]
    DIRICHLET_KW,

    // =========================================================================
    // OPERATORS AND PUNCTUATION (longest match first for the overlapping set)
    // =========================================================================
    #[token("<=>")]
    EQUIV,
    #[token("=>")]
    IMPLY,
    #[token("==")]
    EQ_EQ,
    #[token("~=")]
    NEQ,
    #[token("<=")]
    LT_EQ,
    #[token(">=")]
    GT_EQ,
    #[token("<")]
    LT,
    #[token(">")]
    GT,
    #[token("=")]
    EQ,
    #[token("^")]
    CARET,
    #[token("&")]
    AMP,
    #[token("|")]
    PIPE,
    #[token("~")]
    TILDE,
    #[token("+")]
    PLUS,
    #[token("-")]
    MINUS,
    #[token("*")]
    STAR,
    #[token("/")]
    SLASH,
    #[token("(")]
    L_PAREN,
    #[token(")")]
    R_PAREN,
    #[token("{")]
    L_BRACE,
    #[token("}")]
    R_BRACE,
    #[token("[")]
    L_BRACKET,
    #[token("]")]
    R_BRACKET,
    #[token(".")]
    DOT,
    #[token(",")]
    COMMA,
    #[token("_")]
    UNDERSCORE,
    #[token(":")]
    COLON,
    #[token(";")]
    SEMICOLON,
    #[token("$")]
    DOLLAR,
    #[token("?")]
    QUESTION,
}

impl TokenKind {
    /// True for the lexical kinds whose lexeme names something.
    pub fn is_name(self) -> bool {
        matches!(self, TokenKind::IDENT | TokenKind::VAR | TokenKind::ENUM_VAL)
    }

    /// True for the four fluent-kind keywords accepted inside a pvariable
    /// definition.
    pub fn is_fluent_kind(self) -> bool {
        matches!(
            self,
            TokenKind::NON_FLUENT_KW
                | TokenKind::STATE_FLUENT_KW
                | TokenKind::ACTION_FLUENT_KW
                | TokenKind::INTERM_FLUENT_KW
        )
    }
}
