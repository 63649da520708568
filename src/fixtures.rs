//! Named test fixtures.
//!
//! Static input pairs with known expectations, passed into the harness
//! explicitly. The comparison set grades the solvers against each other at
//! increasing sizes (the Large pair deliberately trips the exhaustive size
//! guard); the edge-case set pins down degenerate behavior all four solvers
//! must share.

/// One named (X, Y) pair with its expectations.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub x: &'static [u8],
    pub y: &'static [u8],
    /// Known LCS length, if one is on record.
    pub expected_length: Option<u32>,
    /// Every acceptable witness, when the full set has been enumerated.
    /// Empty when unknown; witnesses are then checked for validity only.
    pub expected_witnesses: &'static [&'static [u8]],
    pub description: &'static str,
}

/// Size-graded comparison set.
pub const COMPARISON: &[Fixture] = &[
    Fixture {
        name: "small",
        x: b"ABCBDAB",
        y: b"BDCABA",
        expected_length: Some(4),
        expected_witnesses: &[b"BCBA", b"BDAB", b"BCAB"],
        description: "classic textbook example",
    },
    Fixture {
        name: "medium",
        x: b"AGGTABCDEFGHIJ",
        y: b"GXTXAYBMNOPQRS",
        expected_length: Some(4),
        expected_witnesses: &[b"GTAB"],
        description: "mid-sized strings that separate the solvers on time",
    },
    Fixture {
        name: "large",
        x: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        y: b"ACEGIKMOQSUWYABDFHJLNPRT",
        expected_length: None,
        expected_witnesses: &[],
        description: "large enough that exhaustive search must be skipped",
    },
];

/// Degenerate and tie-break cases every solver must agree on.
pub const EDGE_CASES: &[Fixture] = &[
    Fixture {
        name: "both_empty",
        x: b"",
        y: b"",
        expected_length: Some(0),
        expected_witnesses: &[b""],
        description: "LCS of two empty sequences",
    },
    Fixture {
        name: "one_empty",
        x: b"ABCD",
        y: b"",
        expected_length: Some(0),
        expected_witnesses: &[b""],
        description: "one empty sequence",
    },
    Fixture {
        name: "identical",
        x: b"ABCDEF",
        y: b"ABCDEF",
        expected_length: Some(6),
        expected_witnesses: &[b"ABCDEF"],
        description: "identical sequences",
    },
    Fixture {
        name: "no_common",
        x: b"AAAA",
        y: b"BBBB",
        expected_length: Some(0),
        expected_witnesses: &[b""],
        description: "disjoint alphabets",
    },
    Fixture {
        name: "repeated_symbols",
        x: b"AAABBB",
        y: b"AABB",
        expected_length: Some(4),
        expected_witnesses: &[b"AABB"],
        description: "multiplicities matter, not set intersection",
    },
    Fixture {
        name: "single_char",
        x: b"A",
        y: b"A",
        expected_length: Some(1),
        expected_witnesses: &[b"A"],
        description: "single matching symbol",
    },
    Fixture {
        name: "reversed",
        x: b"ABC",
        y: b"CBA",
        expected_length: Some(1),
        expected_witnesses: &[b"A", b"B", b"C"],
        description: "reversal leaves only single-symbol subsequences",
    },
    Fixture {
        name: "interleaved",
        x: b"AGGTAB",
        y: b"GXTXAYB",
        expected_length: Some(4),
        expected_witnesses: &[b"GTAB"],
        description: "second classic textbook example",
    },
];

/// The complete fixture set: comparison cases followed by edge cases.
pub fn all() -> Vec<Fixture> {
    COMPARISON.iter().chain(EDGE_CASES).copied().collect()
}
