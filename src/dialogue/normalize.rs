//! Typo normalization
//!
//! Rewrites known misspellings and variants to canonical keywords before
//! rule matching. Replacement is plain substring rewriting in map order;
//! overlapping replacements are deliberately not guarded against, so a
//! variant that is a substring of another replacement's output may be
//! re-matched. Idempotent on text containing no variant substrings.

/// Canonical keyword -> registered variants, in match priority order.
///
/// Iteration order is the declaration order below; reordering entries
/// changes normalization results for inputs that match more than one
/// variant.
const KEYWORDS: &[(&str, &[&str])] = &[
    ("hello", &["helo", "hallo", "hey"]),
    ("hi", &["hii", "hay"]),
    ("how are you", &["how r u", "hw are u", "how r u?"]),
    ("name", &["what is your name", "who are you", "ur name"]),
    ("tax", &["taks", "tex", "income tax"]),
    ("services", &["servic", "serves", "serveces"]),
    ("support", &["suport", "suppot", "suprt"]),
    ("hours", &["hrs", "hourse", "hour"]),
    ("bye", &["bye", "by", "goodbye", "see you", "later"]),
];

/// Farewell variants, checked against the normalized input by containment.
/// The canonical "bye" is itself in the list, so normalized farewells
/// still match.
const FAREWELLS: &[&str] = &["bye", "by", "goodbye", "see you", "later"];

/// Lowercase, trim, and rewrite every registered variant to its
/// canonical keyword. Always returns a string, possibly empty.
pub fn normalize(text: &str) -> String {
    let mut out = text.trim().to_lowercase();
    for (canonical, variants) in KEYWORDS {
        for variant in *variants {
            if out.contains(variant) {
                out = out.replace(variant, canonical);
            }
        }
    }
    out
}

/// True if the input contains any farewell variant.
pub fn is_farewell(text: &str) -> bool {
    FAREWELLS.iter().any(|f| text.contains(f))
}
