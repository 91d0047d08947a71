//! Label-name allocation for angle elements.

/// Ordered pool of default angle labels, one per Greek letter.
pub const GREEK_LABELS: [&str; 24] = [
    "α", "β", "γ", "δ", "ε", "ζ", "η", "θ", "ι", "κ", "λ", "μ", "ν", "ξ", "ο", "π", "ρ", "σ",
    "τ", "υ", "φ", "χ", "ψ", "ω",
];

/// Picks the first label not present in `existing`: the pool letters in
/// order, then the indexed family `α_{0}`, `α_{1}`, … once the pool is
/// exhausted.
///
/// The caller passes the labels currently assigned on the board; the scan
/// happens once per allocation, so labels freed by later removals or
/// renames are not reclaimed retroactively.
#[must_use]
pub fn allocate(existing: &[&str]) -> String {
    for candidate in GREEK_LABELS {
        if !existing.contains(&candidate) {
            return candidate.to_owned();
        }
    }

    log::debug!("label pool exhausted, falling back to indexed labels");
    let mut j: u32 = 0;
    loop {
        let candidate = format!("α_{{{j}}}");
        if !existing.contains(&candidate.as_str()) {
            return candidate;
        }
        j += 1;
    }
}
