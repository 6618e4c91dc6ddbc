use serde::Serialize;

/// Singular and plural adjective forms of an ordinal number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Ordinal {
    pub singular: &'static str,
    pub plural: &'static str,
}

const KNOWN: &[Ordinal] = &[
    Ordinal {
        singular: "First",
        plural: "Firsts",
    },
    Ordinal {
        singular: "Second",
        plural: "Seconds",
    },
    Ordinal {
        singular: "Third",
        plural: "Thirds",
    },
    Ordinal {
        singular: "Fourth",
        plural: "Fourths",
    },
];

/// Returned for any number without a dedicated name, including zero and
/// negative numbers.
pub const FALLBACK: Ordinal = Ordinal {
    singular: "Nth",
    plural: "Nths",
};

/// Resolve the ordinal name of an exam number. Never fails.
pub fn resolve_ordinal(number: i32) -> Ordinal {
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| KNOWN.get(idx))
        .copied()
        .unwrap_or(FALLBACK)
}
