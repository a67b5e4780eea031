/// Directive keyword recognized by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Note,
    NoConstraint,
    Integer,
    Positive,
    Negative,
    NotZero,
    Min,
    Max,
    MaxExclusive,
    MinLength,
    MaxLength,
    StartsWith,
    EndsWith,
    Contains,
    Match,
    Empty,
    HasProperties,
    NotNested,
    NoPrototype,
    CanSerialize,
    NoFalseyProps,
    NoTruthyProps,
    InstanceOf,
    Each,
    CheckType,
}

/// Normalized spelling, keyword, and whether the spelling implies negation.
const KEYWORDS: &[(&str, Keyword, bool)] = &[
    ("note", Keyword::Note, false),
    ("noconstraint", Keyword::NoConstraint, false),
    ("integer", Keyword::Integer, false),
    ("positive", Keyword::Positive, false),
    ("negative", Keyword::Negative, false),
    ("notzero", Keyword::NotZero, false),
    ("nonzero", Keyword::NotZero, false),
    ("min", Keyword::Min, false),
    ("max", Keyword::Max, false),
    ("maxx", Keyword::MaxExclusive, false),
    ("maxexclusive", Keyword::MaxExclusive, false),
    ("minlength", Keyword::MinLength, false),
    ("maxlength", Keyword::MaxLength, false),
    ("startswith", Keyword::StartsWith, false),
    ("notstartswith", Keyword::StartsWith, true),
    ("endswith", Keyword::EndsWith, false),
    ("notendswith", Keyword::EndsWith, true),
    ("contains", Keyword::Contains, false),
    ("notcontains", Keyword::Contains, true),
    ("match", Keyword::Match, false),
    ("notmatch", Keyword::Match, true),
    ("empty", Keyword::Empty, false),
    ("notempty", Keyword::Empty, true),
    ("hasproperties", Keyword::HasProperties, false),
    ("nothasproperties", Keyword::HasProperties, true),
    ("notnested", Keyword::NotNested, false),
    ("noprototype", Keyword::NoPrototype, false),
    ("canserialize", Keyword::CanSerialize, false),
    ("nofalseyprops", Keyword::NoFalseyProps, false),
    ("notruthyprops", Keyword::NoTruthyProps, false),
    ("instanceof", Keyword::InstanceOf, false),
    ("notinstanceof", Keyword::InstanceOf, true),
    ("each", Keyword::Each, false),
    ("checktype", Keyword::CheckType, false),
];

/// Lower-cases and drops whitespace, so `Not Zero` becomes `notzero`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Looks up a keyword; the flag reports an implicitly negated spelling.
pub fn lookup(raw: &str) -> Option<(Keyword, bool)> {
    let normalized = normalize(raw);
    KEYWORDS
        .iter()
        .find(|(spelling, _, _)| *spelling == normalized)
        .map(|(_, keyword, negated)| (*keyword, *negated))
}
