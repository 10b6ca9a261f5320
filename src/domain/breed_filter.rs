//! Range-predicate parser for the breed catalog.
//!
//! The catalog stores life span and weight as free text sourced from an
//! upstream breed API with inconsistent formatting ("10 - 15 years",
//! "8 to 12 years", "5kg"). Exact numeric comparison is impossible without
//! normalizing the data, so range filters are compiled into best-effort
//! textual patterns evaluated against the stored strings. False positives
//! and negatives are accepted for unusual formats; malformed filter input is
//! dropped silently rather than failing the request.
use regex::Regex;

use crate::{
    constants::{LIFE_SPAN_SCAN_MAX_YEARS, WEIGHT_SCAN_MAX_KG},
    models::{Breed, BreedFilterQuery, Species},
};

/// Request-scoped filter criteria for the breed catalog. Built from the raw
/// query by a lenient parse: numeric fields that fail to parse are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreedFilter {
    pub species: Option<Species>,
    pub search: Option<String>,
    pub origin: Option<String>,
    pub min_life_span: Option<u32>,
    pub max_life_span: Option<u32>,
    pub weight: Option<String>,
}

impl From<BreedFilterQuery> for BreedFilter {
    fn from(query: BreedFilterQuery) -> Self {
        Self {
            species: query.species,
            search: query.search,
            origin: query.origin,
            min_life_span: parse_years(query.min_life_span.as_deref()),
            max_life_span: parse_years(query.max_life_span.as_deref()),
            weight: query.weight,
        }
    }
}

fn parse_years(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
}

/// Which breed field a textual predicate runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedTextField {
    Name,
    Description,
    Origin,
    LifeSpan,
    Weight,
}

impl BreedTextField {
    fn get<'a>(&self, breed: &'a Breed) -> Option<&'a str> {
        match self {
            BreedTextField::Name => Some(breed.name.as_str()),
            BreedTextField::Description => breed.description.as_deref(),
            BreedTextField::Origin => breed.origin.as_deref(),
            BreedTextField::LifeSpan => breed.life_span.as_deref(),
            BreedTextField::Weight => breed.weight.as_deref(),
        }
    }
}

/// A composable boolean test over a breed record. Built per request,
/// applied by the repository, then discarded.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Matches every record.
    All,
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
    SpeciesIs(Species),
    IsActive(bool),
    /// Case-insensitive substring match. Missing fields never match.
    Contains {
        field: BreedTextField,
        needle: String,
    },
    /// Regex match against the raw field text. Missing fields never match.
    Matches {
        field: BreedTextField,
        pattern: Regex,
    },
}

impl Predicate {
    pub fn matches(&self, breed: &Breed) -> bool {
        match self {
            Predicate::All => true,
            Predicate::And(clauses) => clauses.iter().all(|clause| clause.matches(breed)),
            Predicate::Or(clauses) => clauses.iter().any(|clause| clause.matches(breed)),
            Predicate::Not(clause) => !clause.matches(breed),
            Predicate::SpeciesIs(species) => breed.species == *species,
            Predicate::IsActive(active) => breed.is_active == *active,
            Predicate::Contains { field, needle } => field
                .get(breed)
                .is_some_and(|text| text.to_lowercase().contains(needle)),
            Predicate::Matches { field, pattern } => {
                field.get(breed).is_some_and(|text| pattern.is_match(text))
            }
        }
    }

    fn contains(field: BreedTextField, needle: &str) -> Self {
        Predicate::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    /// Compiles a regex predicate. Sources are built from validated integers
    /// and fixed syntax; a compile failure is treated like malformed filter
    /// input and drops the clause.
    fn pattern(field: BreedTextField, source: &str) -> Option<Self> {
        Regex::new(source)
            .ok()
            .map(|pattern| Predicate::Matches { field, pattern })
    }
}

/// Builds the inclusion predicate for a breed listing request.
///
/// Always restricts to active breeds. Each present criterion adds one
/// conjunct; malformed numeric input adds nothing. Pure and deterministic:
/// the same criteria always produce a predicate with the same match set.
pub fn build_breed_filter(criteria: &BreedFilter) -> Predicate {
    let mut clauses = vec![Predicate::IsActive(true)];

    if let Some(species) = criteria.species {
        clauses.push(Predicate::SpeciesIs(species));
    }
    if let Some(search) = non_blank(criteria.search.as_deref()) {
        clauses.push(Predicate::Or(vec![
            Predicate::contains(BreedTextField::Name, search),
            Predicate::contains(BreedTextField::Description, search),
        ]));
    }
    if let Some(origin) = non_blank(criteria.origin.as_deref()) {
        clauses.push(Predicate::contains(BreedTextField::Origin, origin));
    }
    if let Some(min_years) = criteria.min_life_span {
        if let Some(clause) = life_span_min_clause(min_years) {
            clauses.push(clause);
        }
    }
    if let Some(max_years) = criteria.max_life_span {
        if let Some(clause) = life_span_max_clause(max_years) {
            clauses.push(clause);
        }
    }
    if let Some(weight) = criteria.weight.as_deref() {
        if let Some(clause) = weight_clause(weight) {
            clauses.push(clause);
        }
    }

    Predicate::And(clauses)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Patterns for "the stored range starts at `min` or spans across it".
///
/// Exact-start forms: "N -", "N to", "N years" at the beginning of the
/// string. Spanning forms: a lower bound below `min` paired with an upper
/// bound of at least `min`, scanned up to [`LIFE_SPAN_SCAN_MAX_YEARS`].
fn life_span_min_clause(min: u32) -> Option<Predicate> {
    let mut patterns = vec![
        format!(r"^\s*{min}\b\s*-"),
        format!(r"^\s*{min}\b\s*to\b"),
        format!(r"^\s*{min}\b\s*years?\b"),
    ];

    if min >= 1 && min <= LIFE_SPAN_SCAN_MAX_YEARS {
        let uppers = join_range(min, LIFE_SPAN_SCAN_MAX_YEARS);
        for lower in 1..min {
            patterns.push(format!(r"^\s*{lower}\b\s*(?:-|to)\s*(?:{uppers})\b"));
        }
    }

    Predicate::pattern(
        BreedTextField::LifeSpan,
        &format!("(?i)(?:{})", patterns.join(")|(?:")),
    )
}

/// Patterns for "the stored range ends at `max` or entirely below it".
///
/// Exact-end forms: "- M", "to M", or a single "M years". The below-max side
/// is approximated by excluding any standalone integer above `max` within
/// the scan range. A `max` at or past the scan bound constrains nothing and
/// yields no clause.
///
/// Unlike the min clause, a missing life span passes here: the exclusion
/// side has no text to match, so only ranges that mention a larger number
/// are filtered out. Breeds with unknown longevity stay visible under an
/// upper bound alone.
fn life_span_max_clause(max: u32) -> Option<Predicate> {
    if max >= LIFE_SPAN_SCAN_MAX_YEARS {
        return None;
    }

    let exact_patterns = [
        format!(r"-\s*{max}\b"),
        format!(r"\bto\s+{max}\b"),
        format!(r"^\s*{max}\b\s*years?\b"),
    ];
    let exact = Predicate::pattern(
        BreedTextField::LifeSpan,
        &format!("(?i)(?:{})", exact_patterns.join(")|(?:")),
    )?;

    let over = join_range(max + 1, LIFE_SPAN_SCAN_MAX_YEARS);
    let below = Predicate::pattern(BreedTextField::LifeSpan, &format!(r"\b(?:{over})\b"))?;

    Some(Predicate::Or(vec![exact, Predicate::Not(Box::new(below))]))
}

/// Pattern for "the stored weight text mentions an integer inside the
/// requested range". The range is parsed leniently from "min-max", "min-",
/// "-max" or a single number; unparsable input yields no clause.
fn weight_clause(raw: &str) -> Option<Predicate> {
    let (low, high) = parse_weight_bounds(raw)?;
    let values = join_range(low, high);
    Predicate::pattern(BreedTextField::Weight, &format!(r"\b(?:{values})\b"))
}

fn parse_weight_bounds(raw: &str) -> Option<(u32, u32)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (low, high) = match raw.split_once('-') {
        Some((left, right)) => {
            let left = left.trim();
            let right = right.trim();
            // A bare separator carries no bound at all.
            if left.is_empty() && right.is_empty() {
                return None;
            }
            let low = if left.is_empty() { 0 } else { parse_kg(left)? };
            let high = if right.is_empty() {
                WEIGHT_SCAN_MAX_KG
            } else {
                parse_kg(right)?
            };
            (low, high)
        }
        None => {
            let value = parse_kg(raw)?;
            (value, value)
        }
    };

    let low = low.min(WEIGHT_SCAN_MAX_KG);
    let high = high.min(WEIGHT_SCAN_MAX_KG);
    if low > high {
        return None;
    }
    Some((low, high))
}

fn parse_kg(value: &str) -> Option<u32> {
    let parsed = value.parse::<f64>().ok()?;
    if !parsed.is_finite() || parsed < 0.0 {
        return None;
    }
    Some(parsed.round() as u32)
}

fn join_range(from: u32, to: u32) -> String {
    (from..=to)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("|")
}
