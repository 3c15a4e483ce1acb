//! Service classification for Belo Horizonte bus lines.
//!
//! Route listings (GTFS and the BHTrans line tables) carry a line number
//! and a display name but not the tariff category, so the category is
//! derived from the numbering conventions of the network. Classification
//! is total: a line that matches no convention counts as structural.

use crate::domain::ServiceType;

/// Stations of the MOVE BRT network. A line named after one of these is a
/// MOVE trunk line.
const MOVE_STATIONS: [&str; 8] = [
    "barreiro",
    "pampulha",
    "venda nova",
    "vilarinho",
    "são gabriel",
    "diamante",
    "central",
    "lagoinha",
];

/// Classifies a line by its number and display name.
///
/// Rules are checked in a fixed order, so a line matching several
/// conventions gets the first one: MOVE trunk numbers win over community
/// markers in the name, and trunk markers such as `Centro` win over
/// `Circular`.
///
/// # Examples
///
/// ```
/// use fare_engine::classify::classify_line;
/// use fare_engine::domain::ServiceType;
///
/// assert_eq!(
///     classify_line("1404A", "Sarandi / Estação Venda Nova"),
///     ServiceType::Alimentadoras,
/// );
/// assert_eq!(
///     classify_line("63", "Estação Diamante / Centro"),
///     ServiceType::TroncaisMove,
/// );
/// ```
pub fn classify_line(number: &str, name: &str) -> ServiceType {
    let number = number.trim();
    let name_lower = name.trim().to_lowercase();

    if starts_at_move_station(&name_lower) || is_move_number(number) {
        return ServiceType::TroncaisMove;
    }
    if ["centro", "direta", "paradora"]
        .iter()
        .any(|marker| name_lower.contains(marker))
    {
        return ServiceType::TroncaisConvencionais;
    }
    if is_structural_number(number) {
        return ServiceType::Estruturais;
    }
    if is_feeder_number(number) {
        return ServiceType::Alimentadoras;
    }
    if name_lower.contains("circular") {
        return ServiceType::Circular;
    }
    if word_then_whitespace(&name_lower, "vila")
        || name_lower.contains("favela")
        || word_then_whitespace(&name_lower, "conjunto")
        || name_lower.contains("aglomerado")
    {
        return ServiceType::VilasFavelas;
    }
    if name_lower.contains("metro") || name_lower.contains("metrô") {
        return ServiceType::Metro;
    }
    fallback_by_number(number)
}

/// True when the name starts with `Estação` followed by a MOVE station.
fn starts_at_move_station(name_lower: &str) -> bool {
    let Some(rest) = name_lower.strip_prefix("estação") else {
        return false;
    };
    if !rest.chars().next().is_some_and(char::is_whitespace) {
        return false;
    }
    let station = rest.trim_start();
    MOVE_STATIONS
        .iter()
        .any(|candidate| station.starts_with(candidate))
}

/// MOVE trunk numbers: one or two digits, or a three-digit number in one
/// of the MOVE corridors.
fn is_move_number(number: &str) -> bool {
    if !is_digits(number) {
        return false;
    }
    match number.len() {
        1 | 2 => true,
        3 => matches!(
            number.parse::<u32>(),
            Ok(300..=309 | 320..=349 | 500..=529 | 600..=649 | 700..=749 | 800..=859)
        ),
        _ => false,
    }
}

/// Structural numbers: 200-999 or a four-digit number.
fn is_structural_number(number: &str) -> bool {
    if !is_digits(number) {
        return false;
    }
    match number.len() {
        3 => !number.starts_with(['0', '1']),
        4 => !number.starts_with('0'),
        _ => false,
    }
}

/// Feeder numbers: three or four digits and a trailing letter, e.g. `1404A`.
fn is_feeder_number(number: &str) -> bool {
    let Some(last) = number.chars().last() else {
        return false;
    };
    if !last.is_ascii_alphabetic() {
        return false;
    }
    let digits = &number[..number.len() - last.len_utf8()];
    (digits.len() == 3 || digits.len() == 4) && is_digits(digits) && !digits.starts_with('0')
}

/// Buckets an otherwise unmatched number by magnitude, after dropping the
/// `SC` (complementary) and `S` (special) service prefixes.
fn fallback_by_number(number: &str) -> ServiceType {
    let stripped = number.replace("SC", "").replace('S', "");
    let stripped = stripped.trim();
    if is_digits(stripped) {
        if let Ok(value) = stripped.parse::<u64>() {
            if value < 100 {
                return ServiceType::TroncaisConvencionais;
            }
            if value < 1_000 {
                return ServiceType::Estruturais;
            }
            if value < 10_000 {
                return ServiceType::Alimentadoras;
            }
        }
    }
    ServiceType::Estruturais
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// True when `word` occurs in `haystack` with whitespace right after it,
/// so `vila` matches "Vila Cemig" but not "Vilarinho".
fn word_then_whitespace(haystack: &str, word: &str) -> bool {
    let mut rest = haystack;
    while let Some(pos) = rest.find(word) {
        let after = &rest[pos + word.len()..];
        if after.chars().next().is_some_and(char::is_whitespace) {
            return true;
        }
        rest = after;
    }
    false
}
