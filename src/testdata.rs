//! Random test data generation
//!
//! Registration and bill-pay flows need plausible person/address data that
//! is unique per run, so usernames never collide with earlier runs against
//! the shared demo deployment.

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

const FIRST_NAMES: &[&str] = &[
    "Ava", "Bruno", "Carmen", "Derek", "Elena", "Felix", "Greta", "Hugo", "Irene", "Jonas",
    "Kara", "Liam", "Mona", "Nadia", "Oscar", "Priya", "Quinn", "Rosa", "Stefan", "Tessa",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bergstrom", "Castillo", "Dunlap", "Eriksen", "Fontaine", "Gallagher", "Hammond",
    "Iverson", "Jacobi", "Keller", "Lindqvist", "Moreno", "Novak", "Okafor", "Petrov",
    "Quintero", "Radcliffe", "Sandoval", "Thornton",
];

const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Birch", "Willow", "Chestnut", "Juniper", "Alder", "Linden",
    "Sycamore",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Ln", "Dr", "Ct"];

const CITIES: &[&str] = &[
    "Fairview", "Riverton", "Lakewood", "Brookside", "Milltown", "Ashford", "Greendale",
    "Harborview", "Kingsport", "Westfield",
];

const STATES: &[&str] = &[
    "California", "Texas", "Ohio", "Georgia", "Oregon", "Vermont", "Arizona", "Colorado",
    "Montana", "Virginia",
];

fn pick(list: &[&str]) -> String {
    list.choose(&mut thread_rng())
        .copied()
        .unwrap_or(list[0])
        .to_string()
}

/// Digits-only string of the given length (SSNs, payee account numbers).
pub fn numeric_string(len: usize) -> String {
    let mut rng = thread_rng();
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// Username unique enough to register freshly on every run.
pub fn username() -> String {
    let mut rng = thread_rng();
    format!(
        "{}.{}{}",
        pick(FIRST_NAMES).to_lowercase(),
        pick(LAST_NAMES).to_lowercase(),
        rng.gen_range(10_000..100_000)
    )
}

pub fn password() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

pub fn first_name() -> String {
    pick(FIRST_NAMES)
}

pub fn last_name() -> String {
    pick(LAST_NAMES)
}

pub fn full_name() -> String {
    format!("{} {}", first_name(), last_name())
}

pub fn street_address() -> String {
    let mut rng = thread_rng();
    format!("{} {} {}", rng.gen_range(1..9999), pick(STREET_NAMES), pick(STREET_SUFFIXES))
}

pub fn city() -> String {
    pick(CITIES)
}

pub fn state() -> String {
    pick(STATES)
}

/// Five-digit zip, `#####` shape.
pub fn zip_code() -> String {
    numeric_string(5)
}

/// Phone number in the `###-###-####` shape the UI expects.
pub fn phone_number() -> String {
    format!("{}-{}-{}", numeric_string(3), numeric_string(3), numeric_string(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_shape() {
        let ssn = numeric_string(9);
        assert_eq!(ssn.len(), 9);
        assert!(ssn.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_phone_shape() {
        let phone = phone_number();
        let parts: Vec<&str> = phone.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_zip_shape() {
        assert_eq!(zip_code().len(), 5);
    }

    #[test]
    fn test_usernames_are_distinct() {
        // Collisions would break fresh registration against the shared
        // deployment; 5 digits of entropy make repeats vanishingly rare.
        let a = username();
        let b = username();
        assert!(a.contains('.'));
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_length() {
        assert_eq!(password().len(), 12);
    }

    #[test]
    fn test_full_name_has_two_parts() {
        assert_eq!(full_name().split_whitespace().count(), 2);
    }
}
