//! Fixed vocabulary recognised by the query interpreter.
//!
//! City and area lists are ordered: the interpreter takes the first entry
//! found in the query text, so earlier entries win over later ones.

use regex::Regex;
use std::sync::LazyLock;

/// Known city names and aliases, paired with their canonical name
pub const CITIES: &[(&str, &str)] = &[
    ("lagos", "lagos"),
    ("abuja", "abuja"),
    ("port harcourt", "port harcourt"),
    ("ibadan", "ibadan"),
    ("enugu", "enugu"),
    ("ph", "port harcourt"),
    ("phc", "port harcourt"),
];

/// Known neighbourhoods, independent of city
pub const AREAS: &[&str] = &[
    "lekki",
    "ikeja",
    "oniru",
    "yaba",
    "wuse",
    "gwarinpa",
    "victoria island",
    "vi",
    "gra",
    "ring road",
    "peter odili",
];

pub const AMENITIES: &[&str] = &[
    "wifi",
    "ac",
    "pool",
    "gym",
    "parking",
    "security",
    "kitchen",
    "generator",
    "fan",
];

/// Label added whenever the query mentions security at all
pub const SECURITY_LABEL: &str = "24/7 Security";

pub const SECURITY_KEYWORD: &str = "security";

/// Words that cap the budget at [`BUDGET_CAP`]
pub const BUDGET_KEYWORDS: &[&str] = &["budget", "cheap"];

pub const BUDGET_CAP: u64 = 40_000;

/// Price figures in queries are written in thousands of naira
pub const PRICE_UNIT: u64 = 1_000;

pub static BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"between\s*([0-9]{2,6}) ?k?\s*(?:and|to)\s*([0-9]{2,6}) ?k?").expect("valid regex")
});

/// Upper-bound phrasings, tried in this order
pub static UPPER_BOUNDS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"under\s*([0-9]{2,6}) ?k?").expect("valid regex"),
        Regex::new(r"below\s*([0-9]{2,6}) ?k?").expect("valid regex"),
        Regex::new(r"max\s*([0-9]{2,6}) ?k?").expect("valid regex"),
    ]
});

pub static BEDROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])\s*(?:bed|br|bedroom)").expect("valid regex"));
