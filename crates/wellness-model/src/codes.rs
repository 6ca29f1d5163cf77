//! Display-name tables for the wellness theme and region codes carried by
//! the destination data. Codes without an entry are shown verbatim.

/// Theme code substituted when the source data carries none.
pub const DEFAULT_THEME_CODE: &str = "A0202";

static THEME_NAMES: &[(&str, &str)] = &[
    ("A0101", "Nature"),
    ("A0102", "Humanities (culture/arts/history)"),
    ("A0201", "Lodging"),
    ("A0202", "Attractions"),
    ("A0203", "Leisure sports"),
    ("A0204", "Shopping"),
    ("A0205", "Dining"),
    ("A0206", "Transport"),
    ("A0207", "Cultural facilities"),
    ("A0208", "Festivals & performances"),
    ("B0201", "Accommodations"),
    ("C0101", "Recommended course"),
    ("C0102", "Family course"),
    ("C0103", "Solo course"),
    ("C0104", "Healing course"),
    ("C0105", "Walking course"),
    ("C0106", "Camping course"),
    ("C0107", "Food course"),
    ("C0108", "Culture course"),
    ("C0109", "Wellness walking course"),
];

static REGION_NAMES: &[(u32, &str)] = &[
    (1, "Seoul"),
    (2, "Incheon"),
    (3, "Daejeon"),
    (4, "Daegu"),
    (5, "Gwangju"),
    (6, "Busan"),
    (7, "Ulsan"),
    (8, "Sejong"),
    (31, "Gyeonggi-do"),
    (32, "Gangwon-do"),
    (33, "Chungcheongbuk-do"),
    (34, "Chungcheongnam-do"),
    (35, "Gyeongsangbuk-do"),
    (36, "Gyeongsangnam-do"),
    (37, "Jeollabuk-do"),
    (38, "Jeollanam-do"),
    (39, "Jeju"),
];

/// Display name for a wellness theme code.
pub fn theme_name(code: &str) -> Option<&'static str> {
    THEME_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

/// Display name for an administrative region code.
pub fn region_name(code: u32) -> Option<&'static str> {
    REGION_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}
