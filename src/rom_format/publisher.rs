//! Publisher lookup from the header company code
//!
//! Licensed publishers wrote either a short name ("SEGA", "ACLD") or a
//! numeric code ("T-50", "T-120") into the company field.  Rules are
//! tried in order and the first match wins.  Numeric codes are matched
//! as substrings, so every three digit code is listed before the one
//! and two digit codes it contains.
use crate::rom_format::contains_bytes;
use crate::rom_format::header::HeaderRecord;

/// Returned when no rule matches
pub const UNKNOWN_PUBLISHER: &str = "Unknown";

/// The header field a rule is matched against
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    /// A substring of the lowercased company field
    Company(&'static [u8]),
    /// A substring of the copyright field, case-sensitive
    Copyright(&'static [u8]),
}

/// A single lookup rule
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublisherRule {
    /// What to look for
    pub pattern: Pattern,
    /// The publisher name returned on a match
    pub name: &'static str,
}

impl PublisherRule {
    const fn company(pattern: &'static [u8], name: &'static str) -> PublisherRule {
        PublisherRule {
            pattern: Pattern::Company(pattern),
            name,
        }
    }

    const fn copyright(pattern: &'static [u8], name: &'static str) -> PublisherRule {
        PublisherRule {
            pattern: Pattern::Copyright(pattern),
            name,
        }
    }

    fn matches(&self, company: &[u8], copyright: &[u8]) -> bool {
        match self.pattern {
            Pattern::Company(pattern) => contains_bytes(company, pattern),
            Pattern::Copyright(pattern) => contains_bytes(copyright, pattern),
        }
    }
}

/// Publisher rules in match order
pub static PUBLISHERS: &[PublisherRule] = &[
    PublisherRule::company(b"sega", "Sega"),
    PublisherRule::company(b"acld", "Ballistic"),
    PublisherRule::company(b"asci", "Asciiware"),
    PublisherRule::company(b"inf", "Infogrames"),
    PublisherRule::company(b"rsi", "Razorsoft"),
    PublisherRule::company(b"trec", "Treco"),
    PublisherRule::company(b"vrgn", "Virgin Games"),
    PublisherRule::company(b"wstn", "Westone"),
    PublisherRule::copyright(b"t-snk 95-feb", "Hi-Tech Entertainment"),
    PublisherRule::company(b"100", "THQ Software"),
    PublisherRule::company(b"101", "TecMagik"),
    PublisherRule::company(b"112", "Designer Software"),
    PublisherRule::company(b"113", "Psygnosis"),
    PublisherRule::company(b"119", "Accolade"),
    PublisherRule::company(b"120", "Codemasters"),
    PublisherRule::company(b"125", "Interplay"),
    PublisherRule::company(b"130", "Activision"),
    PublisherRule::company(b"132", "Shiny or Playmates"),
    PublisherRule::company(b"144", "Atlus"),
    PublisherRule::company(b"151", "Infogrames"),
    PublisherRule::company(b"161", "Fox Interactive"),
    PublisherRule::company(b"239", "Disney Interactive"),
    PublisherRule::company(b"10", "Takara"),
    PublisherRule::company(b"11", "Taito or Accolade"),
    PublisherRule::company(b"12", "Capcom"),
    PublisherRule::company(b"13", "Data East"),
    PublisherRule::company(b"14", "Namco or Tengen"),
    PublisherRule::company(b"15", "Sunsoft"),
    PublisherRule::company(b"16", "Bandai"),
    PublisherRule::company(b"17", "Dempa"),
    PublisherRule::company(b"18", "Technosoft"),
    PublisherRule::company(b"19", "Technosoft"),
    PublisherRule::company(b"20", "Asmik"),
    PublisherRule::company(b"22", "Micronet"),
    PublisherRule::company(b"23", "Vic Tokai"),
    PublisherRule::company(b"24", "American Sammy"),
    PublisherRule::company(b"29", "Kyugo"),
    PublisherRule::company(b"32", "Wolf Team"),
    PublisherRule::company(b"33", "Kaneko"),
    PublisherRule::company(b"35", "Toaplan"),
    PublisherRule::company(b"36", "Tecmo"),
    PublisherRule::company(b"40", "Toaplan"),
    PublisherRule::company(b"42", "UFL Company Limited"),
    PublisherRule::company(b"43", "Human"),
    PublisherRule::company(b"45", "Game Arts"),
    PublisherRule::company(b"47", "Sage's Creation"),
    PublisherRule::company(b"48", "Tengen"),
    PublisherRule::company(b"49", "Renovation or Telenet"),
    PublisherRule::company(b"50", "Electronic Arts"),
    PublisherRule::company(b"56", "Razorsoft"),
    PublisherRule::company(b"58", "Mentrix"),
    PublisherRule::company(b"60", "Victor Musical Industries"),
    PublisherRule::company(b"69", "Arena"),
    PublisherRule::company(b"70", "Virgin Games"),
    PublisherRule::company(b"73", "Soft Vision"),
    PublisherRule::company(b"74", "Palsoft"),
    PublisherRule::company(b"76", "Koei"),
    PublisherRule::company(b"79", "U.S. Gold"),
    PublisherRule::company(b"81", "Acclaim or Flying Edge"),
    PublisherRule::company(b"83", "Gametek"),
    PublisherRule::company(b"86", "Absolute"),
    PublisherRule::company(b"93", "Sony"),
    PublisherRule::company(b"95", "Konami"),
    PublisherRule::company(b"97", "Tradewest"),
];

/// Find the publisher name for a raw company field and copyright field
pub fn resolve(company: &[u8], copyright: &[u8]) -> &'static str {
    let company = company.to_ascii_lowercase();

    PUBLISHERS
        .iter()
        .find(|rule| rule.matches(&company, copyright))
        .map_or(UNKNOWN_PUBLISHER, |rule| rule.name)
}

/// Find the publisher name for a parsed header
pub fn publisher(record: &HeaderRecord) -> &'static str {
    resolve(record.company.as_bytes(), record.copyright.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{resolve, Pattern, PUBLISHERS, UNKNOWN_PUBLISHER};
    use crate::rom_format::contains_bytes;

    #[test]
    fn named_publishers_resolve() {
        assert_eq!(resolve(b"SEGA    ", b"1991.APR"), "Sega");
        assert_eq!(resolve(b"(C)SEGA ", b"1991.APR"), "Sega");
        assert_eq!(resolve(b"(C)ACLD ", b"1993.JUN"), "Ballistic");
        assert_eq!(resolve(b"(C)VRGN ", b"1993.OCT"), "Virgin Games");
    }

    #[test]
    fn numeric_publishers_resolve() {
        assert_eq!(resolve(b"50      ", b"        "), "Electronic Arts");
        assert_eq!(resolve(b"(C)T-50 ", b"1990.MAR"), "Electronic Arts");
        assert_eq!(resolve(b"(C)T-95 ", b"1992.DEC"), "Konami");
        assert_eq!(resolve(b"(C)T-19 ", b"1992.DEC"), "Technosoft");
    }

    #[test]
    fn three_digit_codes_win_over_prefixes() {
        assert_eq!(resolve(b"120     ", b"        "), "Codemasters");
        assert_eq!(resolve(b"12      ", b"        "), "Capcom");
        assert_eq!(resolve(b"(C)T-113", b"1993.NOV"), "Psygnosis");
        assert_eq!(resolve(b"(C)T-13 ", b"1993.NOV"), "Data East");
    }

    #[test]
    fn copyright_rule_is_case_sensitive() {
        assert_eq!(
            resolve(b"        ", b"t-snk 95-feb"),
            "Hi-Tech Entertainment"
        );
        assert_eq!(resolve(b"        ", b"T-SNK 95-FEB"), UNKNOWN_PUBLISHER);
    }

    #[test]
    fn unknown_publishers_resolve() {
        assert_eq!(resolve(b"(C)ABCD ", b"1990.JAN"), UNKNOWN_PUBLISHER);
        assert_eq!(resolve(b"", b""), UNKNOWN_PUBLISHER);
    }

    #[test]
    fn no_company_rule_is_shadowed() {
        let patterns: Vec<&[u8]> = PUBLISHERS
            .iter()
            .filter_map(|rule| match rule.pattern {
                Pattern::Company(p) => Some(p),
                Pattern::Copyright(_) => None,
            })
            .collect();

        for (i, earlier) in patterns.iter().enumerate() {
            for later in &patterns[i + 1..] {
                assert!(
                    !contains_bytes(later, earlier),
                    "{:?} is unreachable behind {:?}",
                    String::from_utf8_lossy(later),
                    String::from_utf8_lossy(earlier)
                );
            }
        }
    }
}
