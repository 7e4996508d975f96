//! Grade scale model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the fixed twelve-symbol scale.
///
/// The scale and its point values are institutional constants; there is no
/// lifecycle and no configuration hook for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// A+ (4.0)
    APlus,
    /// A (4.0)
    A,
    /// A- (3.7)
    AMinus,
    /// B+ (3.3)
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.7)
    BMinus,
    /// C+ (2.3)
    CPlus,
    /// C (2.0)
    C,
    /// C- (1.7)
    CMinus,
    /// D+ (1.3)
    DPlus,
    /// D (1.0)
    D,
    /// E- (0.0)
    EMinus,
}

impl Grade {
    /// All grades in scale order, highest first.
    pub const ALL: [Self; 12] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::EMinus,
    ];

    /// Get the point value for this grade.
    ///
    /// # Returns
    /// The grade's point value in `[0.0, 4.0]`
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::EMinus => 0.0,
        }
    }

    /// Get the display symbol for this grade (e.g., "A-").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::EMinus => "E-",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "E-" => Ok(Self::EMinus),
            _ => Err(format!("Unknown grade symbol: '{s}'")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The grade field of a module record.
///
/// Grades arrive from persisted data and import files as free-form strings,
/// so the field has three representable states: empty, a recognized grade on
/// the scale, or an unrecognized symbol carried through untouched. Only
/// `Known` grades contribute points; the other two states yield zero rather
/// than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradeEntry {
    /// No grade selected yet.
    #[default]
    Unset,
    /// A grade on the scale.
    Known(Grade),
    /// A symbol outside the scale, preserved verbatim.
    Unknown(String),
}

impl GradeEntry {
    /// Get the point value contributed by this entry.
    ///
    /// Total over all states: `Unset` and `Unknown` yield `0.0`.
    #[must_use]
    pub const fn points(&self) -> f64 {
        match self {
            Self::Known(grade) => grade.points(),
            Self::Unset | Self::Unknown(_) => 0.0,
        }
    }

    /// Whether a grade (recognized or not) has been entered.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Whether this entry is a recognized grade on the scale.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<&str> for GradeEntry {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Unset
        } else {
            Grade::from_str(s).map_or_else(|_| Self::Unknown(s.to_string()), Self::Known)
        }
    }
}

impl From<String> for GradeEntry {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<GradeEntry> for String {
    fn from(entry: GradeEntry) -> Self {
        entry.to_string()
    }
}

impl From<Grade> for GradeEntry {
    fn from(grade: Grade) -> Self {
        Self::Known(grade)
    }
}

impl fmt::Display for GradeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Known(grade) => write!(f, "{grade}"),
            Self::Unknown(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values_match_scale() {
        let expected = [
            (Grade::APlus, 4.0),
            (Grade::A, 4.0),
            (Grade::AMinus, 3.7),
            (Grade::BPlus, 3.3),
            (Grade::B, 3.0),
            (Grade::BMinus, 2.7),
            (Grade::CPlus, 2.3),
            (Grade::C, 2.0),
            (Grade::CMinus, 1.7),
            (Grade::DPlus, 1.3),
            (Grade::D, 1.0),
            (Grade::EMinus, 0.0),
        ];

        for (grade, points) in expected {
            assert!(
                (grade.points() - points).abs() < f64::EPSILON,
                "{grade} should be worth {points}"
            );
        }
    }

    #[test]
    fn symbols_round_trip_through_from_str() {
        for grade in Grade::ALL {
            assert_eq!(grade.symbol().parse::<Grade>(), Ok(grade));
        }
    }

    #[test]
    fn unknown_symbols_fail_to_parse() {
        assert!("F".parse::<Grade>().is_err());
        assert!("a+".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn entry_from_empty_string_is_unset() {
        let entry = GradeEntry::from("");
        assert_eq!(entry, GradeEntry::Unset);
        assert!(!entry.is_set());
        assert!((entry.points() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_from_known_symbol() {
        let entry = GradeEntry::from("A-");
        assert_eq!(entry, GradeEntry::Known(Grade::AMinus));
        assert!(entry.is_known());
        assert!((entry.points() - 3.7).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_preserves_unrecognized_symbol() {
        let entry = GradeEntry::from("Z+");
        assert_eq!(entry, GradeEntry::Unknown("Z+".to_string()));
        assert!(entry.is_set());
        assert!(!entry.is_known());
        assert!((entry.points() - 0.0).abs() < f64::EPSILON);
        assert_eq!(entry.to_string(), "Z+");
    }

    #[test]
    fn entry_serializes_as_plain_string() {
        let json = serde_json::to_string(&GradeEntry::Known(Grade::BPlus)).expect("serialize");
        assert_eq!(json, "\"B+\"");

        let back: GradeEntry = serde_json::from_str("\"B+\"").expect("deserialize");
        assert_eq!(back, GradeEntry::Known(Grade::BPlus));

        let unset: GradeEntry = serde_json::from_str("\"\"").expect("deserialize empty");
        assert_eq!(unset, GradeEntry::Unset);
    }
}
