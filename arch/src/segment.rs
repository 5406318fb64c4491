use serde::Serialize;
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub const TEMP_MAX: i64 = 7;
pub const INDEX_MAX: i64 = 32767;

/// Memory segment addressed by `push` and `pop`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Argument,
    Local,
    Static,
    Constant,
    This,
    That,
    Pointer,
    Temp,
}

impl Segment {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// `constant` is read-only.
    pub fn is_writable(&self) -> bool {
        *self != Segment::Constant
    }

    /// Valid indices for this segment.
    pub fn index_range(&self) -> RangeInclusive<i64> {
        match self {
            Segment::Temp => 0..=TEMP_MAX,
            _ => 0..=INDEX_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_names() {
        assert_eq!(Segment::parse("local"), Some(Segment::Local));
        assert_eq!(Segment::parse("temp"), Some(Segment::Temp));
        assert_eq!(Segment::parse("Local"), None);
        assert_eq!(Segment::parse("heap"), None);
        for seg in Segment::iter() {
            assert_eq!(Segment::parse(seg.name()), Some(seg));
        }
    }

    #[test]
    fn ranges() {
        assert!(Segment::Temp.index_range().contains(&7));
        assert!(!Segment::Temp.index_range().contains(&8));
        assert!(Segment::Constant.index_range().contains(&32767));
        assert!(!Segment::Local.index_range().contains(&32768));
        assert!(!Segment::Local.index_range().contains(&-1));
    }

    #[test]
    fn only_constant_is_read_only() {
        let read_only: Vec<_> = Segment::iter().filter(|s| !s.is_writable()).collect();
        assert_eq!(read_only, vec![Segment::Constant]);
    }
}
