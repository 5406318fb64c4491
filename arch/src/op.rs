use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Stack operation selected by an arithmetic/logic mnemonic.
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
pub enum Operation {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl Operation {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_mnemonics() {
        assert_eq!(Operation::parse("add"), Some(Operation::Add));
        assert_eq!(Operation::parse("not"), Some(Operation::Not));
        assert_eq!(Operation::parse("ADD"), None);
        assert_eq!(Operation::parse("hoge"), None);
    }

    #[test]
    fn mnemonics_are_distinct() {
        let names: HashSet<_> = Operation::iter().map(|op| op.mnemonic()).collect();
        assert_eq!(names.len(), 9);
        for op in Operation::iter() {
            assert_eq!(Operation::parse(op.mnemonic()), Some(op));
        }
    }
}
