use color_print::cformat;
use serde::Serialize;
use std::fmt;
use vmarch::{ArgKind, CommandKind, Operation, Segment};

// ----------------------------------------------------------------------------
// Argument

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arg {
    Op(Operation),
    Seg(Segment),
    Num(i64),
    Name(String),
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Op(_) => ArgKind::Operation,
            Arg::Seg(_) => ArgKind::Segment,
            Arg::Num(_) => ArgKind::Number,
            Arg::Name(_) => ArgKind::Name,
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Arg::Op(op) => cformat!("<red>{}</>", op),
            Arg::Seg(seg) => cformat!("<blue>{}</>", seg),
            Arg::Num(n) => cformat!("<y>{}</>", n),
            Arg::Name(name) => cformat!("<g>{}</>", name),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Op(op) => write!(f, "{}", op),
            Arg::Seg(seg) => write!(f, "{}", seg),
            Arg::Num(n) => write!(f, "{}", n),
            Arg::Name(name) => write!(f, "{}", name),
        }
    }
}

// ----------------------------------------------------------------------------
// Instruction

/// A fully validated statement. Only the scanner builds one; it can be
/// serialized for the code generator but never read back in.
///
/// ```compile_fail
/// let inst: vmlex::Inst = serde_yaml::from_str("cmd: Pop\nargs: []\n").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inst {
    cmd: CommandKind,
    args: Vec<Arg>,
}

impl Inst {
    /// Only the scanner builds instructions, after every argument checked out.
    pub(crate) fn new(cmd: CommandKind, args: Vec<Arg>) -> Self {
        debug_assert!(cmd != CommandKind::None);
        debug_assert_eq!(args.len(), cmd.shape().argc());
        Inst { cmd, args }
    }

    pub fn cmd(&self) -> CommandKind {
        self.cmd
    }

    pub fn argc(&self) -> usize {
        self.args.len()
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn arg(&self, idx: usize) -> Option<&Arg> {
        self.args.get(idx)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|arg| match arg {
            Arg::Name(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn cformat(&self) -> String {
        let args: Vec<String> = self.args.iter().map(|arg| arg.cfmt()).collect();
        match self.cmd.keyword() {
            Some(keyword) if args.is_empty() => cformat!("<red>{}</>", keyword),
            Some(keyword) => cformat!("<red>{:<9}</>{}", keyword, args.join(" ")),
            None => args.join(" "),
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = vec![];
        if let Some(keyword) = self.cmd.keyword() {
            words.push(keyword.to_string());
        }
        words.extend(self.args.iter().map(|arg| arg.to_string()));
        write!(f, "{}", words.join(" "))
    }
}
