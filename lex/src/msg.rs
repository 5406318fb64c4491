use color_print::ceprintln;

use crate::{error::LexError, reader::Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
}

#[derive(Debug, Clone)]
pub struct Msg {
    kind: MsgKind,
    err: LexError,
    line: Line,
}

impl Msg {
    pub fn kind(&self) -> MsgKind {
        self.kind
    }

    pub fn err(&self) -> &LexError {
        &self.err
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn print(&self, path: &str) {
        match self.kind {
            MsgKind::Error => ceprintln!("<red,bold>error</>: {}", self.err),
            MsgKind::Warn => ceprintln!("<yellow,bold>warn</>: {}", self.err),
        }
        ceprintln!("     <blue>--></> <underline>{}:{}</>", path, self.line.no());
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", self.line.no(), self.line.raw());
        ceprintln!("      <blue>|</>");
    }
}

/// Diagnostics of one scan, in report order.
#[derive(Debug, Default, Clone)]
pub struct Msgs(Vec<Msg>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(Vec::new())
    }

    pub fn error(&mut self, err: LexError, line: &Line) {
        self.0.push(Msg {
            kind: MsgKind::Error,
            err,
            line: line.clone(),
        });
    }

    pub fn warn(&mut self, err: LexError, line: &Line) {
        self.0.push(Msg {
            kind: MsgKind::Warn,
            err,
            line: line.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Msg> {
        self.0.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Msg> {
        self.0.iter().filter(|msg| msg.kind == MsgKind::Error)
    }

    pub fn has_error(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn dump(&self, path: &str) {
        for msg in &self.0 {
            msg.print(path);
        }
    }
}

impl<'a> IntoIterator for &'a Msgs {
    type Item = &'a Msg;
    type IntoIter = std::slice::Iter<'a, Msg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
