use std::{
    fs::File,
    io::{BufRead, BufReader},
};
use vmarch::{ArgKind, CommandKind, Operation, Segment};

use crate::{
    error::{Error, LexError},
    inst::{Arg, Inst},
    list::InstList,
    msg::Msgs,
    reader::{Line, LineReader},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Unknown commands fail the run instead of being skipped.
    pub strict: bool,
}

// ----------------------------------------------------------------------------
// Line tokenizer

/// Classify the command word of `line` and check its arguments against the
/// command's shape. Every problem on the line is collected; the instruction
/// is only built when none of them rejects the line.
pub fn tokenize(line: &Line) -> (Option<Inst>, Vec<LexError>) {
    let mut errs = vec![];
    let mut words = line.words();

    let word = match words.next() {
        Some(word) => word,
        None => return (None, errs),
    };

    let cmd = CommandKind::classify(word);
    if cmd == CommandKind::None {
        errs.push(LexError::UnknownCommand(word.to_string()));
        return (None, errs);
    }

    let shape = cmd.shape();
    let mut args = Vec::with_capacity(shape.argc());
    let mut seg: Option<Segment> = None;

    for (idx, kind) in shape.args().iter().enumerate() {
        // Resolved from the command word itself
        if *kind == ArgKind::Operation {
            match Operation::parse(word) {
                Some(op) => args.push(Arg::Op(op)),
                None => errs.push(LexError::UnknownCommand(word.to_string())),
            }
            continue;
        }

        let next = match words.next() {
            Some(next) => next,
            None => {
                errs.push(LexError::MissingArgument(idx + 1, word.to_string()));
                continue;
            }
        };

        match kind {
            ArgKind::Segment => match Segment::parse(next) {
                Some(s) => {
                    if cmd == CommandKind::Pop && !s.is_writable() {
                        errs.push(LexError::WriteToConstant);
                    }
                    seg = Some(s);
                    args.push(Arg::Seg(s));
                }
                None => errs.push(LexError::InvalidSegment(next.to_string())),
            },
            ArgKind::Number => match next.parse::<i64>() {
                Ok(num) => {
                    if let (true, Some(s)) = (cmd.is_memory_access(), seg) {
                        let range = s.index_range();
                        if !range.contains(&num) {
                            errs.push(LexError::NumberOutOfRange(
                                num,
                                s.name().to_string(),
                                *range.start(),
                                *range.end(),
                            ));
                        }
                    }
                    args.push(Arg::Num(num));
                }
                Err(_) => errs.push(LexError::NumberParse(next.to_string())),
            },
            ArgKind::Name => args.push(Arg::Name(next.to_string())),
            ArgKind::None | ArgKind::Operation => {}
        }
    }

    let extra: Vec<&str> = words.collect();
    if !extra.is_empty() {
        errs.push(LexError::ExtraArgument(extra.join(" ")));
    }

    if errs.iter().any(|err| err.rejects_line()) {
        (None, errs)
    } else {
        (Some(Inst::new(cmd, args)), errs)
    }
}

// ----------------------------------------------------------------------------
// Scanner

/// Outcome of scanning a whole stream.
#[derive(Debug)]
pub struct Scan {
    insts: InstList,
    msgs: Msgs,
    /// Set when the stream could not be read to its end
    abort: Option<Error>,
}

impl Scan {
    pub fn msgs(&self) -> &Msgs {
        &self.msgs
    }

    pub fn is_failed(&self) -> bool {
        self.abort.is_some() || self.msgs.has_error()
    }

    /// Hand the instructions over, unless reading stopped early or any line failed.
    pub fn finish(self) -> Result<InstList, Error> {
        if let Some(err) = self.abort {
            return Err(err);
        }
        if self.msgs.has_error() {
            Err(Error::Failed(self.msgs.errors().count()))
        } else {
            Ok(self.insts)
        }
    }
}

pub struct Scanner<R> {
    reader: LineReader<R>,
    config: ScanConfig,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(input: R, config: ScanConfig) -> Self {
        Scanner {
            reader: LineReader::new(input),
            config,
        }
    }

    /// Scan to the end of the stream. A read error stops the scan but keeps
    /// the diagnostics of the lines before it.
    pub fn scan(mut self) -> Scan {
        let mut insts = InstList::new();
        let mut msgs = Msgs::new();

        let abort = loop {
            let line = match self.reader.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break None,
                Err(err) => break Some(err),
            };
            let (inst, errs) = tokenize(&line);
            for err in errs {
                if err.is_fatal(self.config.strict) {
                    msgs.error(err, &line);
                } else {
                    msgs.warn(err, &line);
                }
            }
            if let Some(inst) = inst {
                insts.append(inst);
            }
        };

        Scan { insts, msgs, abort }
    }
}

impl Scanner<BufReader<File>> {
    pub fn open(path: &str, config: ScanConfig) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        Ok(Scanner::new(BufReader::new(file), config))
    }
}
