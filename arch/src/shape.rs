use crate::command::CommandKind;

/// What an argument slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// The command word itself
    None,
    Operation,
    Segment,
    Number,
    Name,
}

/// Slot layout of a command, including the command word's own slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape(&'static [ArgKind]);

impl Shape {
    /// Arity, counting the command word.
    pub fn slots(&self) -> usize {
        self.0.len()
    }

    pub fn kinds(&self) -> &'static [ArgKind] {
        self.0
    }

    /// Slots that produce an argument value.
    pub fn args(&self) -> &'static [ArgKind] {
        match self.0.split_first() {
            Some((ArgKind::None, rest)) => rest,
            _ => self.0,
        }
    }

    pub fn argc(&self) -> usize {
        self.args().len()
    }
}

impl CommandKind {
    pub fn shape(&self) -> Shape {
        const OP: &[ArgKind] = &[ArgKind::Operation];
        const MEM: &[ArgKind] = &[ArgKind::None, ArgKind::Segment, ArgKind::Number];
        const JUMP: &[ArgKind] = &[ArgKind::None, ArgKind::Name];
        const FUNC: &[ArgKind] = &[ArgKind::None, ArgKind::Name, ArgKind::Number];
        const BARE: &[ArgKind] = &[ArgKind::None];
        match self {
            CommandKind::Arithmetic => Shape(OP),
            CommandKind::Push => Shape(MEM),
            CommandKind::Pop => Shape(MEM),
            CommandKind::Label => Shape(JUMP),
            CommandKind::Goto => Shape(JUMP),
            CommandKind::IfGoto => Shape(JUMP),
            CommandKind::Function => Shape(FUNC),
            CommandKind::Call => Shape(FUNC),
            CommandKind::Return => Shape(BARE),
            CommandKind::None => Shape(&[]),
        }
    }
}

#[test]
fn test() {
    assert_eq!(CommandKind::Push.shape().slots(), 3);
    assert_eq!(CommandKind::Push.shape().argc(), 2);
    assert_eq!(
        CommandKind::Call.shape().args(),
        &[ArgKind::Name, ArgKind::Number]
    );
    assert_eq!(CommandKind::Arithmetic.shape().args(), &[ArgKind::Operation]);
    assert_eq!(CommandKind::Return.shape().argc(), 0);
    assert_eq!(CommandKind::None.shape().slots(), 0);
}

#[test]
fn slot_zero_is_the_command_word() {
    let kinds = [
        CommandKind::Push,
        CommandKind::Pop,
        CommandKind::Label,
        CommandKind::Goto,
        CommandKind::IfGoto,
        CommandKind::Function,
        CommandKind::Return,
        CommandKind::Call,
    ];
    for kind in kinds {
        assert_eq!(kind.shape().kinds()[0], ArgKind::None, "{:?}", kind);
    }
    assert_eq!(CommandKind::Arithmetic.shape().kinds()[0], ArgKind::Operation);
}
