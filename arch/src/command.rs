use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandKind {
    Push,
    Pop,
    Label,
    Goto,
    IfGoto,
    Function,
    Return,
    Call,
    Arithmetic,
    #[default]
    None,
}

static COMMANDS: Lazy<HashMap<&'static str, CommandKind>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, CommandKind> = HashMap::new();
    map.insert("push", CommandKind::Push);
    map.insert("pop", CommandKind::Pop);
    map.insert("label", CommandKind::Label);
    map.insert("goto", CommandKind::Goto);
    map.insert("if-goto", CommandKind::IfGoto);
    map.insert("function", CommandKind::Function);
    map.insert("return", CommandKind::Return);
    map.insert("call", CommandKind::Call);
    map.insert("add", CommandKind::Arithmetic);
    map.insert("sub", CommandKind::Arithmetic);
    map.insert("neg", CommandKind::Arithmetic);
    map.insert("eq", CommandKind::Arithmetic);
    map.insert("gt", CommandKind::Arithmetic);
    map.insert("lt", CommandKind::Arithmetic);
    map.insert("and", CommandKind::Arithmetic);
    map.insert("or", CommandKind::Arithmetic);
    map.insert("not", CommandKind::Arithmetic);
    map
});

impl CommandKind {
    /// Exact match against the command table. Unknown words give `None`.
    pub fn classify(word: &str) -> CommandKind {
        COMMANDS.get(word).copied().unwrap_or_default()
    }

    /// Source keyword. Arithmetic commands are spelled by their operation.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            CommandKind::Push => Some("push"),
            CommandKind::Pop => Some("pop"),
            CommandKind::Label => Some("label"),
            CommandKind::Goto => Some("goto"),
            CommandKind::IfGoto => Some("if-goto"),
            CommandKind::Function => Some("function"),
            CommandKind::Return => Some("return"),
            CommandKind::Call => Some("call"),
            CommandKind::Arithmetic | CommandKind::None => None,
        }
    }

    /// Commands whose number operand indexes a segment.
    pub fn is_memory_access(&self) -> bool {
        matches!(self, CommandKind::Push | CommandKind::Pop)
    }
}
