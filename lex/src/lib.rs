pub mod error;
pub mod inst;
pub mod list;
pub mod msg;
pub mod reader;
pub mod scanner;

pub use error::{Error, LexError};
pub use inst::{Arg, Inst};
pub use list::{InstList, Released};
pub use msg::{Msg, MsgKind, Msgs};
pub use reader::{Line, LineReader};
pub use scanner::{tokenize, Scan, ScanConfig, Scanner};
