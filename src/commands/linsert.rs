use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Inserts a value next to the first occurrence of the pivot. Returns the
/// new length, -1 when the pivot is missing, 0 when the key is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/linsert/>
#[derive(Debug, PartialEq)]
pub struct Linsert {
    pub key: String,
    pub before: bool,
    pub pivot: Bytes,
    pub value: Bytes,
}

impl Executable for Linsert {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.linsert(&self.key, self.before, &self.pivot, self.value) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Linsert {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(4, "linsert")?;

        let key = parser.next_string()?;
        let before = match parser.next_string()?.to_uppercase().as_str() {
            "BEFORE" => true,
            "AFTER" => false,
            _ => return Err(CommandParserError::SyntaxError.into()),
        };
        let pivot = parser.next_bytes()?;
        let value = parser.next_bytes()?;

        Ok(Self {
            key,
            before,
            pivot,
            value,
        })
    }
}
