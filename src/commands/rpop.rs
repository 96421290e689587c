use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Removes and returns the tail of the list. Replies null-bulk when the key
/// is absent; popping the last element deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/rpop/>
#[derive(Debug, PartialEq)]
pub struct Rpop {
    pub key: String,
}

impl Executable for Rpop {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.pop(&self.key, ListEnd::Tail) {
            Ok(Some(value)) => Frame::Bulk(value),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Rpop {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "rpop")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
