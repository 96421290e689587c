use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Removes and returns the head of the list. Replies null-bulk when the key
/// is absent; popping the last element deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/lpop/>
#[derive(Debug, PartialEq)]
pub struct Lpop {
    pub key: String,
}

impl Executable for Lpop {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.pop(&self.key, ListEnd::Head) {
            Ok(Some(value)) => Frame::Bulk(value),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lpop {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "lpop")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
