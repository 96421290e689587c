use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes occurrences of a value from the list: from the head when
/// `count > 0`, from the tail when `count < 0`, all of them when
/// `count == 0`. Returns the number removed.
///
/// Ref: <https://redis.io/docs/latest/commands/lrem/>
#[derive(Debug, PartialEq)]
pub struct Lrem {
    pub key: String,
    pub count: i64,
    pub value: Bytes,
}

impl Executable for Lrem {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.lrem(&self.key, self.count, &self.value) {
            Ok(removed) => Frame::Integer(removed),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lrem {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "lrem")?;

        let key = parser.next_string()?;
        let count = parser.next_integer()?;
        let value = parser.next_bytes()?;

        Ok(Self { key, count, value })
    }
}
