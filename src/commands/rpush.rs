use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Appends values to the list at the key, creating it when absent.
///
/// Ref: <https://redis.io/docs/latest/commands/rpush/>
#[derive(Debug, PartialEq)]
pub struct Rpush {
    pub key: String,
    pub values: Vec<Bytes>,
}

impl Executable for Rpush {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.push(&self.key, ListEnd::Tail, self.values) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Rpush {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "rpush")?;

        let key = parser.next_string()?;
        let mut values = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            values.push(parser.next_bytes()?);
        }

        Ok(Self { key, values })
    }
}
