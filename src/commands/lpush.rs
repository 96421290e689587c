use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Prepends values to the list at the key, creating it when absent. Values
/// are pushed one by one, so the last argument ends up at the head.
///
/// Ref: <https://redis.io/docs/latest/commands/lpush/>
#[derive(Debug, PartialEq)]
pub struct Lpush {
    pub key: String,
    pub values: Vec<Bytes>,
}

impl Executable for Lpush {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.push(&self.key, ListEnd::Head, self.values) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lpush {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "lpush")?;

        let key = parser.next_string()?;
        let mut values = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            values.push(parser.next_bytes()?);
        }

        Ok(Self { key, values })
    }
}
