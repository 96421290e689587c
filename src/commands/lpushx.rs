use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Like LPUSH, but a no-op returning 0 when the key does not already hold a
/// list.
///
/// Ref: <https://redis.io/docs/latest/commands/lpushx/>
#[derive(Debug, PartialEq)]
pub struct Lpushx {
    pub key: String,
    pub values: Vec<Bytes>,
}

impl Executable for Lpushx {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.pushx(&self.key, ListEnd::Head, self.values) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lpushx {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "lpushx")?;

        let key = parser.next_string()?;
        let mut values = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            values.push(parser.next_bytes()?);
        }

        Ok(Self { key, values })
    }
}
