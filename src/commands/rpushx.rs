use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{ListEnd, Store};
use crate::Error;

/// Like RPUSH, but a no-op returning 0 when the key does not already hold a
/// list.
///
/// Ref: <https://redis.io/docs/latest/commands/rpushx/>
#[derive(Debug, PartialEq)]
pub struct Rpushx {
    pub key: String,
    pub values: Vec<Bytes>,
}

impl Executable for Rpushx {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.pushx(&self.key, ListEnd::Tail, self.values) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Rpushx {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "rpushx")?;

        let key = parser.next_string()?;
        let mut values = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            values.push(parser.next_bytes()?);
        }

        Ok(Self { key, values })
    }
}
