use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Sets a field in the hash at the key, creating the hash when absent.
/// Returns 1 when the field is new, 0 when it was overwritten.
///
/// Ref: <https://redis.io/docs/latest/commands/hset/>
#[derive(Debug, PartialEq)]
pub struct Hset {
    pub key: String,
    pub field: String,
    pub value: Bytes,
}

impl Executable for Hset {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hset(&self.key, self.field, self.value) {
            Ok(created) => Frame::Integer(created),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "hset")?;

        let key = parser.next_string()?;
        let field = parser.next_string()?;
        let value = parser.next_bytes()?;

        Ok(Self { key, field, value })
    }
}
