use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Union of the sets at the given keys, in no particular order. Absent keys
/// read as empty sets.
///
/// Ref: <https://redis.io/docs/latest/commands/sunion/>
#[derive(Debug, PartialEq)]
pub struct Sunion {
    pub keys: Vec<String>,
}

impl Executable for Sunion {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.sunion(&self.keys) {
            Ok(members) => Frame::Array(
                members
                    .into_iter()
                    .map(|member| Frame::Bulk(Bytes::from(member)))
                    .collect(),
            ),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Sunion {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(1, "sunion")?;

        let mut keys = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            keys.push(parser.next_string()?);
        }

        Ok(Self { keys })
    }
}
