use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Every member of the set, in no particular order.
///
/// Ref: <https://redis.io/docs/latest/commands/smembers/>
#[derive(Debug, PartialEq)]
pub struct Smembers {
    pub key: String,
}

impl Executable for Smembers {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.smembers(&self.key) {
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

impl TryFrom<&mut CommandParser> for Smembers {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "smembers")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
