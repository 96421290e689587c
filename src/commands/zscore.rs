use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Score of the member as shortest round-trip decimal text, or null-bulk
/// when the key or member is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/zscore/>
#[derive(Debug, PartialEq)]
pub struct Zscore {
    pub key: String,
    pub member: String,
}

impl Executable for Zscore {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zscore(&self.key, &self.member) {
            Ok(Some(score)) => Frame::Bulk(Bytes::from(score.to_string())),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zscore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "zscore")?;

        let key = parser.next_string()?;
        let member = parser.next_string()?;

        Ok(Self { key, member })
    }
}
