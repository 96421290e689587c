use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// 0-based rank of the member in ascending score order, or null-bulk when
/// the key or member is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/zrank/>
#[derive(Debug, PartialEq)]
pub struct Zrank {
    pub key: String,
    pub member: String,
}

impl Executable for Zrank {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zrank(&self.key, &self.member) {
            Ok(Some(rank)) => Frame::Integer(rank),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrank {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "zrank")?;

        let key = parser.next_string()?;
        let member = parser.next_string()?;

        Ok(Self { key, member })
    }
}
