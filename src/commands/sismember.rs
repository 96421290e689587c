use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// 1 when the member is in the set, 0 otherwise (including an absent key).
///
/// Ref: <https://redis.io/docs/latest/commands/sismember/>
#[derive(Debug, PartialEq)]
pub struct Sismember {
    pub key: String,
    pub member: String,
}

impl Executable for Sismember {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.sismember(&self.key, &self.member) {
            Ok(found) => Frame::Integer(i64::from(found)),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Sismember {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "sismember")?;

        let key = parser.next_string()?;
        let member = parser.next_string()?;

        Ok(Self { key, member })
    }
}
