use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// 1 when the hash field exists, 0 otherwise (including an absent key).
///
/// Ref: <https://redis.io/docs/latest/commands/hexists/>
#[derive(Debug, PartialEq)]
pub struct Hexists {
    pub key: String,
    pub field: String,
}

impl Executable for Hexists {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hexists(&self.key, &self.field) {
            Ok(exists) => Frame::Integer(i64::from(exists)),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hexists {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "hexists")?;

        let key = parser.next_string()?;
        let field = parser.next_string()?;

        Ok(Self { key, field })
    }
}
