use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Retains only the given slice of the list. When the effective range is
/// empty the key is deleted outright.
///
/// Ref: <https://redis.io/docs/latest/commands/ltrim/>
#[derive(Debug, PartialEq)]
pub struct Ltrim {
    pub key: String,
    pub start: i64,
    pub stop: i64,
}

impl Executable for Ltrim {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.ltrim(&self.key, self.start, self.stop) {
            Ok(()) => Frame::Simple("OK".to_string()),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Ltrim {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "ltrim")?;

        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let stop = parser.next_integer()?;

        Ok(Self { key, start, stop })
    }
}
