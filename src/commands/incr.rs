use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Increments the integer stored at the key by one, creating it at 0 first
/// when absent.
///
/// Ref: <https://redis.io/docs/latest/commands/incr/>
#[derive(Debug, PartialEq)]
pub struct Incr {
    pub key: String,
}

impl Executable for Incr {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.incr_by(&self.key, 1) {
            Ok(value) => Frame::Integer(value),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Incr {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "incr")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
