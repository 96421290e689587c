use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes the given keys, whatever shape they hold. Returns how many of
/// them actually existed.
///
/// Ref: <https://redis.io/docs/latest/commands/del/>
#[derive(Debug, PartialEq)]
pub struct Del {
    pub keys: Vec<String>,
}

impl Executable for Del {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        Ok(Frame::Integer(store.del(&self.keys)))
    }
}

impl TryFrom<&mut CommandParser> for Del {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(1, "del")?;

        let mut keys = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            keys.push(parser.next_string()?);
        }

        Ok(Self { keys })
    }
}
