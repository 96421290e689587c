use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Returns how many of the given keys exist. A key repeated in the
/// arguments is counted every time.
///
/// Ref: <https://redis.io/docs/latest/commands/exists/>
#[derive(Debug, PartialEq)]
pub struct Exists {
    pub keys: Vec<String>,
}

impl Executable for Exists {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        Ok(Frame::Integer(store.exists(&self.keys)))
    }
}

impl TryFrom<&mut CommandParser> for Exists {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(1, "exists")?;

        let mut keys = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            keys.push(parser.next_string()?);
        }

        Ok(Self { keys })
    }
}
