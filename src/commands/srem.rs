use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes members from the set, returning how many existed. Removing the
/// last member deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/srem/>
#[derive(Debug, PartialEq)]
pub struct Srem {
    pub key: String,
    pub members: Vec<String>,
}

impl Executable for Srem {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.srem(&self.key, &self.members) {
            Ok(removed) => Frame::Integer(removed),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Srem {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "srem")?;

        let key = parser.next_string()?;
        let mut members = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            members.push(parser.next_string()?);
        }

        Ok(Self { key, members })
    }
}
