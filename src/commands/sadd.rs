use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds members to the set at the key, creating it when absent. Returns how
/// many members were actually new.
///
/// Ref: <https://redis.io/docs/latest/commands/sadd/>
#[derive(Debug, PartialEq)]
pub struct Sadd {
    pub key: String,
    pub members: Vec<String>,
}

impl Executable for Sadd {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.sadd(&self.key, self.members) {
            Ok(added) => Frame::Integer(added),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Sadd {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "sadd")?;

        let key = parser.next_string()?;
        let mut members = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            members.push(parser.next_string()?);
        }

        Ok(Self { key, members })
    }
}
