use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds a delta to the member's score, creating the key and/or member as
/// needed; an absent member ends up with the delta as its score. Replies
/// with the new score as bulk text.
///
/// Ref: <https://redis.io/docs/latest/commands/zincrby/>
#[derive(Debug, PartialEq)]
pub struct Zincrby {
    pub key: String,
    pub increment: f64,
    pub member: String,
}

impl Executable for Zincrby {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zincrby(&self.key, self.increment, self.member) {
            Ok(score) => Frame::Bulk(Bytes::from(score.to_string())),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zincrby {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "zincrby")?;

        let key = parser.next_string()?;
        let increment = parser.next_float()?;
        let member = parser.next_string()?;

        Ok(Self {
            key,
            increment,
            member,
        })
    }
}
