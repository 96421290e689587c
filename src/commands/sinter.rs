use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Intersection of the sets at the given keys, in no particular order. Any
/// absent key makes the result empty.
///
/// Ref: <https://redis.io/docs/latest/commands/sinter/>
#[derive(Debug, PartialEq)]
pub struct Sinter {
    pub keys: Vec<String>,
}

impl Executable for Sinter {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.sinter(&self.keys) {
            Ok(members) => Frame::Array(
                members
                    .into_iter()
                    .map(|member| Frame::Bulk(Bytes::from(member)))
                    .collect(),
            ),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Sinter {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(1, "sinter")?;

        let mut keys = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            keys.push(parser.next_string()?);
        }

        Ok(Self { keys })
    }
}
