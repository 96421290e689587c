use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members of the first set that appear in none of the following sets, in
/// no particular order. Absent keys read as empty sets.
///
/// Ref: <https://redis.io/docs/latest/commands/sdiff/>
#[derive(Debug, PartialEq)]
pub struct Sdiff {
    pub keys: Vec<String>,
}

impl Executable for Sdiff {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.sdiff(&self.keys) {
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

impl TryFrom<&mut CommandParser> for Sdiff {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(1, "sdiff")?;

        let mut keys = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            keys.push(parser.next_string()?);
        }

        Ok(Self { keys })
    }
}
