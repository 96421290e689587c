use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Element at the given index; negative indices count from the tail
/// (`-1` is the last element). Replies null-bulk when the key is absent or
/// the index is out of range.
///
/// Ref: <https://redis.io/docs/latest/commands/lindex/>
#[derive(Debug, PartialEq)]
pub struct Lindex {
    pub key: String,
    pub index: i64,
}

impl Executable for Lindex {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.lindex(&self.key, self.index) {
            Ok(Some(value)) => Frame::Bulk(value),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lindex {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "lindex")?;

        let key = parser.next_string()?;
        let index = parser.next_integer()?;

        Ok(Self { key, index })
    }
}
