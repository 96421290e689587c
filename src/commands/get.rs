use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Returns the string stored at the key. Replies null-bulk when the key is
/// absent, and also when it holds a non-string shape.
///
/// Ref: <https://redis.io/docs/latest/commands/get/>
#[derive(Debug, PartialEq)]
pub struct Get {
    pub key: String,
}

impl Executable for Get {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.get(&self.key) {
            Some(value) => Frame::Bulk(value),
            None => Frame::Null,
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Get {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "get")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
