use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Value of a hash field, or null-bulk when the key or field is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/hget/>
#[derive(Debug, PartialEq)]
pub struct Hget {
    pub key: String,
    pub field: String,
}

impl Executable for Hget {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hget(&self.key, &self.field) {
            Ok(Some(value)) => Frame::Bulk(value),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hget {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "hget")?;

        let key = parser.next_string()?;
        let field = parser.next_string()?;

        Ok(Self { key, field })
    }
}
