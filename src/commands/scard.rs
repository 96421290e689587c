use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Number of members in the set; 0 when the key is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/scard/>
#[derive(Debug, PartialEq)]
pub struct Scard {
    pub key: String,
}

impl Executable for Scard {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.scard(&self.key) {
            Ok(count) => Frame::Integer(count),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Scard {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "scard")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
