use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Number of fields in the hash; 0 when the key is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/hlen/>
#[derive(Debug, PartialEq)]
pub struct Hlen {
    pub key: String,
}

impl Executable for Hlen {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hlen(&self.key) {
            Ok(len) => Frame::Integer(len),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hlen {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "hlen")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}
