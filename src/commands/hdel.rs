use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Deletes hash fields, returning how many existed. Deleting the last field
/// removes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/hdel/>
#[derive(Debug, PartialEq)]
pub struct Hdel {
    pub key: String,
    pub fields: Vec<String>,
}

impl Executable for Hdel {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hdel(&self.key, &self.fields) {
            Ok(removed) => Frame::Integer(removed),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hdel {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(2, "hdel")?;

        let key = parser.next_string()?;
        let mut fields = Vec::with_capacity(parser.remaining());
        while parser.remaining() > 0 {
            fields.push(parser.next_string()?);
        }

        Ok(Self { key, fields })
    }
}
