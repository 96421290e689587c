use crate::commands::executable::Executable;
use crate::commands::{scored_member_frames, CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Ascending index slice of the sorted set, with the same negative-friendly
/// clamped bounds as LRANGE. WITHSCORES interleaves each member with its
/// score.
///
/// Ref: <https://redis.io/docs/latest/commands/zrange/>
#[derive(Debug, PartialEq)]
pub struct Zrange {
    pub key: String,
    pub start: i64,
    pub stop: i64,
    pub withscores: bool,
}

impl Executable for Zrange {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zrange(&self.key, self.start, self.stop) {
            Ok(members) => scored_member_frames(members, self.withscores),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        if parser.remaining() < 3 || parser.remaining() > 4 {
            return Err(CommandParserError::WrongNumberOfArguments { command: "zrange" }.into());
        }

        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let stop = parser.next_integer()?;

        let withscores = match parser.remaining() {
            0 => false,
            _ => match parser.next_string()?.to_uppercase().as_str() {
                "WITHSCORES" => true,
                _ => return Err(CommandParserError::SyntaxError.into()),
            },
        };

        Ok(Self {
            key,
            start,
            stop,
            withscores,
        })
    }
}
