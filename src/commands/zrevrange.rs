use crate::commands::executable::Executable;
use crate::commands::{scored_member_frames, CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Descending index slice of the sorted set; index semantics match ZRANGE.
///
/// Ref: <https://redis.io/docs/latest/commands/zrevrange/>
#[derive(Debug, PartialEq)]
pub struct Zrevrange {
    pub key: String,
    pub start: i64,
    pub stop: i64,
    pub withscores: bool,
}

impl Executable for Zrevrange {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zrevrange(&self.key, self.start, self.stop) {
            Ok(members) => scored_member_frames(members, self.withscores),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrevrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        if parser.remaining() < 3 || parser.remaining() > 4 {
            return Err(
                CommandParserError::WrongNumberOfArguments { command: "zrevrange" }.into(),
            );
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

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn reverses_the_ascending_order() {
        let store = Store::new();
        store
            .zadd(
                "z",
                vec![
                    (1.0, "a".to_string()),
                    (2.0, "b".to_string()),
                    (3.0, "c".to_string()),
                ],
            )
            .unwrap();

        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("ZREVRANGE")),
            Frame::Bulk(Bytes::from("z")),
            Frame::Bulk(Bytes::from("0")),
            Frame::Bulk(Bytes::from("-1")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store).unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("c")),
                Frame::Bulk(Bytes::from("b")),
                Frame::Bulk(Bytes::from("a")),
            ])
        );
    }
}
