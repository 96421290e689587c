use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Returns random members without removing them, always as an array. A
/// positive count samples without replacement (capped at the set size), a
/// negative count samples |count| members with replacement, 0 returns
/// nothing. The default count is 1.
///
/// Ref: <https://redis.io/docs/latest/commands/srandmember/>
#[derive(Debug, PartialEq)]
pub struct Srandmember {
    pub key: String,
    pub count: i64,
}

impl Executable for Srandmember {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.srandmember(&self.key, self.count) {
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

impl TryFrom<&mut CommandParser> for Srandmember {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        if parser.remaining() < 1 || parser.remaining() > 2 {
            return Err(
                CommandParserError::WrongNumberOfArguments { command: "srandmember" }.into(),
            );
        }

        let key = parser.next_string()?;
        let count = match parser.remaining() {
            0 => 1,
            _ => parser.next_integer()?,
        };

        Ok(Self { key, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn negative_count_samples_with_replacement() {
        let store = Store::new();
        store.sadd("s", vec!["only".to_string()]).unwrap();

        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("SRANDMEMBER")),
            Frame::Bulk(Bytes::from("s")),
            Frame::Bulk(Bytes::from("-3")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store.clone()).unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("only")),
                Frame::Bulk(Bytes::from("only")),
                Frame::Bulk(Bytes::from("only")),
            ])
        );
        // The set is left untouched.
        assert_eq!(store.scard("s").unwrap(), 1);
    }
}
