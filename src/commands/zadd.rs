use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds `score member` pairs to the sorted set at the key, creating it when
/// absent. Counts members that were newly added or whose score changed; a
/// same-score update does not count.
///
/// Ref: <https://redis.io/docs/latest/commands/zadd/>
#[derive(Debug, PartialEq)]
pub struct Zadd {
    pub key: String,
    pub members: Vec<(f64, String)>,
}

impl Executable for Zadd {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zadd(&self.key, self.members) {
            Ok(changed) => Frame::Integer(changed),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zadd {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        // Key plus at least one pair, and the pairs must pair up.
        if parser.remaining() < 3 || parser.remaining() % 2 == 0 {
            return Err(CommandParserError::WrongNumberOfArguments { command: "zadd" }.into());
        }

        let key = parser.next_string()?;
        let mut members = Vec::with_capacity(parser.remaining() / 2);
        while parser.remaining() > 0 {
            let score = parser.next_float()?;
            let member = parser.next_string()?;
            members.push((score, member));
        }

        Ok(Self { key, members })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    fn zadd(parts: &[&str]) -> Result<Command, Error> {
        let mut frames = vec![Frame::Bulk(Bytes::from("ZADD"))];
        frames.extend(
            parts
                .iter()
                .map(|part| Frame::Bulk(Bytes::copy_from_slice(part.as_bytes()))),
        );
        Command::try_from(Frame::Array(frames))
    }

    #[test]
    fn counts_added_and_rescored_members() {
        let store = Store::new();

        let res = zadd(&["z", "1", "a", "2", "b"])
            .unwrap()
            .exec(store.clone())
            .unwrap();
        assert_eq!(res, Frame::Integer(2));

        // "a" keeps its score, "b" changes: only the change counts.
        let res = zadd(&["z", "1", "a", "9", "b"])
            .unwrap()
            .exec(store.clone())
            .unwrap();
        assert_eq!(res, Frame::Integer(1));

        assert_eq!(store.zcard("z").unwrap(), 2);
    }

    #[test]
    fn unpaired_arguments_are_an_arity_error() {
        let err = zadd(&["z", "1", "a", "2"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'zadd' command"
        );
    }

    #[test]
    fn bad_score_is_a_float_error() {
        let err = zadd(&["z", "high", "a"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR value is not a valid float");
    }
}
