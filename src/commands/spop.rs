use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes and returns up to `count` random members (default 1), always as
/// an array. A count of 0 pops the whole set. Draining the set deletes the
/// key.
///
/// Ref: <https://redis.io/docs/latest/commands/spop/>
#[derive(Debug, PartialEq)]
pub struct Spop {
    pub key: String,
    pub count: i64,
}

impl Executable for Spop {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.spop(&self.key, self.count) {
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

impl TryFrom<&mut CommandParser> for Spop {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        if parser.remaining() < 1 || parser.remaining() > 2 {
            return Err(CommandParserError::WrongNumberOfArguments { command: "spop" }.into());
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

    fn spop(parts: &[&str]) -> Command {
        let mut frames = vec![Frame::Bulk(Bytes::from("SPOP"))];
        frames.extend(
            parts
                .iter()
                .map(|part| Frame::Bulk(Bytes::copy_from_slice(part.as_bytes()))),
        );
        Command::try_from(Frame::Array(frames)).unwrap()
    }

    fn seed(store: &Store) {
        store
            .sadd(
                "s",
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
            )
            .unwrap();
    }

    #[test]
    fn default_count_pops_one() {
        let store = Store::new();
        seed(&store);

        let res = spop(&["s"]).exec(store.clone()).unwrap();
        match res {
            Frame::Array(frames) => assert_eq!(frames.len(), 1),
            other => panic!("expected array, got {:?}", other),
        }
        assert_eq!(store.scard("s").unwrap(), 2);
    }

    #[test]
    fn zero_count_pops_everything() {
        let store = Store::new();
        seed(&store);

        let res = spop(&["s", "0"]).exec(store.clone()).unwrap();
        match res {
            Frame::Array(frames) => assert_eq!(frames.len(), 3),
            other => panic!("expected array, got {:?}", other),
        }
        assert_eq!(store.exists(&["s".to_string()]), 0);
    }

    #[test]
    fn missing_key_pops_nothing() {
        let res = spop(&["s"]).exec(Store::new()).unwrap();
        assert_eq!(res, Frame::Array(vec![]));
    }
}
