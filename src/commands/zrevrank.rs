use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// 0-based rank of the member in descending score order, or null-bulk when
/// the key or member is absent.
///
/// Ref: <https://redis.io/docs/latest/commands/zrevrank/>
#[derive(Debug, PartialEq)]
pub struct Zrevrank {
    pub key: String,
    pub member: String,
}

impl Executable for Zrevrank {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zrevrank(&self.key, &self.member) {
            Ok(Some(rank)) => Frame::Integer(rank),
            Ok(None) => Frame::Null,
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrevrank {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(2, "zrevrank")?;

        let key = parser.next_string()?;
        let member = parser.next_string()?;

        Ok(Self { key, member })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn highest_score_ranks_first() {
        let store = Store::new();
        store
            .zadd(
                "z",
                vec![
                    (1.0, "a".to_string()),
                    (2.0, "b".to_string()),
                    (11.0, "top".to_string()),
                ],
            )
            .unwrap();

        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("ZREVRANK")),
            Frame::Bulk(Bytes::from("z")),
            Frame::Bulk(Bytes::from("top")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store).unwrap();
        assert_eq!(res, Frame::Integer(0));
    }
}
