use crate::commands::executable::Executable;
use crate::commands::zrangebyscore::parse_range_options;
use crate::commands::{scored_member_frames, CommandParser};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members with score in the inclusive range, descending. Note the argument
/// order: `max` comes before `min`. Options match ZRANGEBYSCORE.
///
/// Ref: <https://redis.io/docs/latest/commands/zrevrangebyscore/>
#[derive(Debug, PartialEq)]
pub struct Zrevrangebyscore {
    pub key: String,
    pub max: f64,
    pub min: f64,
    pub offset: i64,
    pub count: i64,
    pub withscores: bool,
}

impl Executable for Zrevrangebyscore {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res =
            match store.zrevrange_by_score(&self.key, self.max, self.min, self.offset, self.count)
            {
                Ok(members) => scored_member_frames(members, self.withscores),
                Err(e) => Frame::Error(e.to_string()),
            };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrevrangebyscore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(3, "zrevrangebyscore")?;

        let key = parser.next_string()?;
        let max = parser.next_float_as("max")?;
        let min = parser.next_float_as("min")?;

        let (offset, count, withscores) = parse_range_options(parser)?;

        Ok(Self {
            key,
            max,
            min,
            offset,
            count,
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
    fn descends_from_max_to_min() {
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
            Frame::Bulk(Bytes::from("ZREVRANGEBYSCORE")),
            Frame::Bulk(Bytes::from("z")),
            Frame::Bulk(Bytes::from("3")),
            Frame::Bulk(Bytes::from("2")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store).unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("c")),
                Frame::Bulk(Bytes::from("b")),
            ])
        );
    }
}
