use crate::commands::executable::Executable;
use crate::commands::{scored_member_frames, CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members with score in the inclusive `[min, max]` range, ascending.
/// Accepts WITHSCORES and `LIMIT offset count` in any order after the
/// bounds; a count of -1 lifts the limit.
///
/// Ref: <https://redis.io/docs/latest/commands/zrangebyscore/>
#[derive(Debug, PartialEq)]
pub struct Zrangebyscore {
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub offset: i64,
    pub count: i64,
    pub withscores: bool,
}

impl Executable for Zrangebyscore {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zrange_by_score(&self.key, self.min, self.max, self.offset, self.count)
        {
            Ok(members) => scored_member_frames(members, self.withscores),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zrangebyscore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_at_least(3, "zrangebyscore")?;

        let key = parser.next_string()?;
        let min = parser.next_float_as("min")?;
        let max = parser.next_float_as("max")?;

        let (offset, count, withscores) = parse_range_options(parser)?;

        Ok(Self {
            key,
            min,
            max,
            offset,
            count,
            withscores,
        })
    }
}

/// Parses the trailing `[WITHSCORES] [LIMIT offset count]` words shared with
/// ZREVRANGEBYSCORE. Defaults: offset 0, count -1 (unlimited).
pub(super) fn parse_range_options(
    parser: &mut CommandParser,
) -> Result<(i64, i64, bool), Error> {
    let mut offset = 0;
    let mut count = -1;
    let mut withscores = false;

    while parser.remaining() > 0 {
        match parser.next_string()?.to_uppercase().as_str() {
            "WITHSCORES" => withscores = true,
            "LIMIT" => {
                if parser.remaining() < 2 {
                    return Err(CommandParserError::SyntaxError.into());
                }
                offset = parser.next_integer_as("offset")?;
                count = parser.next_integer_as("count")?;
            }
            _ => return Err(CommandParserError::SyntaxError.into()),
        }
    }

    Ok((offset, count, withscores))
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    fn zrangebyscore(parts: &[&str]) -> Result<Command, Error> {
        let mut frames = vec![Frame::Bulk(Bytes::from("ZRANGEBYSCORE"))];
        frames.extend(
            parts
                .iter()
                .map(|part| Frame::Bulk(Bytes::copy_from_slice(part.as_bytes()))),
        );
        Command::try_from(Frame::Array(frames))
    }

    fn seed(store: &Store) {
        store
            .zadd(
                "z",
                vec![
                    (1.0, "a".to_string()),
                    (2.0, "b".to_string()),
                    (3.0, "c".to_string()),
                    (4.0, "d".to_string()),
                ],
            )
            .unwrap();
    }

    #[test]
    fn inclusive_bounds() {
        let store = Store::new();
        seed(&store);

        let res = zrangebyscore(&["z", "2", "3"]).unwrap().exec(store).unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("b")),
                Frame::Bulk(Bytes::from("c")),
            ])
        );
    }

    #[test]
    fn infinity_bounds_parse() {
        let store = Store::new();
        seed(&store);

        let res = zrangebyscore(&["z", "-inf", "+inf"])
            .unwrap()
            .exec(store)
            .unwrap();
        match res {
            Frame::Array(frames) => assert_eq!(frames.len(), 4),
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn limit_skips_and_caps() {
        let store = Store::new();
        seed(&store);

        let res = zrangebyscore(&["z", "1", "4", "LIMIT", "1", "2"])
            .unwrap()
            .exec(store)
            .unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("b")),
                Frame::Bulk(Bytes::from("c")),
            ])
        );
    }

    #[test]
    fn options_in_either_order() {
        let store = Store::new();
        seed(&store);

        let res = zrangebyscore(&["z", "1", "2", "LIMIT", "0", "1", "WITHSCORES"])
            .unwrap()
            .exec(store.clone())
            .unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("a")),
                Frame::Bulk(Bytes::from("1")),
            ])
        );

        let res = zrangebyscore(&["z", "1", "2", "WITHSCORES", "LIMIT", "0", "1"])
            .unwrap()
            .exec(store)
            .unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("a")),
                Frame::Bulk(Bytes::from("1")),
            ])
        );
    }

    #[test]
    fn parse_errors() {
        let err = zrangebyscore(&["z", "low", "3"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR min is not a valid float");

        let err = zrangebyscore(&["z", "1", "high"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR max is not a valid float");

        let err = zrangebyscore(&["z", "1", "2", "LIMIT", "0"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR syntax error");

        let err = zrangebyscore(&["z", "1", "2", "LIMIT", "x", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR offset is not an integer or out of range");

        let err = zrangebyscore(&["z", "1", "2", "BOGUS"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR syntax error");
    }
}
