use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Number of members with score in the inclusive `[min, max]` range.
///
/// Ref: <https://redis.io/docs/latest/commands/zcount/>
#[derive(Debug, PartialEq)]
pub struct Zcount {
    pub key: String,
    pub min: f64,
    pub max: f64,
}

impl Executable for Zcount {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.zcount(&self.key, self.min, self.max) {
            Ok(count) => Frame::Integer(count),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Zcount {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "zcount")?;

        let key = parser.next_string()?;
        let min = parser.next_float_as("min")?;
        let max = parser.next_float_as("max")?;

        Ok(Self { key, min, max })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn counts_inclusively() {
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
            Frame::Bulk(Bytes::from("ZCOUNT")),
            Frame::Bulk(Bytes::from("z")),
            Frame::Bulk(Bytes::from("1")),
            Frame::Bulk(Bytes::from("2")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store).unwrap();
        assert_eq!(res, Frame::Integer(2));
    }
}
