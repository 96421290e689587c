use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Inclusive slice of the list between two negative-friendly, clamped
/// indices. An absent key or an empty effective range replies with an empty
/// array.
///
/// Ref: <https://redis.io/docs/latest/commands/lrange/>
#[derive(Debug, PartialEq)]
pub struct Lrange {
    pub key: String,
    pub start: i64,
    pub stop: i64,
}

impl Executable for Lrange {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.lrange(&self.key, self.start, self.stop) {
            Ok(values) => Frame::Array(values.into_iter().map(Frame::Bulk).collect()),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "lrange")?;

        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let stop = parser.next_integer()?;

        Ok(Self { key, start, stop })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;
    use crate::store::ListEnd;

    fn lrange(key: &str, start: &str, stop: &str) -> Command {
        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("LRANGE")),
            Frame::Bulk(Bytes::copy_from_slice(key.as_bytes())),
            Frame::Bulk(Bytes::copy_from_slice(start.as_bytes())),
            Frame::Bulk(Bytes::copy_from_slice(stop.as_bytes())),
        ]);
        Command::try_from(frame).unwrap()
    }

    #[test]
    fn full_range_with_negative_stop() {
        let store = Store::new();
        store
            .push(
                "q",
                ListEnd::Tail,
                vec![Bytes::from("a"), Bytes::from("b"), Bytes::from("c")],
            )
            .unwrap();

        let res = lrange("q", "0", "-1").exec(store).unwrap();
        assert_eq!(
            res,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("a")),
                Frame::Bulk(Bytes::from("b")),
                Frame::Bulk(Bytes::from("c")),
            ])
        );
    }

    #[test]
    fn empty_range_and_missing_key() {
        let store = Store::new();
        store.push("q", ListEnd::Tail, vec![Bytes::from("a")]).unwrap();

        let res = lrange("q", "5", "9").exec(store.clone()).unwrap();
        assert_eq!(res, Frame::Array(vec![]));

        let res = lrange("missing", "0", "-1").exec(store).unwrap();
        assert_eq!(res, Frame::Array(vec![]));
    }
}
