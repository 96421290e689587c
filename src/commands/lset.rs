use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Overwrites the element at the given index. Errors on an absent key or an
/// out-of-range index.
///
/// Ref: <https://redis.io/docs/latest/commands/lset/>
#[derive(Debug, PartialEq)]
pub struct Lset {
    pub key: String,
    pub index: i64,
    pub value: Bytes,
}

impl Executable for Lset {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.lset(&self.key, self.index, self.value) {
            Ok(()) => Frame::Simple("OK".to_string()),
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(3, "lset")?;

        let key = parser.next_string()?;
        let index = parser.next_integer()?;
        let value = parser.next_bytes()?;

        Ok(Self { key, index, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::store::ListEnd;

    fn lset(key: &str, index: &str, value: &str) -> Command {
        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("LSET")),
            Frame::Bulk(Bytes::copy_from_slice(key.as_bytes())),
            Frame::Bulk(Bytes::copy_from_slice(index.as_bytes())),
            Frame::Bulk(Bytes::copy_from_slice(value.as_bytes())),
        ]);
        Command::try_from(frame).unwrap()
    }

    #[test]
    fn overwrites_in_place() {
        let store = Store::new();
        store
            .push("q", ListEnd::Tail, vec![Bytes::from("a"), Bytes::from("b")])
            .unwrap();

        let res = lset("q", "-1", "z").exec(store.clone()).unwrap();
        assert_eq!(res, Frame::Simple("OK".to_string()));
        assert_eq!(
            store.lrange("q", 0, -1).unwrap(),
            vec![Bytes::from("a"), Bytes::from("z")]
        );
    }

    #[test]
    fn missing_key_and_bad_index_errors() {
        let store = Store::new();

        let res = lset("q", "0", "z").exec(store.clone()).unwrap();
        assert_eq!(res, Frame::Error("ERR no such key".to_string()));

        store.push("q", ListEnd::Tail, vec![Bytes::from("a")]).unwrap();
        let res = lset("q", "3", "z").exec(store).unwrap();
        assert_eq!(res, Frame::Error("ERR index out of range".to_string()));
    }
}
