use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Every field and value of the hash, flattened to
/// `[field1, value1, field2, value2, ...]` in no particular order.
///
/// Ref: <https://redis.io/docs/latest/commands/hgetall/>
#[derive(Debug, PartialEq)]
pub struct Hgetall {
    pub key: String,
}

impl Executable for Hgetall {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        let res = match store.hgetall(&self.key) {
            Ok(pairs) => {
                let mut frames = Vec::with_capacity(pairs.len() * 2);
                for (field, value) in pairs {
                    frames.push(Frame::Bulk(Bytes::from(field)));
                    frames.push(Frame::Bulk(value));
                }
                Frame::Array(frames)
            }
            Err(e) => Frame::Error(e.to_string()),
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hgetall {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        parser.expect_exactly(1, "hgetall")?;

        let key = parser.next_string()?;
        Ok(Self { key })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn flattens_to_field_value_pairs() {
        let store = Store::new();
        store.hset("h", "a".to_string(), Bytes::from("1")).unwrap();
        store.hset("h", "b".to_string(), Bytes::from("2")).unwrap();

        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("HGETALL")),
            Frame::Bulk(Bytes::from("h")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(store).unwrap();
        let frames = match res {
            Frame::Array(frames) => frames,
            other => panic!("expected array, got {:?}", other),
        };
        assert_eq!(frames.len(), 4);

        // Field order is unspecified, so compare as a map.
        let mut pairs = HashMap::new();
        for chunk in frames.chunks(2) {
            match chunk {
                [Frame::Bulk(field), Frame::Bulk(value)] => {
                    pairs.insert(field.clone(), value.clone());
                }
                other => panic!("expected bulk pair, got {:?}", other),
            }
        }
        assert_eq!(pairs.get(&Bytes::from("a")), Some(&Bytes::from("1")));
        assert_eq!(pairs.get(&Bytes::from("b")), Some(&Bytes::from("2")));
    }
}
