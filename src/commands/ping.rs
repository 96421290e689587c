use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Returns PONG, or a copy of the argument when one is given.
///
/// Ref: <https://redis.io/docs/latest/commands/ping>
#[derive(Debug, PartialEq)]
pub struct Ping {
    pub payload: Option<String>,
}

impl Executable for Ping {
    fn exec(self, _store: Store) -> Result<Frame, Error> {
        let message = self.payload.unwrap_or_else(|| "PONG".to_string());
        Ok(Frame::Simple(message))
    }
}

impl TryFrom<&mut CommandParser> for Ping {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        if parser.remaining() > 1 {
            return Err(CommandParserError::WrongNumberOfArguments { command: "ping" }.into());
        }

        let payload = match parser.next_string() {
            Ok(payload) => Some(payload),
            Err(CommandParserError::EndOfStream) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self { payload })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn without_payload() {
        let frame = Frame::Array(vec![Frame::Bulk(Bytes::from("PING"))]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(Store::new()).unwrap();
        assert_eq!(res, Frame::Simple("PONG".to_string()));
    }

    #[test]
    fn with_payload() {
        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("PING")),
            Frame::Bulk(Bytes::from("hello")),
        ]);
        let cmd = Command::try_from(frame).unwrap();

        let res = cmd.exec(Store::new()).unwrap();
        assert_eq!(res, Frame::Simple("hello".to_string()));
    }
}
