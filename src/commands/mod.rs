pub mod executable;

pub mod decr;
pub mod del;
pub mod exists;
pub mod get;
pub mod hdel;
pub mod hexists;
pub mod hget;
pub mod hgetall;
pub mod hlen;
pub mod hset;
pub mod incr;
pub mod lindex;
pub mod linsert;
pub mod llen;
pub mod lpop;
pub mod lpush;
pub mod lpushx;
pub mod lrange;
pub mod lrem;
pub mod lset;
pub mod ltrim;
pub mod ping;
pub mod rpop;
pub mod rpush;
pub mod rpushx;
pub mod sadd;
pub mod scard;
pub mod sdiff;
pub mod set;
pub mod sinter;
pub mod sismember;
pub mod smembers;
pub mod spop;
pub mod srandmember;
pub mod srem;
pub mod sunion;
pub mod zadd;
pub mod zcard;
pub mod zcount;
pub mod zincrby;
pub mod zrange;
pub mod zrangebyscore;
pub mod zrank;
pub mod zrem;
pub mod zrevrange;
pub mod zrevrangebyscore;
pub mod zrevrank;
pub mod zscore;

use bytes::Bytes;
use std::{str, vec};
use thiserror::Error as ThisError;

use crate::commands::executable::Executable;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

use decr::Decr;
use del::Del;
use exists::Exists;
use get::Get;
use hdel::Hdel;
use hexists::Hexists;
use hget::Hget;
use hgetall::Hgetall;
use hlen::Hlen;
use hset::Hset;
use incr::Incr;
use lindex::Lindex;
use linsert::Linsert;
use llen::Llen;
use lpop::Lpop;
use lpush::Lpush;
use lpushx::Lpushx;
use lrange::Lrange;
use lrem::Lrem;
use lset::Lset;
use ltrim::Ltrim;
use ping::Ping;
use rpop::Rpop;
use rpush::Rpush;
use rpushx::Rpushx;
use sadd::Sadd;
use scard::Scard;
use sdiff::Sdiff;
use set::Set;
use sinter::Sinter;
use sismember::Sismember;
use smembers::Smembers;
use spop::Spop;
use srandmember::Srandmember;
use srem::Srem;
use sunion::Sunion;
use zadd::Zadd;
use zcard::Zcard;
use zcount::Zcount;
use zincrby::Zincrby;
use zrange::Zrange;
use zrangebyscore::Zrangebyscore;
use zrank::Zrank;
use zrem::Zrem;
use zrevrange::Zrevrange;
use zrevrangebyscore::Zrevrangebyscore;
use zrevrank::Zrevrank;
use zscore::Zscore;

#[derive(Debug, PartialEq)]
pub enum Command {
    Ping(Ping),
    Set(Set),
    Get(Get),
    Del(Del),
    Exists(Exists),
    Incr(Incr),
    Decr(Decr),
    Lpush(Lpush),
    Rpush(Rpush),
    Lpop(Lpop),
    Rpop(Rpop),
    Llen(Llen),
    Lindex(Lindex),
    Lset(Lset),
    Lrem(Lrem),
    Lpushx(Lpushx),
    Rpushx(Rpushx),
    Linsert(Linsert),
    Lrange(Lrange),
    Ltrim(Ltrim),
    Hset(Hset),
    Hget(Hget),
    Hdel(Hdel),
    Hexists(Hexists),
    Hlen(Hlen),
    Hgetall(Hgetall),
    Sadd(Sadd),
    Srem(Srem),
    Sismember(Sismember),
    Scard(Scard),
    Smembers(Smembers),
    Spop(Spop),
    Srandmember(Srandmember),
    Sinter(Sinter),
    Sunion(Sunion),
    Sdiff(Sdiff),
    Zadd(Zadd),
    Zscore(Zscore),
    Zrem(Zrem),
    Zcard(Zcard),
    Zrange(Zrange),
    Zrangebyscore(Zrangebyscore),
    Zcount(Zcount),
    Zincrby(Zincrby),
    Zrank(Zrank),
    Zrevrank(Zrevrank),
    Zrevrangebyscore(Zrevrangebyscore),
    Zrevrange(Zrevrange),
}

impl Executable for Command {
    fn exec(self, store: Store) -> Result<Frame, Error> {
        match self {
            Command::Ping(cmd) => cmd.exec(store),
            Command::Set(cmd) => cmd.exec(store),
            Command::Get(cmd) => cmd.exec(store),
            Command::Del(cmd) => cmd.exec(store),
            Command::Exists(cmd) => cmd.exec(store),
            Command::Incr(cmd) => cmd.exec(store),
            Command::Decr(cmd) => cmd.exec(store),
            Command::Lpush(cmd) => cmd.exec(store),
            Command::Rpush(cmd) => cmd.exec(store),
            Command::Lpop(cmd) => cmd.exec(store),
            Command::Rpop(cmd) => cmd.exec(store),
            Command::Llen(cmd) => cmd.exec(store),
            Command::Lindex(cmd) => cmd.exec(store),
            Command::Lset(cmd) => cmd.exec(store),
            Command::Lrem(cmd) => cmd.exec(store),
            Command::Lpushx(cmd) => cmd.exec(store),
            Command::Rpushx(cmd) => cmd.exec(store),
            Command::Linsert(cmd) => cmd.exec(store),
            Command::Lrange(cmd) => cmd.exec(store),
            Command::Ltrim(cmd) => cmd.exec(store),
            Command::Hset(cmd) => cmd.exec(store),
            Command::Hget(cmd) => cmd.exec(store),
            Command::Hdel(cmd) => cmd.exec(store),
            Command::Hexists(cmd) => cmd.exec(store),
            Command::Hlen(cmd) => cmd.exec(store),
            Command::Hgetall(cmd) => cmd.exec(store),
            Command::Sadd(cmd) => cmd.exec(store),
            Command::Srem(cmd) => cmd.exec(store),
            Command::Sismember(cmd) => cmd.exec(store),
            Command::Scard(cmd) => cmd.exec(store),
            Command::Smembers(cmd) => cmd.exec(store),
            Command::Spop(cmd) => cmd.exec(store),
            Command::Srandmember(cmd) => cmd.exec(store),
            Command::Sinter(cmd) => cmd.exec(store),
            Command::Sunion(cmd) => cmd.exec(store),
            Command::Sdiff(cmd) => cmd.exec(store),
            Command::Zadd(cmd) => cmd.exec(store),
            Command::Zscore(cmd) => cmd.exec(store),
            Command::Zrem(cmd) => cmd.exec(store),
            Command::Zcard(cmd) => cmd.exec(store),
            Command::Zrange(cmd) => cmd.exec(store),
            Command::Zrangebyscore(cmd) => cmd.exec(store),
            Command::Zcount(cmd) => cmd.exec(store),
            Command::Zincrby(cmd) => cmd.exec(store),
            Command::Zrank(cmd) => cmd.exec(store),
            Command::Zrevrank(cmd) => cmd.exec(store),
            Command::Zrevrangebyscore(cmd) => cmd.exec(store),
            Command::Zrevrange(cmd) => cmd.exec(store),
        }
    }
}

impl TryFrom<Frame> for Command {
    type Error = Error;

    fn try_from(frame: Frame) -> Result<Self, Self::Error> {
        let mut parser = CommandParser::new(frame)?;
        let name = parser.name().to_string();
        let parser = &mut parser;

        match name.as_str() {
            "PING" => Ping::try_from(parser).map(Command::Ping),
            "SET" => Set::try_from(parser).map(Command::Set),
            "GET" => Get::try_from(parser).map(Command::Get),
            "DEL" => Del::try_from(parser).map(Command::Del),
            "EXISTS" => Exists::try_from(parser).map(Command::Exists),
            "INCR" => Incr::try_from(parser).map(Command::Incr),
            "DECR" => Decr::try_from(parser).map(Command::Decr),
            "LPUSH" => Lpush::try_from(parser).map(Command::Lpush),
            "RPUSH" => Rpush::try_from(parser).map(Command::Rpush),
            "LPOP" => Lpop::try_from(parser).map(Command::Lpop),
            "RPOP" => Rpop::try_from(parser).map(Command::Rpop),
            "LLEN" => Llen::try_from(parser).map(Command::Llen),
            "LINDEX" => Lindex::try_from(parser).map(Command::Lindex),
            "LSET" => Lset::try_from(parser).map(Command::Lset),
            "LREM" => Lrem::try_from(parser).map(Command::Lrem),
            "LPUSHX" => Lpushx::try_from(parser).map(Command::Lpushx),
            "RPUSHX" => Rpushx::try_from(parser).map(Command::Rpushx),
            "LINSERT" => Linsert::try_from(parser).map(Command::Linsert),
            "LRANGE" => Lrange::try_from(parser).map(Command::Lrange),
            "LTRIM" => Ltrim::try_from(parser).map(Command::Ltrim),
            "HSET" => Hset::try_from(parser).map(Command::Hset),
            "HGET" => Hget::try_from(parser).map(Command::Hget),
            "HDEL" => Hdel::try_from(parser).map(Command::Hdel),
            "HEXISTS" => Hexists::try_from(parser).map(Command::Hexists),
            "HLEN" => Hlen::try_from(parser).map(Command::Hlen),
            "HGETALL" => Hgetall::try_from(parser).map(Command::Hgetall),
            "SADD" => Sadd::try_from(parser).map(Command::Sadd),
            "SREM" => Srem::try_from(parser).map(Command::Srem),
            "SISMEMBER" => Sismember::try_from(parser).map(Command::Sismember),
            "SCARD" => Scard::try_from(parser).map(Command::Scard),
            "SMEMBERS" => Smembers::try_from(parser).map(Command::Smembers),
            "SPOP" => Spop::try_from(parser).map(Command::Spop),
            "SRANDMEMBER" => Srandmember::try_from(parser).map(Command::Srandmember),
            "SINTER" => Sinter::try_from(parser).map(Command::Sinter),
            "SUNION" => Sunion::try_from(parser).map(Command::Sunion),
            "SDIFF" => Sdiff::try_from(parser).map(Command::Sdiff),
            "ZADD" => Zadd::try_from(parser).map(Command::Zadd),
            "ZSCORE" => Zscore::try_from(parser).map(Command::Zscore),
            "ZREM" => Zrem::try_from(parser).map(Command::Zrem),
            "ZCARD" => Zcard::try_from(parser).map(Command::Zcard),
            "ZRANGE" => Zrange::try_from(parser).map(Command::Zrange),
            "ZRANGEBYSCORE" => Zrangebyscore::try_from(parser).map(Command::Zrangebyscore),
            "ZCOUNT" => Zcount::try_from(parser).map(Command::Zcount),
            "ZINCRBY" => Zincrby::try_from(parser).map(Command::Zincrby),
            "ZRANK" => Zrank::try_from(parser).map(Command::Zrank),
            "ZREVRANK" => Zrevrank::try_from(parser).map(Command::Zrevrank),
            "ZREVRANGEBYSCORE" => {
                Zrevrangebyscore::try_from(parser).map(Command::Zrevrangebyscore)
            }
            "ZREVRANGE" => Zrevrange::try_from(parser).map(Command::Zrevrange),
            _ => Err(CommandParserError::UnknownCommand { name }.into()),
        }
    }
}

/// Iterates the bulk-string arguments of one request array. Construction
/// validates the overall shape (an array of bulk strings) and consumes the
/// command name; per-command validators pull the rest.
pub(crate) struct CommandParser {
    name: String,
    parts: vec::IntoIter<Frame>,
}

impl CommandParser {
    fn new(frame: Frame) -> Result<CommandParser, CommandParserError> {
        // Clients send commands as RESP arrays of bulk strings.
        let frames = match frame {
            Frame::Array(frames) => frames,
            _ => return Err(CommandParserError::InvalidFormat),
        };
        if frames.is_empty() || frames.iter().any(|frame| !matches!(frame, Frame::Bulk(_))) {
            return Err(CommandParserError::InvalidFormat);
        }

        let mut parts = frames.into_iter();
        let name = match parts.next() {
            Some(Frame::Bulk(bytes)) => str::from_utf8(&bytes)
                .map_err(|_| CommandParserError::InvalidFormat)?
                .to_uppercase(),
            _ => return Err(CommandParserError::InvalidFormat),
        };

        Ok(CommandParser { name, parts })
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Number of unconsumed arguments, the command name excluded.
    fn remaining(&self) -> usize {
        self.parts.len()
    }

    fn expect_exactly(&self, count: usize, command: &'static str) -> Result<(), CommandParserError> {
        if self.remaining() != count {
            return Err(CommandParserError::WrongNumberOfArguments { command });
        }
        Ok(())
    }

    fn expect_at_least(&self, count: usize, command: &'static str) -> Result<(), CommandParserError> {
        if self.remaining() < count {
            return Err(CommandParserError::WrongNumberOfArguments { command });
        }
        Ok(())
    }

    fn next_string(&mut self) -> Result<String, CommandParserError> {
        match self.parts.next() {
            Some(Frame::Bulk(bytes)) => str::from_utf8(&bytes)
                .map(str::to_string)
                .map_err(|_| CommandParserError::InvalidFormat),
            Some(_) => Err(CommandParserError::InvalidFormat),
            None => Err(CommandParserError::EndOfStream),
        }
    }

    fn next_bytes(&mut self) -> Result<Bytes, CommandParserError> {
        match self.parts.next() {
            Some(Frame::Bulk(bytes)) => Ok(bytes),
            Some(_) => Err(CommandParserError::InvalidFormat),
            None => Err(CommandParserError::EndOfStream),
        }
    }

    fn next_integer(&mut self) -> Result<i64, CommandParserError> {
        self.next_integer_as("value")
    }

    fn next_integer_as(&mut self, what: &'static str) -> Result<i64, CommandParserError> {
        let raw = self.next_string()?;
        raw.parse()
            .map_err(|_| CommandParserError::NotAnInteger { what })
    }

    fn next_float(&mut self) -> Result<f64, CommandParserError> {
        self.next_float_as("value")
    }

    fn next_float_as(&mut self, what: &'static str) -> Result<f64, CommandParserError> {
        let raw = self.next_string()?;
        raw.parse()
            .map_err(|_| CommandParserError::NotAFloat { what })
    }
}

/// Flattens an ordered `(member, score)` listing into the reply shape
/// shared by the sorted-set range commands: members only, or
/// `[member1, score1, member2, score2, ...]` with WITHSCORES.
pub(crate) fn scored_member_frames(members: Vec<(String, f64)>, withscores: bool) -> Frame {
    let capacity = if withscores {
        members.len() * 2
    } else {
        members.len()
    };
    let mut frames = Vec::with_capacity(capacity);
    for (member, score) in members {
        frames.push(Frame::Bulk(Bytes::from(member)));
        if withscores {
            frames.push(Frame::Bulk(Bytes::from(score.to_string())));
        }
    }
    Frame::Array(frames)
}

#[derive(Debug, ThisError, PartialEq)]
pub(crate) enum CommandParserError {
    #[error("ERR invalid command format")]
    InvalidFormat,
    #[error("ERR unknown command '{name}'")]
    UnknownCommand { name: String },
    #[error("ERR wrong number of arguments for '{command}' command")]
    WrongNumberOfArguments { command: &'static str },
    #[error("ERR syntax error")]
    SyntaxError,
    #[error("ERR {what} is not an integer or out of range")]
    NotAnInteger { what: &'static str },
    #[error("ERR {what} is not a valid float")]
    NotAFloat { what: &'static str },
    #[error("protocol error; attempting to extract a value failed due to the frame being fully consumed")]
    EndOfStream,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(parts: &[&str]) -> Frame {
        Frame::Array(
            parts
                .iter()
                .map(|part| Frame::Bulk(Bytes::copy_from_slice(part.as_bytes())))
                .collect(),
        )
    }

    #[test]
    fn parse_command_name_case_insensitively() {
        let cmd = Command::try_from(request(&["get", "foo"])).unwrap();
        assert_eq!(
            cmd,
            Command::Get(Get {
                key: String::from("foo")
            })
        );

        let cmd = Command::try_from(request(&["GeT", "foo"])).unwrap();
        assert_eq!(
            cmd,
            Command::Get(Get {
                key: String::from("foo")
            })
        );
    }

    #[test]
    fn unknown_command_echoes_the_uppercased_name() {
        let err = Command::try_from(request(&["frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "ERR unknown command 'FROBNICATE'");
    }

    #[test]
    fn non_array_requests_are_rejected() {
        let err = Command::try_from(Frame::Simple("PING".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "ERR invalid command format");

        let err = Command::try_from(Frame::Array(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "ERR invalid command format");
    }

    #[test]
    fn non_bulk_elements_are_rejected() {
        let frame = Frame::Array(vec![
            Frame::Bulk(Bytes::from("GET")),
            Frame::Integer(42),
        ]);
        let err = Command::try_from(frame).unwrap_err();
        assert_eq!(err.to_string(), "ERR invalid command format");
    }

    #[test]
    fn arity_errors_name_the_lowercase_command() {
        let err = Command::try_from(request(&["GET"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'get' command"
        );

        let err = Command::try_from(request(&["SET", "k"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'set' command"
        );
    }
}
