// https://redis.io/docs/reference/protocol-spec

use std::io::Cursor;
use std::num::ParseIntError;
use std::string::FromUtf8Error;

use bytes::Buf;
use bytes::Bytes;
use thiserror::Error as ThisError;

static CRLF: &[u8; 2] = b"\r\n";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("not enough data is available to parse an entire frame")]
    Incomplete,
    #[error("invalid frame data type: {0}")]
    InvalidDataType(u8),
    #[error("invalid frame format")]
    InvalidFormat,
}

/// A single RESP v2 value. `Null` is the bulk-string sentinel (`$-1`) and
/// `NullArray` the array sentinel (`*-1`); both are distinct from their
/// empty counterparts.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Simple(String),
    Error(String),
    Integer(i64),
    Bulk(Bytes),
    Null,
    Array(Vec<Frame>),
    NullArray,
}

impl Frame {
    /// Consumes one complete frame from the cursor. Returns
    /// `Error::Incomplete` when the buffer does not yet hold a full frame;
    /// the cursor position is only meaningful on success.
    pub fn parse(src: &mut Cursor<&[u8]>) -> Result<Self, Error> {
        // The first byte in a RESP-serialized payload identifies its type.
        // Subsequent bytes constitute the type's contents.
        match get_byte(src)? {
            b'+' => {
                let line = get_line(src)?.to_vec();
                Ok(Frame::Simple(String::from_utf8(line)?))
            }
            b'-' => {
                let line = get_line(src)?.to_vec();
                Ok(Frame::Error(String::from_utf8(line)?))
            }
            b':' => {
                let line = get_line(src)?.to_vec();
                let integer = String::from_utf8(line)?.parse::<i64>()?;
                Ok(Frame::Integer(integer))
            }
            // $<length>\r\n<data>\r\n
            b'$' => {
                let length = get_length(src)?;
                match length {
                    -1 => Ok(Frame::Null),
                    _ => {
                        let data = get_exact(src, length as usize)?;
                        Ok(Frame::Bulk(data))
                    }
                }
            }
            // *<number-of-elements>\r\n<element-1>...<element-n>
            b'*' => {
                let length = get_length(src)?;
                match length {
                    -1 => Ok(Frame::NullArray),
                    _ => {
                        let mut frames = Vec::with_capacity(length as usize);
                        for _ in 0..length {
                            frames.push(Self::parse(src)?);
                        }
                        Ok(Frame::Array(frames))
                    }
                }
            }
            byte => Err(Error::InvalidDataType(byte)),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Frame::Simple(s) => {
                let mut bytes = Vec::with_capacity(1 + s.len() + CRLF.len());
                bytes.push(b'+');
                bytes.extend_from_slice(s.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Error(s) => {
                let mut bytes = Vec::with_capacity(1 + s.len() + CRLF.len());
                bytes.push(b'-');
                bytes.extend_from_slice(s.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Integer(i) => {
                let digits = i.to_string();
                let mut bytes = Vec::with_capacity(1 + digits.len() + CRLF.len());
                bytes.push(b':');
                bytes.extend_from_slice(digits.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Bulk(data) => {
                let length = data.len().to_string();
                let mut bytes =
                    Vec::with_capacity(1 + length.len() + CRLF.len() + data.len() + CRLF.len());
                bytes.push(b'$');
                bytes.extend_from_slice(length.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes.extend_from_slice(data);
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Null => b"$-1\r\n".to_vec(),
            Frame::Array(frames) => {
                let length = frames.len().to_string();
                let mut bytes = Vec::with_capacity(1 + length.len() + CRLF.len());
                bytes.push(b'*');
                bytes.extend_from_slice(length.as_bytes());
                bytes.extend_from_slice(CRLF);
                for frame in frames {
                    bytes.extend(frame.serialize());
                }
                bytes
            }
            Frame::NullArray => b"*-1\r\n".to_vec(),
        }
    }
}

impl From<Frame> for Vec<u8> {
    fn from(frame: Frame) -> Self {
        frame.serialize()
    }
}

fn get_byte(src: &mut Cursor<&[u8]>) -> Result<u8, Error> {
    if !src.has_remaining() {
        return Err(Error::Incomplete);
    }
    Ok(src.get_u8())
}

/// Returns the bytes up to the next CRLF and advances the cursor past it.
fn get_line<'a>(src: &mut Cursor<&'a [u8]>) -> Result<&'a [u8], Error> {
    let start = src.position() as usize;
    let end = src.get_ref().len();

    let line_end = src.get_ref()[start..end]
        .windows(2)
        .position(|window| window == CRLF)
        .map(|index| start + index)
        .ok_or(Error::Incomplete)?;

    src.set_position((line_end + CRLF.len()) as u64);

    Ok(&src.get_ref()[start..line_end])
}

/// Parses a `$`/`*` length header. `-1` marks the null sentinel; any other
/// negative length is malformed.
fn get_length(src: &mut Cursor<&[u8]>) -> Result<isize, Error> {
    let line = get_line(src)?.to_vec();
    let length = String::from_utf8(line)?.parse::<isize>()?;

    if length < -1 {
        return Err(Error::InvalidFormat);
    }
    Ok(length)
}

/// Reads exactly `length` payload bytes plus the trailing CRLF. Bulk data is
/// not escaped and may itself contain CRLF, so this never scans for a
/// delimiter.
fn get_exact(src: &mut Cursor<&[u8]>, length: usize) -> Result<Bytes, Error> {
    let start = src.position() as usize;

    if src.get_ref().len() < start + length + CRLF.len() {
        return Err(Error::Incomplete);
    }
    if &src.get_ref()[start + length..start + length + CRLF.len()] != CRLF {
        return Err(Error::InvalidFormat);
    }

    let data = Bytes::copy_from_slice(&src.get_ref()[start..start + length]);
    src.set_position((start + length + CRLF.len()) as u64);

    Ok(data)
}

impl From<FromUtf8Error> for Error {
    fn from(_src: FromUtf8Error) -> Error {
        Error::InvalidFormat
    }
}

impl From<ParseIntError> for Error {
    fn from(_src: ParseIntError) -> Error {
        Error::InvalidFormat
    }
}
