use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

use crate::codec::FrameCodec;
use crate::frame::Frame;
use crate::Result;

/// One client socket, framed into RESP values. Reads block until a full
/// frame is buffered; writes flush per frame so every reply hits the wire
/// before the next request is read.
pub struct Connection {
    framed: Framed<TcpStream, FrameCodec>,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Connection {
        Connection {
            framed: Framed::new(stream, FrameCodec),
        }
    }

    /// Reads the next frame, or `None` once the peer closed the stream.
    pub async fn read_frame(&mut self) -> Result<Option<Frame>> {
        match self.framed.next().await {
            Some(frame) => frame.map(Some),
            None => Ok(None),
        }
    }

    pub async fn write_frame(&mut self, frame: Frame) -> Result<()> {
        self.framed.send(frame).await
    }
}
