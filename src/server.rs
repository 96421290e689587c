use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, instrument};

use crate::commands::executable::Executable;
use crate::commands::Command;
use crate::connection::Connection;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Binds the listener and serves connections until the process exits. A
/// bind failure propagates to the caller; per-connection failures only tear
/// down their own connection.
pub async fn run(bind: &str, port: u16) -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let listener = TcpListener::bind((bind, port)).await?;
    let store = Store::new();

    info!("server listening on {}", listener.local_addr()?);

    loop {
        let (socket, client_address) = listener.accept().await?;
        let store = store.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, client_address, store).await {
                error!("connection error: {}", e);
            }
        });
    }
}

#[instrument(name = "connection", skip(stream, store), fields(client_address = %client_address))]
async fn handle_connection(
    stream: TcpStream,
    client_address: SocketAddr,
    store: Store,
) -> Result<(), Error> {
    let mut conn = Connection::new(stream);
    info!("accepted connection");

    while let Some(frame) = conn.read_frame().await? {
        debug!("received frame: {:?}", frame);

        // A request that fails to parse gets an error reply and the
        // connection stays open; only framing and I/O errors are fatal.
        let reply = match Command::try_from(frame) {
            Ok(cmd) => cmd.exec(store.clone())?,
            Err(e) => Frame::Error(e.to_string()),
        };

        debug!("sending reply: {:?}", reply);
        conn.write_frame(reply).await?;
    }

    info!("connection closed");
    Ok(())
}
