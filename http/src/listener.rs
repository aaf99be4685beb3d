use std::{io, ops::Deref, os::fd::FromRawFd};

use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// First descriptor passed by systemd socket activation.
const SD_LISTEN_FDS_START: i32 = 3;

/// The server socket, either inherited from the service manager or bound locally.
#[derive(Debug)]
pub(crate) struct SocketListener {
    listener: TcpListener,
}

impl SocketListener {
    pub(crate) async fn open(config: &ServerConfig) -> io::Result<Self> {
        let listener = if config.socket_activated {
            // Safety: `LISTEN_FDS=1` means the service manager handed us exactly this fd.
            let std_listener =
                unsafe { std::net::TcpListener::from_raw_fd(SD_LISTEN_FDS_START) };
            std_listener.set_nonblocking(true)?;
            tracing::info!("Using socket passed by the service manager");
            TcpListener::from_std(std_listener)?
        } else {
            TcpListener::bind(config.bind).await?
        };

        Ok(Self { listener })
    }

    pub(crate) fn into_inner(self) -> TcpListener {
        self.listener
    }
}

impl Deref for SocketListener {
    type Target = TcpListener;

    fn deref(&self) -> &Self::Target {
        &self.listener
    }
}
