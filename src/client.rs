//! Blocking client
//!
//! One request, one response, over a single TCP connection.

use std::io::BufWriter;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::error::{KvError, Result};
use crate::protocol::{read_message, write_message, FrameReader, Message};

/// Client for a jsonkv server
pub struct KvClient {
    reader: FrameReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl KvClient {
    /// Connect to a server
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        Ok(Self {
            reader: FrameReader::new(read_stream),
            writer: BufWriter::new(stream),
        })
    }

    /// Send a raw message and wait for the reply
    ///
    /// Fails with `ConnectionClosed` if the server hangs up instead of
    /// answering.
    pub fn send(&mut self, request: &Message) -> Result<Message> {
        write_message(&mut self.writer, request)?;
        read_message(&mut self.reader)?.ok_or(KvError::ConnectionClosed)
    }

    /// GET `key`
    pub fn get(&mut self, key: &str) -> Result<Message> {
        self.send(&Message::get(key))
    }

    /// PUT `key` = `value`
    pub fn put(&mut self, key: &str, value: &str) -> Result<Message> {
        self.send(&Message::put(key, value))
    }

    /// Delete `key` (a PUT with an empty value)
    pub fn delete(&mut self, key: &str) -> Result<Message> {
        self.send(&Message::delete(key))
    }

    /// Close the connection
    pub fn disconnect(self) -> Result<()> {
        self.writer.get_ref().shutdown(Shutdown::Both)?;
        Ok(())
    }
}
