//! A byte-level reader over any [`Read`] source.
//!
//! [`ByteReader`] drives the JSON parser: it supports peeking at the next
//! byte without consuming it, advancing byte by byte, and tracking the
//! absolute position in the stream. A small ring buffer of recently read
//! bytes is kept at all times so that parse errors can quote the input
//! around the failure point.

use anyhow::{Error, Result, anyhow};
use std::io::Read;

const TAIL_BUFFER_SIZE: usize = 16;
const READ_BUFFER_SIZE: usize = 4096;

pub struct ByteReader<'a> {
	source: Box<dyn Read + 'a>,
	buffer: [u8; READ_BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	peeked: Option<u8>,
	position: usize,
	tail: [u8; TAIL_BUFFER_SIZE],
}

impl<'a> ByteReader<'a> {
	pub fn new(source: impl Read + 'a) -> Self {
		let mut reader = ByteReader {
			source: Box::new(source),
			buffer: [0; READ_BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			peeked: None,
			position: 0,
			tail: [0; TAIL_BUFFER_SIZE],
		};
		reader.advance();
		reader
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.buffer_len = self.source.read(&mut self.buffer).unwrap_or(0);
			self.buffer_pos = 0;
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Index of the byte currently visible through [`peek`](Self::peek).
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position.saturating_sub(1)
	}

	/// Look at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked
	}

	/// Move on to the next byte, recording it in the tail buffer.
	///
	/// Calling this past the end of the stream is a no-op, so the reported
	/// position stays stable once the input is exhausted.
	#[inline]
	pub fn advance(&mut self) {
		if self.position > 0 && self.peeked.is_none() {
			return;
		}
		self.peeked = self.next_byte();
		if let Some(byte) = self.peeked {
			self.tail[self.position % TAIL_BUFFER_SIZE] = byte;
		}
		self.position += 1;
	}

	/// Consume and return the current byte, or `None` at the end of the stream.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current = self.peeked;
		self.advance();
		current
	}

	/// Consume and return the current byte, failing at the end of the stream.
	#[inline]
	pub fn expect_next(&mut self) -> Result<u8> {
		if let Some(current) = self.peeked {
			self.advance();
			Ok(current)
		} else {
			Err(self.error("unexpected end"))
		}
	}

	/// Return the current byte without consuming it, failing at the end of the stream.
	#[inline]
	pub fn expect_peek(&self) -> Result<u8> {
		self.peeked.ok_or_else(|| self.error("unexpected end"))
	}

	/// Skip over ASCII whitespace, stopping at the first other byte or the end.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peeked {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Build an error carrying the current position and a snippet of the
	/// input read so far. `<EOF>` marks an exhausted stream.
	#[must_use]
	pub fn error(&self, message: &str) -> Error {
		let length = (self.position.saturating_sub(1)).min(TAIL_BUFFER_SIZE - 1);
		let snippet: Vec<u8> = (0..length)
			.map(|i| self.tail[(self.position - 1 - length + i) % TAIL_BUFFER_SIZE])
			.collect();
		let mut snippet = String::from_utf8_lossy(&snippet).into_owned();
		if self.peeked.is_none() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{message} at position {}: {snippet}", self.position())
	}
}
