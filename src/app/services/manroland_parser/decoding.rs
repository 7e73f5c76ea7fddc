//! Streaming decoding of the console's legacy export encoding
//!
//! Press consoles write their exports in Windows-1252. [`DecodingReader`]
//! wraps any byte source and yields UTF-8, chunk by chunk, so the tokenizer
//! can consume arbitrarily large exports without loading them whole.

use encoding_rs::{CoderResult, Decoder, Encoding};
use std::io::{self, Read};

const INPUT_CHUNK_SIZE: usize = 8 * 1024;
const OUTPUT_CHUNK_SIZE: usize = 3 * INPUT_CHUNK_SIZE;

/// Room for one UTF-8 encoded character
const MIN_OUTPUT_CHUNK_SIZE: usize = 4;

/// `Read` adapter decoding `encoding` into UTF-8
///
/// Malformed sequences are replaced with U+FFFD. A leading byte order mark
/// overrides the configured encoding.
pub struct DecodingReader<R> {
    inner: R,
    decoder: Decoder,
    input: Box<[u8]>,
    input_start: usize,
    input_end: usize,
    output: Box<[u8]>,
    output_start: usize,
    output_end: usize,
    eof: bool,
    finished: bool,
}

impl<R: Read> DecodingReader<R> {
    pub fn new(inner: R, encoding: &'static Encoding) -> Self {
        Self::with_buffer_sizes(inner, encoding, INPUT_CHUNK_SIZE, OUTPUT_CHUNK_SIZE)
    }

    /// Reader with explicit input and output buffer sizes
    ///
    /// When a decoded chunk does not fit the output buffer it is handed out
    /// over several reads.
    pub fn with_buffer_sizes(
        inner: R,
        encoding: &'static Encoding,
        input_size: usize,
        output_size: usize,
    ) -> Self {
        Self {
            inner,
            decoder: encoding.new_decoder(),
            input: vec![0; input_size.max(1)].into_boxed_slice(),
            input_start: 0,
            input_end: 0,
            output: vec![0; output_size.max(MIN_OUTPUT_CHUNK_SIZE)].into_boxed_slice(),
            output_start: 0,
            output_end: 0,
            eof: false,
            finished: false,
        }
    }

    /// Reader for the default Windows-1252 export encoding
    pub fn windows_1252(inner: R) -> Self {
        Self::new(inner, encoding_rs::WINDOWS_1252)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill_input(&mut self) -> io::Result<()> {
        loop {
            match self.inner.read(&mut self.input) {
                Ok(0) => {
                    self.eof = true;
                    self.input_start = 0;
                    self.input_end = 0;
                    return Ok(());
                }
                Ok(n) => {
                    self.input_start = 0;
                    self.input_end = n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Read for DecodingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            if self.output_start < self.output_end {
                let available = &self.output[self.output_start..self.output_end];
                let n = available.len().min(buf.len());
                buf[..n].copy_from_slice(&available[..n]);
                self.output_start += n;
                return Ok(n);
            }

            if self.finished {
                return Ok(0);
            }

            if self.input_start == self.input_end && !self.eof {
                self.fill_input()?;
            }

            let last = self.eof;
            let (result, read, written, _had_replacements) = self.decoder.decode_to_utf8(
                &self.input[self.input_start..self.input_end],
                &mut self.output,
                last,
            );
            self.input_start += read;
            self.output_start = 0;
            self.output_end = written;

            if last && result == CoderResult::InputEmpty {
                self.finished = true;
            }
        }
    }
}
