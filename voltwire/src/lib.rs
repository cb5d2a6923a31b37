//! voltwire is the runtime support crate for codecs produced by
//! `voltwire-codegen`: specialized, reflection-free encode/decode/size
//! routines generated ahead of time from a message schema, plus optional
//! per-type instance pooling.
//!
//! Generated code implements three small traits:
//!
//! - [`WireSize`] — the exact serialized length of an instance. Exact means
//!   exact: encoders allocate output buffers of precisely this size and
//!   fill them completely, so the value is a contract, not an estimate.
//! - [`WireWrite`] — encoding. The generated workhorse is
//!   [`write_backward`](WireWrite::write_backward), which fills a pre-sized
//!   buffer from the tail in reverse field order; a nested message's span
//!   is already in place by the time its length prefix is written, so no
//!   prefix is ever patched and no bytes are copied twice.
//! - [`WireRead`] — decoding. One generated
//!   [`merge_scope`](WireRead::merge_scope) loop serves both length-
//!   delimited message spans and group scopes, dispatching on field
//!   numbers, skipping unrecognized fields by their wire-type framing, and
//!   enforcing the input bounds in [`wire`].
//!
//! Pool-eligible message types additionally implement
//! [`Recycle`](pool::Recycle) and expose a process-wide [`Pool`](pool::Pool)
//! that recycles instances without losing their heap capacity.
//!
//! ```ignore
//! let mut order = Order::acquire();
//! order.decode(payload)?;
//! respond(order.encode());
//! order.recycle();
//! ```
//!
//! Decoding merges into the target: repeated fields append and singular
//! fields overwrite. Callers that reuse an instance across `decode` calls
//! must clear it in between (`reset_for_reuse`, or the generated `clear`)
//! unless they explicitly want accumulation.
pub mod error;
pub use error::{DecodeError, DecodeResult, EncodeError, ErrorKind};
pub mod pool;
pub use pool::{Pool, Recycle};
pub mod wire;

/// Exact serialized size of a message instance.
pub trait WireSize {
    /// The number of bytes [`WireWrite::write_backward`] will produce for
    /// this instance. Never an estimate or an upper bound.
    fn encoded_len(&self) -> usize;
}

/// Encoding into the canonical wire format.
///
/// Encoding is total over well-formed in-memory values; only
/// [`encode_to`](WireWrite::encode_to) can fail, and only on an undersized
/// caller buffer.
pub trait WireWrite: WireSize {
    /// Write this message so it ends at `pos` in `buf`, filling backward,
    /// and return the start of the written span.
    ///
    /// `buf[..pos]` must hold at least [`encoded_len`](WireSize::encoded_len)
    /// bytes of room; generated callers guarantee this by construction.
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize;

    /// Encode into a freshly allocated, exactly sized buffer.
    fn encode(&self) -> Vec<u8> {
        let len = self.encoded_len();
        let mut buf = vec![0u8; len];
        let start = self.write_backward(&mut buf, len);
        debug_assert_eq!(start, 0, "encoded_len disagreed with write_backward");
        buf
    }

    /// Encode into the front of `buf`, returning the number of bytes
    /// written.
    fn encode_to(&self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let needed = self.encoded_len();
        if buf.len() < needed {
            return Err(EncodeError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        self.write_backward(&mut buf[..needed], needed);
        Ok(needed)
    }
}

/// Decoding from the canonical wire format.
pub trait WireRead: Default {
    /// Merge one scope of wire data into `self` and return the number of
    /// bytes consumed.
    ///
    /// With `end_group: None` the scope is a length-delimited span and the
    /// whole of `data` is consumed; with `Some(number)` the scope is a
    /// group body that ends at the matching end-group tag. `depth` tracks
    /// message nesting against [`wire::RECURSION_LIMIT`].
    ///
    /// On error the target is left partially populated and must be
    /// discarded or reset by the caller; there is no partial-success
    /// commit.
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> DecodeResult<usize>;

    /// Decode `data` into `self`.
    ///
    /// Merges by wire semantics: when `self` may hold prior content, clear
    /// it first so decode replaces rather than accumulates.
    fn decode(&mut self, data: &[u8]) -> DecodeResult<()> {
        self.merge_scope(data, None, 0).map(drop)
    }
}

impl<T: WireSize + ?Sized> WireSize for Box<T> {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

impl<T: WireWrite + ?Sized> WireWrite for Box<T> {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        (**self).write_backward(buf, pos)
    }
}

impl<T: WireRead> WireRead for Box<T> {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> DecodeResult<usize> {
        (**self).merge_scope(data, end_group, depth)
    }
}
