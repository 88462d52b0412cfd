//! Async adapters over tokio's [`AsyncRead`] and [`AsyncWrite`].

use crate::error::{header_read_error, StreamError};
use knx_core::tpci::decode_header;
use knx_core::Tpdu;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Async counterpart of [`read_tpdu`](crate::read_tpdu).
pub async fn read_tpdu_async<R>(source: &mut R) -> Result<Tpdu, StreamError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut header = [0u8; 1];
    source
        .read_exact(&mut header)
        .await
        .map_err(header_read_error)?;

    let mut frame = header.to_vec();
    let (kind, _, _) = decode_header(header[0]);
    if kind.is_data() {
        source.read_to_end(&mut frame).await?;
    }

    let tpdu = Tpdu::from_bytes(&frame)?;
    log::trace!("decoded tpdu from {} octets: {tpdu:?}", frame.len());
    Ok(tpdu)
}

/// Async counterpart of [`write_tpdu`](crate::write_tpdu).
pub async fn write_tpdu_async<W>(sink: &mut W, tpdu: &Tpdu) -> Result<(), StreamError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let frame = tpdu.to_vec();
    sink.write_all(&frame).await?;
    log::trace!("encoded tpdu into {} octets: {tpdu:?}", frame.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_tpdu_async, write_tpdu_async};
    use crate::StreamError;
    use knx_core::{ServiceCode, Tpdu};
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

    /// Yields `header` (if any) once, then fails with `kind`.
    struct FlakySource {
        header: Option<u8>,
        kind: io::ErrorKind,
    }

    impl AsyncRead for FlakySource {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            match self.header.take() {
                Some(b) => {
                    buf.put_slice(&[b]);
                    Poll::Ready(Ok(()))
                }
                None => Poll::Ready(Err(io::Error::new(self.kind, "line down"))),
            }
        }
    }

    struct RejectingSink;

    impl AsyncWrite for RejectingSink {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn data_header_without_continuation_is_too_short() {
        let mut source: &[u8] = &[0x44];
        assert!(matches!(
            read_tpdu_async(&mut source).await,
            Err(StreamError::DataUnitTooShort)
        ));
    }

    #[tokio::test]
    async fn header_read_failure_propagates_as_io() {
        let mut source = FlakySource {
            header: None,
            kind: io::ErrorKind::BrokenPipe,
        };
        match read_tpdu_async(&mut source).await {
            Err(StreamError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn continuation_read_failure_propagates_as_io() {
        let mut source = FlakySource {
            header: Some(0x00),
            kind: io::ErrorKind::TimedOut,
        };
        match read_tpdu_async(&mut source).await {
            Err(StreamError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::TimedOut),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn sink_failure_propagates_as_io() {
        match write_tpdu_async(&mut RejectingSink, &Tpdu::disconnect()).await {
            Err(StreamError::Io(err)) => {
                assert_eq!(err.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn reads_data_packet_from_slice() {
        let mut source: &[u8] = &[0x00, 0x41];
        let tpdu = read_tpdu_async(&mut source).await.unwrap();
        assert_eq!(tpdu.service_code, ServiceCode::GroupValueResponse);
        assert_eq!(tpdu.payload, vec![0x01]);
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn control_packet_leaves_rest_unread() {
        let mut source: &[u8] = &[0x80, 0x00];
        assert_eq!(read_tpdu_async(&mut source).await.unwrap(), Tpdu::connect());
        assert_eq!(source, &[0x00]);
    }

    #[tokio::test]
    async fn empty_source_is_truncated() {
        let mut source: &[u8] = &[];
        assert!(matches!(
            read_tpdu_async(&mut source).await,
            Err(StreamError::TruncatedInput)
        ));
    }

    #[tokio::test]
    async fn writes_whole_frame() {
        let mut sink = Vec::new();
        write_tpdu_async(&mut sink, &Tpdu::group_value_read())
            .await
            .unwrap();
        assert_eq!(sink, vec![0x00, 0x00]);
    }
}
