//! Two-byte length-prefix framing for DNS over stream transports (RFC 1035 §4.2.2).

use dns_failover_domain::DomainError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const MAX_MESSAGE_SIZE: usize = 65535;

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::Probe(format!(
            "DNS message too large for stream framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::Probe(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::Probe(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::Probe(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut length_bytes = [0u8; 2];
    stream
        .read_exact(&mut length_bytes)
        .await
        .map_err(|e| DomainError::Probe(format!("Failed to read length prefix: {}", e)))?;

    let length = u16::from_be_bytes(length_bytes) as usize;
    if length == 0 || length > MAX_MESSAGE_SIZE {
        return Err(DomainError::Probe(format!(
            "Invalid DNS message length: {}",
            length
        )));
    }

    let mut buf = vec![0u8; length];
    stream
        .read_exact(&mut buf)
        .await
        .map_err(|e| DomainError::Probe(format!("Failed to read DNS message: {}", e)))?;

    Ok(buf)
}
