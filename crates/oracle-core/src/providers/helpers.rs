//! Shared helpers for entropy providers.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::ProviderError;

// ---------------------------------------------------------------------------
// Bit packing
// ---------------------------------------------------------------------------

/// Pack a sequence of bits (each `0` or `1`) into bytes, MSB first.
///
/// A trailing partial chunk is packed into the high bits of the last byte.
pub fn pack_bits_into_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Least significant bit of every sample, packed MSB first.
///
/// Sensor noise lives in the LSBs of raw pixel values.
pub fn extract_lsbs(samples: &[u8]) -> Vec<u8> {
    let bits: Vec<u8> = samples.iter().map(|s| s & 1).collect();
    pack_bits_into_bytes(&bits)
}

// ---------------------------------------------------------------------------
// Hex decoding
// ---------------------------------------------------------------------------

/// Decode a hex string, ignoring whitespace. `None` on any invalid digit or
/// an odd digit count.
pub fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    if digits.len() % 2 != 0 {
        return None;
    }
    Some(digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
}

// ---------------------------------------------------------------------------
// Subprocess utilities
// ---------------------------------------------------------------------------

/// Check if a command exists by running `which`.
pub fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Kill a child and wait on it so no zombie is left behind.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Run a command and return its stdout, killing it if it outlives `timeout`.
pub fn run_command_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<Vec<u8>, ProviderError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let Some(mut stdout) = child.stdout.take() else {
        reap(&mut child);
        return Err(ProviderError::Capture(format!("{program}: no stdout")));
    };
    let reader = std::thread::spawn(move || {
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf).map(|_| buf)
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                reap(&mut child);
                return Err(e.into());
            }
        }
        if Instant::now() >= deadline {
            reap(&mut child);
            return Err(ProviderError::Capture(format!(
                "{program} timed out after {:.1}s",
                timeout.as_secs_f64()
            )));
        }
        std::thread::sleep(Duration::from_millis(25));
    };

    let output = reader
        .join()
        .map_err(|_| ProviderError::Capture(format!("{program}: reader thread panicked")))??;

    if !status.success() {
        return Err(ProviderError::Capture(format!("{program} exited with {status}")));
    }
    Ok(output)
}
