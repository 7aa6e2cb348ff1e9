//! CameraProvider: camera sensor noise via a one-shot ffmpeg capture.
//!
//! Captures a handful of 64x64 `rgb24` frames, takes the least significant
//! bit of every colour channel and packs the bits MSB-first. A 64x64 frame
//! carries 12288 channel samples, which yields 1536 bytes.
//!
//! Each call spawns ffmpeg, captures, and exits, so the camera is only held
//! while a reading is being drawn.

use std::path::Path;
use std::time::Duration;

use crate::error::ProviderError;
use crate::provider::{EntropyKind, EntropyProvider, ProviderInfo};

use super::helpers::{command_exists, extract_lsbs, run_command_with_timeout};

const FRAME_WIDTH: usize = 64;
const FRAME_HEIGHT: usize = 64;
const CHANNELS: usize = 3;
const FRAME_SIZE: usize = FRAME_WIDTH * FRAME_HEIGHT * CHANNELS;
const BYTES_PER_FRAME: usize = FRAME_SIZE / 8;

/// Leading frames dropped while the sensor settles.
const WARMUP_FRAMES: usize = 1;

/// Upper bound on frames per capture.
const MAX_FRAMES: usize = 64;

pub const DEFAULT_LINUX_DEVICE: &str = "/dev/video0";

static CAMERA_INFO: ProviderInfo = ProviderInfo {
    name: "camera_noise",
    label: "Camera Sensor Noise",
    description: "Camera sensor shot noise and read noise via ffmpeg",
    physics: "Each pixel counts photoelectrons. Photon arrival is a Poisson process, so even a \
              perfectly steady scene produces shot noise in every frame, mixed with amplifier \
              read noise and dark current. The least significant bit of every channel is \
              dominated by these fluctuations.",
    kind: EntropyKind::QuantumPhysical,
};

/// Frames to capture (excluding warm-up) to yield `count` bytes.
fn frames_needed(count: usize) -> usize {
    count.div_ceil(BYTES_PER_FRAME).clamp(1, MAX_FRAMES)
}

/// Turn raw `rgb24` frames into entropy bytes, skipping warm-up frames and
/// any trailing partial frame.
fn frames_to_bytes(raw: &[u8]) -> Vec<u8> {
    raw.chunks_exact(FRAME_SIZE)
        .skip(WARMUP_FRAMES)
        .flat_map(extract_lsbs)
        .collect()
}

/// Input selectors to try, in order.
fn input_candidates(device: Option<&str>) -> Vec<String> {
    if cfg!(target_os = "macos") {
        match device {
            Some(d) if d.contains(':') => vec![d.to_string()],
            Some(d) => vec![format!("{d}:none")],
            None => vec!["default:none".into(), "0:none".into(), "1:none".into()],
        }
    } else {
        vec![device.unwrap_or(DEFAULT_LINUX_DEVICE).to_string()]
    }
}

fn ffmpeg_args(input: &str, frames: usize) -> Vec<String> {
    let format = if cfg!(target_os = "macos") {
        "avfoundation"
    } else {
        "v4l2"
    };
    let mut args: Vec<String> = ["-hide_banner", "-loglevel", "error", "-nostdin", "-f", format]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if cfg!(target_os = "macos") {
        // avfoundation refuses to open without an explicit frame rate.
        args.extend(["-framerate".to_string(), "30".to_string()]);
    }
    let crop = format!("crop={FRAME_WIDTH}:{FRAME_HEIGHT}");
    let frame_count = (frames + WARMUP_FRAMES).to_string();
    args.extend(
        [
            "-i",
            input,
            "-vf",
            crop.as_str(),
            "-frames:v",
            frame_count.as_str(),
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
            "pipe:1",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    args
}

/// Entropy provider backed by the local camera.
pub struct CameraProvider {
    device: Option<String>,
    timeout: Duration,
}

impl CameraProvider {
    pub fn new(device: Option<String>, timeout: Duration) -> Self {
        Self { device, timeout }
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    fn capture(&self, input: &str, frames: usize) -> Result<Vec<u8>, ProviderError> {
        let args = ffmpeg_args(input, frames);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let raw = run_command_with_timeout("ffmpeg", &args, self.timeout)?;
        let bytes = frames_to_bytes(&raw);
        if bytes.is_empty() {
            return Err(ProviderError::Capture(format!(
                "no complete frames from {input} ({} raw bytes)",
                raw.len()
            )));
        }
        Ok(bytes)
    }
}

impl Default for CameraProvider {
    fn default() -> Self {
        Self::new(None, Duration::from_secs(super::DEFAULT_TIMEOUT_SECS))
    }
}

impl EntropyProvider for CameraProvider {
    fn info(&self) -> &ProviderInfo {
        &CAMERA_INFO
    }

    fn health_check(&self) -> bool {
        let platform_ok = if cfg!(target_os = "macos") {
            true
        } else if cfg!(target_os = "linux") {
            Path::new(self.device().unwrap_or(DEFAULT_LINUX_DEVICE)).exists()
        } else {
            false
        };
        platform_ok && command_exists("ffmpeg")
    }

    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
        if !cfg!(any(target_os = "macos", target_os = "linux")) {
            return Err(ProviderError::Unsupported(CAMERA_INFO.name));
        }

        let mut out = Vec::with_capacity(count);
        let mut last_err = None;
        for input in input_candidates(self.device()) {
            while out.len() < count {
                match self.capture(&input, frames_needed(count - out.len())) {
                    Ok(bytes) => out.extend_from_slice(&bytes),
                    Err(e) => {
                        log::debug!("camera capture from {input} failed: {e}");
                        last_err = Some(e);
                        break;
                    }
                }
            }
            if out.len() >= count {
                return Ok(out);
            }
        }
        Err(last_err.unwrap_or_else(|| ProviderError::Capture("no camera input".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_info() {
        let p = CameraProvider::default();
        assert_eq!(p.name(), "camera_noise");
        assert_eq!(p.info().kind, EntropyKind::QuantumPhysical);
        assert!(p.device().is_none());
    }

    #[test]
    fn frame_constants() {
        assert_eq!(FRAME_SIZE, 12288);
        assert_eq!(BYTES_PER_FRAME, 1536);
    }

    #[test]
    fn frames_needed_rounds_up() {
        assert_eq!(frames_needed(0), 1);
        assert_eq!(frames_needed(30), 1);
        assert_eq!(frames_needed(1536), 1);
        assert_eq!(frames_needed(1537), 2);
        assert_eq!(frames_needed(usize::MAX), MAX_FRAMES);
    }

    #[test]
    fn frames_to_bytes_skips_warmup_and_partial() {
        let mut raw = vec![0u8; FRAME_SIZE];
        raw.extend(std::iter::repeat_n(1u8, FRAME_SIZE));
        raw.extend([1u8; 100]);
        let bytes = frames_to_bytes(&raw);
        assert_eq!(bytes.len(), BYTES_PER_FRAME);
        assert!(bytes.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn frames_to_bytes_warmup_only_is_empty() {
        assert!(frames_to_bytes(&[7u8; FRAME_SIZE]).is_empty());
    }

    #[test]
    fn ffmpeg_args_request_raw_rgb() {
        let args = ffmpeg_args("/dev/video2", 2);
        let joined = args.join(" ");
        assert!(joined.contains("-i /dev/video2"));
        assert!(joined.contains("-frames:v 3"));
        assert!(joined.contains("-pix_fmt rgb24"));
        assert!(joined.contains("crop=64:64"));
        assert!(joined.ends_with("pipe:1"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn linux_input_uses_device_path() {
        assert_eq!(input_candidates(None), vec![DEFAULT_LINUX_DEVICE.to_string()]);
        assert_eq!(input_candidates(Some("/dev/video3")), vec!["/dev/video3".to_string()]);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn macos_input_selectors() {
        assert_eq!(input_candidates(Some("1")), vec!["1:none".to_string()]);
        assert_eq!(input_candidates(Some("0:0")), vec!["0:0".to_string()]);
        assert_eq!(input_candidates(None).len(), 3);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn missing_device_is_unhealthy() {
        let p = CameraProvider::new(
            Some("/dev/definitely-not-a-camera".into()),
            Duration::from_secs(1),
        );
        assert!(!p.health_check());
    }

    #[test]
    #[ignore] // Requires camera and ffmpeg
    fn camera_collects_bytes() {
        let p = CameraProvider::default();
        if p.health_check() {
            let data = p.fetch(64).unwrap();
            assert!(data.len() >= 64);
        }
    }

    #[test]
    fn camera_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CameraProvider>();
    }
}
