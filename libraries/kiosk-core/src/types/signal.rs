/// Real-time video control signals
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A control message relayed to every connected client
///
/// On the wire each signal is a JSON text frame:
///
/// ```text
/// {"event":"play-video","data":7}
/// {"event":"stop-video"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum VideoSignal {
    /// Start playing the video identified by the payload
    ///
    /// The payload is opaque and relayed exactly as received.
    PlayVideo(Value),

    /// Stop whatever is playing
    StopVideo,
}

/// Inbound frame before the event name is matched
#[derive(Debug, Deserialize)]
struct Frame {
    event: String,
    #[serde(default)]
    data: Value,
}

impl VideoSignal {
    /// Event name of [`VideoSignal::PlayVideo`]
    pub const PLAY_VIDEO: &'static str = "play-video";

    /// Event name of [`VideoSignal::StopVideo`]
    pub const STOP_VIDEO: &'static str = "stop-video";

    /// Play signal for a video number
    pub fn play(video: impl Into<Value>) -> Self {
        Self::PlayVideo(video.into())
    }

    /// Event name on the wire
    pub fn event(&self) -> &'static str {
        match self {
            Self::PlayVideo(_) => Self::PLAY_VIDEO,
            Self::StopVideo => Self::STOP_VIDEO,
        }
    }

    /// Parse an inbound text frame
    ///
    /// Returns `Ok(None)` for well-formed frames carrying any other event, and
    /// an error when the frame is not a JSON object with an `event` field. A
    /// `play-video` frame without `data` yields a `null` payload; any payload on
    /// `stop-video` is dropped.
    pub fn from_frame(text: &str) -> Result<Option<Self>> {
        let frame: Frame = serde_json::from_str(text)?;

        Ok(match frame.event.as_str() {
            Self::PLAY_VIDEO => Some(Self::PlayVideo(frame.data)),
            Self::STOP_VIDEO => Some(Self::StopVideo),
            _ => None,
        })
    }

    /// Serialize to an outbound text frame
    pub fn to_frame(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_play_frame_shape() {
        let frame = VideoSignal::play(7).to_frame().unwrap();
        assert_eq!(frame, r#"{"event":"play-video","data":7}"#);
    }

    #[test]
    fn test_stop_frame_has_no_payload() {
        let frame = VideoSignal::StopVideo.to_frame().unwrap();
        assert_eq!(frame, r#"{"event":"stop-video"}"#);
    }

    #[test]
    fn test_play_payload_is_kept_verbatim() {
        let signal = VideoSignal::from_frame(r#"{"event":"play-video","data":{"n":[1,"two"]}}"#)
            .unwrap()
            .unwrap();

        assert_eq!(signal, VideoSignal::PlayVideo(json!({"n": [1, "two"]})));
    }

    #[test]
    fn test_play_without_payload_relays_null() {
        let signal = VideoSignal::from_frame(r#"{"event":"play-video"}"#)
            .unwrap()
            .unwrap();

        assert_eq!(signal, VideoSignal::PlayVideo(Value::Null));
        assert_eq!(
            signal.to_frame().unwrap(),
            r#"{"event":"play-video","data":null}"#
        );
    }

    #[test]
    fn test_stop_drops_payload() {
        let signal = VideoSignal::from_frame(r#"{"event":"stop-video","data":3}"#)
            .unwrap()
            .unwrap();

        assert_eq!(signal, VideoSignal::StopVideo);
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let signal = VideoSignal::from_frame(r#"{"event":"pause-video","data":1}"#).unwrap();
        assert!(signal.is_none());
    }

    #[test]
    fn test_malformed_frame_is_error() {
        assert!(VideoSignal::from_frame("play-video 7").is_err());
        assert!(VideoSignal::from_frame(r#"{"data":7}"#).is_err());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(VideoSignal::play(1).event(), "play-video");
        assert_eq!(VideoSignal::StopVideo.event(), "stop-video");
    }
}
