//! Upstream Envelope
//!
//! The upstream wraps every payload as `{data, status, error}`. We decode
//! that shape once and carry it around as a tagged result.

use serde::{Deserialize, Deserializer};

// == Envelope Status ==
/// Status marker sent by the upstream alongside each payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "Successfully processed request.", alias = "HANDLED")]
    Handled,
    #[serde(rename = "Failed to process request.", alias = "ERROR")]
    Error,
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    data: Option<T>,
    status: Option<EnvelopeStatus>,
    error: Option<String>,
}

// == Envelope ==
/// Decoded upstream response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// Request handled with a payload
    Data(T),
    /// Request handled, no payload
    Empty,
    /// Upstream reported a failure
    Error(String),
}

impl<T> Envelope<T> {
    /// Converts into the payload, if any, or the upstream error message.
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self {
            Envelope::Data(data) => Ok(Some(data)),
            Envelope::Empty => Ok(None),
            Envelope::Error(message) => Err(message),
        }
    }
}

impl<T> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        match (raw.status, raw.error, raw.data) {
            (_, Some(message), _) => Envelope::Error(message),
            (Some(EnvelopeStatus::Error), None, _) => {
                Envelope::Error("upstream failed to process request".to_string())
            }
            (_, None, Some(data)) => Envelope::Data(data),
            (_, None, None) => Envelope::Empty,
        }
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawEnvelope::<T>::deserialize(deserializer).map(Envelope::from)
    }
}
