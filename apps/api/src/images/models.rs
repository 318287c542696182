use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::Blob;

/// Output resolution offered by the image model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64 payload exactly as returned by the model.
    #[serde(skip)]
    pub data: String,
    pub size: ImageSize,
    pub data_url: String,
}

impl GeneratedImage {
    pub fn new(blob: Blob, size: ImageSize) -> Self {
        let data_url = format!("data:{};base64,{}", blob.mime_type, blob.data);
        Self {
            mime_type: blob.mime_type,
            data: blob.data,
            size,
            data_url,
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }

    pub fn download_name(now: DateTime<Utc>) -> String {
        format!("generated-image-{}.png", now.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_size_defaults_to_1k_and_uses_wire_names() {
        assert_eq!(ImageSize::default(), ImageSize::OneK);
        let size: ImageSize = serde_json::from_value(json!("4K")).unwrap();
        assert_eq!(size, ImageSize::FourK);
        assert_eq!(size.as_str(), "4K");
        assert!(serde_json::from_value::<ImageSize>(json!("8K")).is_err());
    }

    #[test]
    fn test_data_url_and_decode() {
        let image = GeneratedImage::new(
            Blob {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            },
            ImageSize::TwoK,
        );
        assert_eq!(image.data_url, "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.decode().unwrap(), b"hello");

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["size"], json!("2K"));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_download_name_uses_unix_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            GeneratedImage::download_name(now),
            "generated-image-1700000000123.png"
        );
    }
}
