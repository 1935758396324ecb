use std::path::Path;

use log::{info, warn};

use crate::error::GlobeError;

/// Local texture checked before falling back to the download.
pub const DEFAULT_TEXTURE_PATH: &str = "assets/earth.jpg";

/// Equirectangular earth texture from the three.js repository.
const DEFAULT_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/mrdoob/three.js/dev/examples/textures/planets/earth_atmos_2048.jpg";

/// Decoded RGBA image ready for upload.
pub struct TextureLoadResult {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Load texture bytes from a local file
pub async fn load_from_file(path: &Path) -> Result<Vec<u8>, GlobeError> {
    let data = tokio::fs::read(path).await?;
    Ok(data)
}

/// Download texture bytes over HTTP
pub async fn download(url: &str) -> Result<Vec<u8>, GlobeError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(GlobeError::Download {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Decode an encoded image (PNG/JPEG) to RGBA8
pub fn decode(data: &[u8]) -> Result<TextureLoadResult, GlobeError> {
    let img = image::load_from_memory(data)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TextureLoadResult {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Load and decode a texture from a local path or an http(s) URL.
pub async fn load_texture(source: &str) -> Result<TextureLoadResult, GlobeError> {
    let data = if source.starts_with("http://") || source.starts_with("https://") {
        info!("downloading texture from {source}");
        download(source).await?
    } else {
        info!("loading texture from {source}");
        load_from_file(Path::new(source)).await?
    };
    decode(&data)
}

/// Resolve the texture with the default fallback chain: an explicit source
/// wins; otherwise the bundled asset path is tried, then the download.
pub async fn load_with_fallback(source: Option<String>) -> Result<TextureLoadResult, GlobeError> {
    if let Some(source) = source {
        return load_texture(&source).await;
    }

    match load_texture(DEFAULT_TEXTURE_PATH).await {
        Ok(result) => Ok(result),
        Err(e) => {
            warn!("no local texture at {DEFAULT_TEXTURE_PATH} ({e}), downloading default");
            load_texture(DEFAULT_TEXTURE_URL).await
        }
    }
}
