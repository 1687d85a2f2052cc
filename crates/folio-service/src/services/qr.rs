//! QR codes for the public page
//!
//! Encodes `{public_base_url}/p/{handle}` of the caller's own profile. The
//! code is available before approval so owners can prepare it in advance.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::QrCode;
use tracing::instrument;
use uuid::Uuid;

use crate::dto::QrQuery;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::profile::ProfileService;

/// Smallest rendered edge in pixels
pub const QR_MIN_SIZE: u32 = 256;
/// Largest rendered edge in pixels
pub const QR_MAX_SIZE: u32 = 2048;
const QR_DEFAULT_SIZE: u32 = 512;

/// Output format of a QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    #[default]
    Png,
    Svg,
}

impl QrFormat {
    /// Parse the `format` query parameter; absent means PNG
    pub fn parse(value: Option<&str>) -> ServiceResult<Self> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            None | Some("" | "png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some(other) => Err(ServiceError::validation(format!(
                "format must be 'png' or 'svg', got '{other}'"
            ))),
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// A rendered QR code
#[derive(Debug, Clone)]
pub struct QrImage {
    pub format: QrFormat,
    /// The URL the code encodes
    pub target: String,
    pub bytes: Vec<u8>,
}

impl QrImage {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// QR service
pub struct QrService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QrService<'a> {
    /// Create a new QrService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render a QR code for the caller's public page
    #[instrument(skip(self))]
    pub async fn profile_code(&self, user_id: Uuid, query: QrQuery) -> ServiceResult<QrImage> {
        let format = QrFormat::parse(query.format.as_deref())?;
        let size = query
            .size
            .unwrap_or(QR_DEFAULT_SIZE)
            .clamp(QR_MIN_SIZE, QR_MAX_SIZE);

        let profile = ProfileService::new(self.ctx).own_profile(user_id).await?;
        let target = self.ctx.settings().profile_url(profile.handle.as_str());

        render(target, format, size)
    }
}

/// Encode `target` as a square image at least `size` pixels wide
pub fn render(target: String, format: QrFormat, size: u32) -> ServiceResult<QrImage> {
    let code = QrCode::new(target.as_bytes())
        .map_err(|e| ServiceError::internal(format!("QR encoding failed: {e}")))?;

    let bytes = match format {
        QrFormat::Png => {
            let image = code
                .render::<Luma<u8>>()
                .min_dimensions(size, size)
                .build();
            let mut bytes = Vec::new();
            image
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(|e| ServiceError::internal(format!("PNG encoding failed: {e}")))?;
            bytes
        }
        QrFormat::Svg => code
            .render::<svg::Color<'_>>()
            .min_dimensions(size, size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build()
            .into_bytes(),
    };

    Ok(QrImage {
        format,
        target,
        bytes,
    })
}
