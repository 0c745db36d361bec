//! Page assembly and asset delivery service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::asset::{Download, Image, ImageFormat};
use crate::domain::content::PortfolioContent;
use crate::domain::page::{self, PageDescription};
use crate::domain::repositories::{AssetError, AssetStore};

/// Loads an image and checks that it is in a displayable format.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] or [`AssetError::Unreadable`] from the
/// store, or [`AssetError::Undecodable`] when the bytes are not a PNG, JPEG,
/// GIF or WebP image.
pub async fn load_profile_image(store: &dyn AssetStore, key: &str) -> Result<Image, AssetError> {
    let bytes = store.load(key).await?;
    let format = ImageFormat::sniff(&bytes).ok_or_else(|| AssetError::Undecodable {
        key: key.to_string(),
    })?;

    Ok(Image {
        key: key.to_string(),
        format,
        bytes,
    })
}

/// Reads only the head of an image to learn its format.
///
/// # Errors
///
/// Same as [`load_profile_image`].
pub async fn probe_profile_image(
    store: &dyn AssetStore,
    key: &str,
) -> Result<ImageFormat, AssetError> {
    let head = store.load_prefix(key, ImageFormat::SIGNATURE_LEN).await?;
    ImageFormat::sniff(&head).ok_or_else(|| AssetError::Undecodable {
        key: key.to_string(),
    })
}

/// Reads a file and wraps it as a download named `file_name`.
///
/// The file is read at call time, never cached.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] or [`AssetError::Unreadable`] from the store.
pub async fn offer_resume_download(
    store: &dyn AssetStore,
    key: &str,
    file_name: &str,
) -> Result<Download, AssetError> {
    let bytes = store.load(key).await?;
    Ok(Download::new(file_name, bytes))
}

/// Service that renders the portfolio page and serves its assets.
///
/// Holds the immutable content and the asset store; every call is independent,
/// so one instance is shared by all requests.
pub struct PageService {
    content: Arc<PortfolioContent>,
    store: Arc<dyn AssetStore>,
}

impl PageService {
    /// Creates a new page service.
    pub fn new(content: Arc<PortfolioContent>, store: Arc<dyn AssetStore>) -> Self {
        Self { content, store }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Loads the configured profile image.
    ///
    /// # Errors
    ///
    /// See [`load_profile_image`].
    pub async fn profile_image(&self) -> Result<Image, AssetError> {
        load_profile_image(self.store.as_ref(), &self.content.profile.image).await
    }

    /// Checks the configured profile image without reading all of it.
    ///
    /// # Errors
    ///
    /// See [`probe_profile_image`].
    pub async fn profile_image_format(&self) -> Result<ImageFormat, AssetError> {
        probe_profile_image(self.store.as_ref(), &self.content.profile.image).await
    }

    /// Loads the configured resume under its download name.
    ///
    /// # Errors
    ///
    /// See [`offer_resume_download`].
    pub async fn resume_download(&self) -> Result<Download, AssetError> {
        let resume = &self.content.profile.resume;
        offer_resume_download(self.store.as_ref(), &resume.file, &resume.download_name).await
    }

    /// Checks that the resume exists without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if the file is absent.
    pub async fn resume_available(&self) -> Result<(), AssetError> {
        let key = &self.content.profile.resume.file;
        if self.store.exists(key).await {
            Ok(())
        } else {
            Err(AssetError::not_found(key.as_str()))
        }
    }

    /// Probes both assets and renders the page.
    ///
    /// Asset failures are logged at `WARN` and shown as page warnings.
    pub async fn render(&self) -> PageDescription {
        let portrait = self.profile_image_format().await;
        if let Err(e) = &portrait {
            warn!(error = %e, "Profile image unavailable, rendering without it");
        }

        let resume = self.resume_available().await;
        if let Err(e) = &resume {
            warn!(error = %e, "Resume unavailable, rendering without download");
        }

        let page = page::render(
            &self.content,
            portrait.as_ref().copied(),
            resume.as_ref().copied(),
        );
        debug!(warnings = page.warnings().len(), "Page rendered");
        page
    }
}
