/// Upload session state
///
/// This module owns everything the window displays: the selected image,
/// the transform parameters, and the state of the single in-flight upload
/// (busy flag, error line, derived optimized URL). The upload lifecycle is
/// Idle -> Uploading -> Succeeded|Failed -> Idle, driven by
/// `begin_upload` / `finish_upload`.

use iced::widget::image::Handle;
use thiserror::Error;

use crate::pinata::client::UploadError;
use crate::state::params::TransformParams;

/// Message shown when a failed upload is reported to the user.
/// The root cause goes to the log, not the screen.
const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload the file. Please try again.";

/// Upload was invoked without a selected file
#[derive(Debug, Clone, Error)]
#[error("Please select a file first.")]
pub struct NoFileSelected;

/// An image the user picked, held in memory until replaced
#[derive(Debug, Clone)]
pub struct SelectedImage {
    /// File name as picked (e.g. "DSC_0001.jpg")
    pub name: String,
    /// MIME type sniffed from the file contents
    pub mime: &'static str,
    /// Raw file bytes, uploaded as-is
    pub bytes: Vec<u8>,
    /// Pixel dimensions, when the header could be read
    pub dimensions: Option<(u32, u32)>,
    /// Local preview reference for the original image
    pub preview: Handle,
}

/// State of the current session
pub struct Session {
    /// Transform parameters, edited directly by the form
    pub params: TransformParams,
    selected: Option<SelectedImage>,
    busy: bool,
    error: Option<String>,
    optimized_url: Option<String>,
    optimized_preview: Option<Handle>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            params: TransformParams::default(),
            selected: None,
            busy: false,
            error: None,
            optimized_url: None,
            optimized_preview: None,
        }
    }

    /// Store a newly picked image.
    ///
    /// The previous selection, including its preview handle, is dropped
    /// here rather than lingering until process exit. A prior optimized
    /// URL stays visible until the next successful upload replaces it.
    pub fn select(&mut self, image: SelectedImage) {
        self.selected = Some(image);
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    /// Whether an upload is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn optimized_url(&self) -> Option<&str> {
        self.optimized_url.as_deref()
    }

    pub fn optimized_preview(&self) -> Option<&Handle> {
        self.optimized_preview.as_ref()
    }

    /// Surface a failure that happened outside the upload cycle
    /// (e.g. the picked file could not be read)
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Start the upload cycle.
    ///
    /// With no file selected this is a no-op apart from the user message:
    /// no request is issued and the busy flag stays false. Otherwise the
    /// busy flag is raised, any prior error is cleared, and a copy of the
    /// selected image is handed back for the request.
    pub fn begin_upload(&mut self) -> Result<SelectedImage, NoFileSelected> {
        let Some(selected) = &self.selected else {
            self.error = Some(NoFileSelected.to_string());
            return Err(NoFileSelected);
        };

        self.busy = true;
        self.error = None;
        Ok(selected.clone())
    }

    /// Finish the upload cycle.
    ///
    /// Every outcome passes through here, so the busy flag cannot stay
    /// raised on any path. On success the optimized URL is replaced and
    /// the stale optimized preview dropped; on failure the previous URL
    /// is kept and the user sees a generic message while the cause goes
    /// to the log.
    pub fn finish_upload(&mut self, result: Result<String, UploadError>) {
        self.busy = false;

        match result {
            Ok(url) => {
                log::info!("optimized URL ready: {}", url);
                self.optimized_url = Some(url);
                self.optimized_preview = None;
            }
            Err(err) => {
                log::error!("upload failed: {}", err);
                self.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Attach the prefetched bytes of the optimized image
    pub fn set_optimized_preview(&mut self, handle: Handle) {
        self.optimized_preview = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> SelectedImage {
        SelectedImage {
            name: "photo.png".to_string(),
            mime: "image/png",
            bytes: vec![1, 2, 3, 4],
            dimensions: Some((640, 480)),
            preview: Handle::from_bytes(vec![1, 2, 3, 4]),
        }
    }

    #[test]
    fn test_idle_before_first_upload() {
        let session = Session::new();
        assert!(!session.is_busy());
        assert!(session.error().is_none());
        assert!(session.optimized_url().is_none());
    }

    #[test]
    fn test_upload_without_file_sets_message_only() {
        let mut session = Session::new();

        let result = session.begin_upload();

        assert!(result.is_err());
        assert_eq!(session.error(), Some("Please select a file first."));
        assert!(!session.is_busy());
        assert!(session.optimized_url().is_none());
    }

    #[test]
    fn test_successful_cycle_sets_url_and_clears_busy() {
        let mut session = Session::new();
        session.select(sample_image());

        let request = session.begin_upload().expect("a file is selected");
        assert!(session.is_busy());
        assert_eq!(request.name, "photo.png");

        session.finish_upload(Ok("https://gateway.pinata.cloud/ipfs/abc".to_string()));

        assert!(!session.is_busy());
        assert!(session.error().is_none());
        assert_eq!(
            session.optimized_url(),
            Some("https://gateway.pinata.cloud/ipfs/abc")
        );
    }

    #[test]
    fn test_begin_upload_clears_previous_error() {
        let mut session = Session::new();
        let _ = session.begin_upload();
        assert!(session.error().is_some());

        session.select(sample_image());
        let _ = session.begin_upload().expect("a file is selected");

        assert!(session.error().is_none());
    }

    #[test]
    fn test_failed_upload_keeps_previous_url() {
        let mut session = Session::new();
        session.select(sample_image());

        let _ = session.begin_upload().expect("a file is selected");
        session.finish_upload(Ok("https://gateway.pinata.cloud/ipfs/old".to_string()));

        let _ = session.begin_upload().expect("a file is selected");
        session.finish_upload(Err(UploadError::Status(401)));

        assert!(!session.is_busy());
        assert_eq!(
            session.error(),
            Some("Failed to upload the file. Please try again.")
        );
        assert_eq!(
            session.optimized_url(),
            Some("https://gateway.pinata.cloud/ipfs/old")
        );
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut session = Session::new();
        session.select(sample_image());

        let mut replacement = sample_image();
        replacement.name = "other.jpg".to_string();
        session.select(replacement);

        assert_eq!(session.selected().map(|s| s.name.as_str()), Some("other.jpg"));
    }
}
