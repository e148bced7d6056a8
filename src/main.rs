use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the application modules
mod config;
mod pinata;
mod state;
mod ui;

use config::Config;
use pinata::client::{PinataClient, UploadError};
use pinata::gateway;
use state::params::{parse_numeric_input, OutputFormat};
use state::session::{SelectedImage, Session};

/// Main application state
struct PinOptimizer {
    /// The current upload session shown in the window
    session: Session,
    /// Client for the pinning API, cloned into background tasks
    client: PinataClient,
    /// Gateway serving optimized renditions of pinned files
    gateway_base: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Choose Image" button
    PickFile,
    /// The picked file finished loading into memory (or failed to)
    ImageLoaded(Result<SelectedImage, String>),
    /// Width input edited
    WidthChanged(String),
    /// Height input edited
    HeightChanged(String),
    /// Quality input edited
    QualityChanged(String),
    /// A format was chosen from the pick list
    FormatSelected(OutputFormat),
    /// User clicked the "Upload and Optimize" button
    Upload,
    /// Background upload completed with the optimized URL
    UploadFinished(Result<String, UploadError>),
    /// Prefetch of the optimized rendition completed
    OptimizedFetched(Result<Vec<u8>, UploadError>),
}

impl PinOptimizer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let client = PinataClient::new(&config);

        println!("🖼️  Image optimizer ready (gateway: {})", config.gateway_base);

        (
            PinOptimizer {
                session: Session::new(),
                client,
                gateway_base: config.gateway_base,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Choose Image")
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp"])
                    .pick_file();

                if let Some(path) = file {
                    return Task::perform(load_image(path), Message::ImageLoaded);
                }

                Task::none()
            }
            Message::ImageLoaded(Ok(image)) => {
                self.session.select(image);
                Task::none()
            }
            Message::ImageLoaded(Err(message)) => {
                log::error!("could not load picked file: {}", message);
                self.session.set_error(message);
                Task::none()
            }
            Message::WidthChanged(value) => {
                if let Some(width) = parse_numeric_input(&value) {
                    self.session.params.width = width;
                }
                Task::none()
            }
            Message::HeightChanged(value) => {
                if let Some(height) = parse_numeric_input(&value) {
                    self.session.params.height = height;
                }
                Task::none()
            }
            Message::QualityChanged(value) => {
                if let Some(quality) = parse_numeric_input(&value) {
                    self.session.params.quality = quality;
                }
                Task::none()
            }
            Message::FormatSelected(format) => {
                self.session.params.format = format;
                Task::none()
            }
            Message::Upload => {
                // Parameters are captured now; edits made while the upload
                // is in flight apply to the next one
                match self.session.begin_upload() {
                    Ok(selected) => {
                        let client = self.client.clone();
                        let gateway_base = self.gateway_base.clone();
                        let params = self.session.params;

                        Task::perform(
                            async move {
                                let hash = client
                                    .pin_file(selected.name, selected.mime, selected.bytes)
                                    .await?;
                                Ok(gateway::optimized_url(&gateway_base, &hash, &params))
                            },
                            Message::UploadFinished,
                        )
                    }
                    // The validation message is already on screen and
                    // nothing was sent
                    Err(_) => Task::none(),
                }
            }
            Message::UploadFinished(result) => {
                let prefetch = match &result {
                    Ok(url) => {
                        let client = self.client.clone();
                        let url = url.clone();
                        Task::perform(
                            async move { client.fetch_optimized(&url).await },
                            Message::OptimizedFetched,
                        )
                    }
                    Err(_) => Task::none(),
                };

                self.session.finish_upload(result);
                prefetch
            }
            Message::OptimizedFetched(Ok(bytes)) => {
                self.session.set_optimized_preview(Handle::from_bytes(bytes));
                Task::none()
            }
            Message::OptimizedFetched(Err(err)) => {
                // Best-effort fetch; the URL itself stays on screen
                log::warn!("optimized image fetch failed: {}", err);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        ui::form::root(&self.session)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // A missing .env file is fine; the environment may be set directly
    dotenvy::dotenv().ok();
    env_logger::init();

    iced::application("Pin Optimizer", PinOptimizer::update, PinOptimizer::view)
        .theme(PinOptimizer::theme)
        .centered()
        .run_with(PinOptimizer::new)
}

/// Async function to read a picked image into memory
/// Runs off the UI thread so large files do not block rendering
async fn load_image(path: PathBuf) -> Result<SelectedImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    // The sniffed format drives the multipart MIME type; the picker's
    // extension filter is only a hint
    let mime = image::guess_format(&bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    // Header-only dimension read for the preview caption
    let dimensions = image::ImageReader::new(std::io::Cursor::new(&bytes))
        .with_guessed_format()
        .ok()
        .and_then(|reader| reader.into_dimensions().ok());

    let preview = Handle::from_bytes(bytes.clone());

    Ok(SelectedImage {
        name,
        mime,
        bytes,
        dimensions,
        preview,
    })
}
