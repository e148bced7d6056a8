use iced::widget::{button, column, image, pick_list, row, text, text_input, Column};
use iced::{Element, Length};

use crate::state::params::OutputFormat;
use crate::state::session::Session;
use crate::Message;

/// Build the whole window content: controls on the left, previews on the right
pub fn root(session: &Session) -> Element<'_, Message> {
    row![controls(session), previews(session)]
        .spacing(24)
        .padding(24)
        .into()
}

/// The form column: picker, transform parameters, submit, error line
fn controls(session: &Session) -> Element<'_, Message> {
    let selected_caption = match session.selected() {
        Some(selected) => match selected.dimensions {
            Some((w, h)) => format!("{} ({}x{})", selected.name, w, h),
            None => selected.name.clone(),
        },
        None => "No file selected".to_string(),
    };

    let busy = session.is_busy();
    let upload_label = if busy { "Uploading..." } else { "Upload and Optimize" };
    // The disabled button is the only guard against overlapping uploads
    let can_upload = !busy && session.selected().is_some();

    let mut content = column![
        text("Image Optimizer").size(32),
        button("Choose Image").on_press(Message::PickFile).padding(10),
        text(selected_caption).size(14),
        row![
            numeric_input("Width", session.params.width, Message::WidthChanged),
            numeric_input("Height", session.params.height, Message::HeightChanged),
        ]
        .spacing(12),
        numeric_input("Quality (1-100)", session.params.quality, Message::QualityChanged),
        column![
            text("Format").size(14),
            pick_list(
                OutputFormat::ALL,
                Some(session.params.format),
                Message::FormatSelected
            ),
        ]
        .spacing(4),
        button(upload_label)
            .on_press_maybe(can_upload.then_some(Message::Upload))
            .padding(10),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    if let Some(message) = session.error() {
        content = content.push(text(message).size(14).style(text::danger));
    }

    content.into()
}

/// A labeled numeric text field
fn numeric_input<'a>(
    label: &'a str,
    value: u32,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(14),
        text_input("0", &value.to_string()).on_input(on_input),
    ]
    .spacing(4)
    .into()
}

/// The preview panel: original image, then the optimized rendition
fn previews(session: &Session) -> Element<'_, Message> {
    let mut content: Column<Message> = column![text("Preview").size(24)]
        .spacing(12)
        .width(Length::FillPortion(1));

    if let Some(selected) = session.selected() {
        content = content.push(text("Original Image").size(18));
        content = content.push(image(selected.preview.clone()).width(Length::Fill));
    }

    if let Some(url) = session.optimized_url() {
        content = content.push(text("Optimized Image").size(18));
        if let Some(handle) = session.optimized_preview() {
            content = content.push(image(handle.clone()).width(Length::Fill));
        }
        content = content.push(text(url).size(12));
    }

    content.into()
}
