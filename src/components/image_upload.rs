//! Custom Image Upload Component
//!
//! File picker plus an upload button for one collection entry.

use collector_core::upload::IMAGE_EXTENSIONS;
use collector_core::{CollectorApi, ImageUpload, LocalImage};
use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use crate::context::{alert, use_api};

/// Attach a local image to a collection entry
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     UploadCustomImage {
///         entry_id: entry.id.clone(),
///         on_uploaded: move |url| {
///             // Patch the entry in place
///         },
///     }
/// }
/// ```
#[component]
pub fn UploadCustomImage(
    /// Collection entry receiving the image
    entry_id: String,
    /// Callback with the new custom image URL
    on_uploaded: EventHandler<String>,
) -> Element {
    let api = use_api();
    let mut upload = use_signal(ImageUpload::new);

    let choose_file = move |_| {
        spawn(async move {
            let Some(handle) = AsyncFileDialog::new()
                .add_filter("images", IMAGE_EXTENSIONS)
                .set_title("Select Image")
                .pick_file()
                .await
            else {
                // User cancelled
                return;
            };

            let bytes = handle.read().await;
            match LocalImage::from_bytes(handle.file_name(), bytes) {
                Ok(image) => upload.write().select(Some(image)),
                Err(e) => {
                    tracing::warn!("Rejected picked file: {}", e);
                    upload.write().select(None);
                }
            }
        });
    };

    let handle_upload = move |_| {
        let Some(file) = upload.write().begin() else {
            return;
        };
        let api = api.clone();
        let entry_id = entry_id.clone();
        spawn(async move {
            let result = api.upload_custom_image(&entry_id, &file).await;
            let outcome = upload.write().finish(result);
            match outcome {
                Ok(url) => on_uploaded.call(url),
                Err(e) => alert(e.to_string()).await,
            }
        });
    };

    let (selected, loading) = {
        let state = upload.read();
        (state.file.as_ref().map(|f| f.file_name.clone()), state.loading)
    };

    rsx! {
        div { class: "image-upload",
            button {
                class: "image-upload__pick",
                onclick: choose_file,
                {selected.clone().unwrap_or_else(|| "Choose file".to_string())}
            }
            button {
                class: "image-upload-btn",
                onclick: handle_upload,
                disabled: selected.is_none() || loading,
                if loading { "Uploading..." } else { "Set image" }
            }
        }
    }
}
