//! Profile-picture acquisition panel.
//!
//! Owns only its transient UI state; the acquired value itself lives in the
//! parent answer record and is written through the `publish` callback, either
//! as a base64 data URI (local file) or as the raw URL (remote image).
//!
//! Async work (file reads, HEAD probes) settles into `Arc<Mutex<Option<_>>>`
//! slots that `poll_async` drains once per frame.

use std::sync::{Arc, Mutex};

use eframe::egui;

use super::validate::{self, UploadError};
use crate::http_client::HttpClient;
use crate::wasm_utils;

/// How the user is supplying the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMethod {
    File,
    Url,
}

/// A settled URL probe. `seq` identifies the edit that started it; results
/// from superseded edits are discarded instead of racing the newest one.
struct UrlCheckOutcome {
    seq: u64,
    result: Result<String, UploadError>,
}

struct Preview {
    source: String,
    texture: egui::TextureHandle,
}

pub struct ImageAcquisitionPanel {
    method: AcquisitionMethod,
    url_text: String,
    validating: bool,
    error: Option<UploadError>,
    drag_active: bool,

    http: HttpClient,
    url_check_seq: u64,

    // Async result bridges, drained once per frame
    file_read_state: Option<Arc<Mutex<Option<Result<String, UploadError>>>>>,
    url_check_state: Option<Arc<Mutex<Option<UrlCheckOutcome>>>>,

    preview: Option<Preview>,
}

impl ImageAcquisitionPanel {
    pub fn new(http: HttpClient) -> Self {
        Self {
            method: AcquisitionMethod::File,
            url_text: String::new(),
            validating: false,
            error: None,
            drag_active: false,
            http,
            url_check_seq: 0,
            file_read_state: None,
            url_check_state: None,
            preview: None,
        }
    }

    /// Drain settled async work. Call once per frame, before rendering.
    pub fn poll_async(&mut self, publish: &mut dyn FnMut(String)) {
        let mut file_settled = false;
        if let Some(slot) = &self.file_read_state {
            if let Ok(mut guard) = slot.lock() {
                if let Some(result) = guard.take() {
                    file_settled = true;
                    match result {
                        Ok(data_uri) => {
                            log::info!("Profile picture encoded ({} chars)", data_uri.len());
                            self.error = None;
                            publish(data_uri);
                        }
                        Err(error) => {
                            log::warn!("File acquisition failed: {}", error);
                            self.error = Some(error);
                        }
                    }
                }
            }
        }
        if file_settled {
            self.file_read_state = None;
        }

        let mut url_settled = false;
        if let Some(slot) = &self.url_check_state {
            if let Ok(mut guard) = slot.lock() {
                if let Some(outcome) = guard.take() {
                    if outcome.seq == self.url_check_seq {
                        url_settled = true;
                        self.validating = false;
                        match outcome.result {
                            Ok(url) => {
                                log::info!("Image URL accepted: {}", url);
                                self.error = None;
                                publish(url);
                            }
                            Err(error) => {
                                log::warn!("Image URL rejected: {}", error);
                                self.error = Some(error);
                            }
                        }
                    } else {
                        log::debug!(
                            "Discarding stale URL probe (seq {} != {})",
                            outcome.seq,
                            self.url_check_seq
                        );
                    }
                }
            }
        }
        if url_settled {
            self.url_check_state = None;
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        current_value: &str,
        publish: &mut dyn FnMut(String),
    ) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Profile Picture (optional)").strong());
            ui.add_space(4.0);

            // Switching the method keeps whatever was already published
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.method, AcquisitionMethod::File, "📁 Upload a file");
                ui.selectable_value(&mut self.method, AcquisitionMethod::Url, "🔗 Link an image URL");
            });
            ui.add_space(6.0);

            match self.method {
                AcquisitionMethod::File => self.show_file_input(ui),
                AcquisitionMethod::Url => self.show_url_input(ui, publish),
            }

            if self.validating {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Checking image URL...");
                });
            }
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            }

            self.show_preview(ui, current_value, publish);

            if !current_value.is_empty() {
                ui.add_space(4.0);
                if ui.button("Remove image").clicked() {
                    self.clear_image(publish);
                }
            }
        });
    }

    fn show_file_input(&mut self, ui: &mut egui::Ui) {
        self.drag_active = ui.ctx().input(|input| !input.raw.hovered_files.is_empty());

        let stroke = if self.drag_active {
            egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        egui::Frame::none()
            .stroke(stroke)
            .rounding(6.0)
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(if self.drag_active {
                        "Drop the image to use it"
                    } else {
                        "Drag & drop an image here"
                    });
                    ui.label(egui::RichText::new("JPG, PNG, GIF or WebP, up to 5 MB").small());
                    ui.add_space(4.0);
                    if ui.button("Browse files…").clicked() {
                        self.open_file_dialog();
                    }
                });
            });

        // Only the first dropped file is taken
        let dropped = ui
            .ctx()
            .input(|input| input.raw.dropped_files.first().cloned());
        if let Some(file) = dropped {
            self.ingest_dropped(file);
        }
    }

    fn show_url_input(&mut self, ui: &mut egui::Ui, publish: &mut dyn FnMut(String)) {
        ui.label("Direct link to a picture of you:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.url_text)
                .hint_text("https://example.com/photo.jpg")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.on_url_edited(publish);
        }
    }

    fn show_preview(
        &mut self,
        ui: &mut egui::Ui,
        current_value: &str,
        publish: &mut dyn FnMut(String),
    ) {
        if current_value.is_empty() {
            self.preview = None;
            return;
        }

        if current_value.starts_with("data:") {
            let stale = self
                .preview
                .as_ref()
                .map_or(true, |preview| preview.source != current_value);
            if stale {
                match decode_preview_texture(ui.ctx(), current_value) {
                    Ok(texture) => {
                        self.preview = Some(Preview {
                            source: current_value.to_string(),
                            texture,
                        });
                    }
                    Err(error) => {
                        // The published value cannot be rendered: drop it
                        log::warn!("Published image failed to display: {}", error);
                        self.preview = None;
                        self.error = Some(UploadError::DisplayFailed);
                        publish(String::new());
                        return;
                    }
                }
            }
            if let Some(preview) = &self.preview {
                ui.add_space(6.0);
                ui.add(egui::Image::new(&preview.texture).max_width(160.0).rounding(4.0));
            }
        } else {
            self.preview = None;
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("✔ Image URL accepted:");
                ui.monospace(elide(current_value, 48));
            });
        }
    }

    /// Remove the acquired image: clear local url text and error, publish "".
    fn clear_image(&mut self, publish: &mut dyn FnMut(String)) {
        self.url_text.clear();
        self.error = None;
        self.validating = false;
        self.url_check_seq += 1;
        self.preview = None;
        publish(String::new());
    }

    fn ingest_dropped(&mut self, file: egui::DroppedFile) {
        let name = file
            .path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| file.name.clone());
        let declared = if file.mime.is_empty() {
            None
        } else {
            Some(file.mime.as_str())
        };

        let mime = match validate::resolve_file_type(&name, declared) {
            Ok(mime) => mime,
            Err(error) => {
                log::warn!("Rejected dropped file {}: {}", name, error);
                self.error = Some(error);
                return;
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match file.path {
                Some(path) => self.start_file_from_path(mime, path),
                None => self.error = Some(UploadError::ReadFailed),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            match file.bytes {
                Some(bytes) => self.start_file_from_bytes(mime, bytes.to_vec()),
                None => self.error = Some(UploadError::ReadFailed),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_file_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Choose a profile picture")
            .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp"])
            .pick_file()
        else {
            return;
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        match validate::resolve_file_type(&name, None) {
            Ok(mime) => self.start_file_from_path(mime, path),
            Err(error) => self.error = Some(error),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open_file_dialog(&mut self) {
        let slot = self.new_file_slot();
        wasm_utils::spawn_async(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .set_title("Choose a profile picture")
                .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp"])
                .pick_file()
                .await
            else {
                return;
            };

            let result = match validate::resolve_file_type(&handle.file_name(), None) {
                Ok(mime) => encode_checked(mime, handle.read().await),
                Err(error) => Err(error),
            };
            store(&slot, result);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_file_from_path(&mut self, mime: String, path: std::path::PathBuf) {
        let slot = self.new_file_slot();
        wasm_utils::spawn_async(async move {
            store(&slot, read_and_encode_path(mime, path).await);
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn start_file_from_bytes(&mut self, mime: String, bytes: Vec<u8>) {
        let slot = self.new_file_slot();
        wasm_utils::spawn_async(async move {
            store(&slot, encode_checked(mime, bytes));
        });
    }

    fn new_file_slot(&mut self) -> Arc<Mutex<Option<Result<String, UploadError>>>> {
        let slot = Arc::new(Mutex::new(None));
        self.file_read_state = Some(slot.clone());
        slot
    }

    fn on_url_edited(&mut self, publish: &mut dyn FnMut(String)) {
        // Every edit supersedes any probe still in flight
        self.url_check_seq += 1;

        if self.url_text.is_empty() {
            self.error = None;
            self.validating = false;
            publish(String::new());
            return;
        }

        if !validate::has_image_extension(&self.url_text) {
            self.error = Some(UploadError::InvalidUrlExtension);
            self.validating = false;
            return;
        }

        self.validating = true;
        let seq = self.url_check_seq;
        let url = self.url_text.clone();
        let http = self.http.clone();
        let slot = Arc::new(Mutex::new(None));
        self.url_check_state = Some(slot.clone());

        wasm_utils::spawn_async(async move {
            let result = match http.probe_image(&url).await {
                Ok(probe) => validate::probe_verdict(probe.ok_status, probe.content_type.as_deref())
                    .map(|()| url),
                Err(error) => {
                    log::warn!("Image URL probe failed: {}", error);
                    Err(UploadError::UrlNotAnImage)
                }
            };
            store(&slot, UrlCheckOutcome { seq, result });
        });
    }
}

fn store<T>(slot: &Arc<Mutex<Option<T>>>, value: T) {
    if let Ok(mut guard) = slot.lock() {
        *guard = Some(value);
    }
}

fn encode_checked(mime: String, bytes: Vec<u8>) -> Result<String, UploadError> {
    validate::check_file_size(bytes.len())?;
    Ok(validate::encode_data_uri(&mime, &bytes))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_and_encode_path(
    mime: String,
    path: std::path::PathBuf,
) -> Result<String, UploadError> {
    let metadata = tokio::fs::metadata(&path).await.map_err(|error| {
        log::error!("Failed to stat {}: {}", path.display(), error);
        UploadError::ReadFailed
    })?;
    validate::check_file_size(metadata.len() as usize)?;

    let bytes = tokio::fs::read(&path).await.map_err(|error| {
        log::error!("Failed to read {}: {}", path.display(), error);
        UploadError::ReadFailed
    })?;
    encode_checked(mime, bytes)
}

fn decode_preview_texture(
    ctx: &egui::Context,
    value: &str,
) -> Result<egui::TextureHandle, UploadError> {
    let bytes = validate::decode_data_uri(value)?;
    let decoded = image::load_from_memory(&bytes).map_err(|_| UploadError::DisplayFailed)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());
    Ok(ctx.load_texture("profile-image-preview", color_image, egui::TextureOptions::LINEAR))
}

fn elide(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max).collect();
        format!("{}…", prefix)
    }
}
