#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Solo se permiten imágenes JPEG, PNG o WEBP.")]
    UnsupportedType,

    #[error("La imagen excede el tamaño máximo permitido de {max_bytes} bytes.")]
    TooLarge { max_bytes: usize },

    #[error("El archivo de imagen está vacío.")]
    Empty,
}

/// Rules a car photo must satisfy before it is written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const FIELD_NAME: &'static str = "fotografia";
    pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp"];

    pub fn new(max_file_size_bytes: usize) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    /// Validates an upload and returns the file extension to store it under.
    pub fn check(
        &self,
        content_type: Option<&str>,
        size: usize,
    ) -> Result<&'static str, UploadPolicyError> {
        let content_type = content_type
            .map(|ct| ct.trim().to_ascii_lowercase())
            .ok_or(UploadPolicyError::UnsupportedType)?;

        if !self.allowed_mime_types.contains(&content_type.as_str()) {
            return Err(UploadPolicyError::UnsupportedType);
        }
        if size == 0 {
            return Err(UploadPolicyError::Empty);
        }
        if size > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        extension_for(&content_type).ok_or(UploadPolicyError::UnsupportedType)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE)
    }
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/webp" => Some(".webp"),
        _ => None,
    }
}
