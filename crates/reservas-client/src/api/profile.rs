//! `/profile` endpoints.

use std::path::Path;

use validator::Validate;

use reservas_core::error::{AppError, ErrorKind};
use reservas_core::result::AppResult;
use reservas_entity::dto::{ChangeProfilePasswordDto, UpdateProfileDto};
use reservas_entity::user::{ProfileData, User};

use crate::transport::{ApiClient, ApiRequest, FileUpload};

/// Multipart field the server reads the avatar from.
pub const AVATAR_FIELD: &str = "avatar";

/// Largest avatar accepted.
pub const AVATAR_MAX_BYTES: usize = 5 * 1024 * 1024;

/// The current user's own profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> AppResult<ProfileData> {
        self.client.data(ApiRequest::get("/profile")).await
    }

    pub async fn update(&self, dto: &UpdateProfileDto) -> AppResult<User> {
        dto.validate()?;
        self.client
            .data(ApiRequest::patch("/profile").json(dto)?)
            .await
    }

    /// `PATCH /profile/password`. The server revokes every session on success.
    pub async fn change_password(&self, dto: &ChangeProfilePasswordDto) -> AppResult<Option<String>> {
        dto.validate()?;
        if dto.is_same_password() {
            return Err(AppError::validation(
                "La nueva contraseña debe ser diferente a la actual",
            ));
        }
        self.client
            .message(ApiRequest::patch("/profile/password").json(dto)?)
            .await
    }

    /// Upload an image file as the avatar.
    pub async fn upload_avatar(&self, path: &Path) -> AppResult<User> {
        let upload = avatar_upload(path).await?;
        self.client
            .data(ApiRequest::post("/profile/avatar").multipart(upload))
            .await
    }

    pub async fn delete_avatar(&self) -> AppResult<User> {
        self.client
            .data(ApiRequest::delete("/profile/avatar"))
            .await
    }
}

async fn avatar_upload(path: &Path) -> AppResult<FileUpload> {
    let mime = image_mime(path).ok_or_else(|| {
        AppError::validation("El avatar debe ser una imagen JPG, PNG, GIF o WEBP")
    })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("No se pudo leer el archivo: {}", path.display()),
            e,
        )
    })?;
    if bytes.len() > AVATAR_MAX_BYTES {
        return Err(AppError::validation("El avatar no puede exceder 5 MB"));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());

    Ok(FileUpload {
        field: AVATAR_FIELD.to_string(),
        file_name,
        mime: mime.to_string(),
        bytes,
    })
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("foto.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("foto.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("documento.pdf")), None);
        assert_eq!(image_mime(Path::new("sin_extension")), None);
    }

    #[tokio::test]
    async fn test_avatar_upload_rejects_non_images() {
        let err = avatar_upload(Path::new("notas.txt")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
