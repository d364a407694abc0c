use crate::{
    error::AppError,
    media::{VideoReference, is_valid_image_reference},
};

pub const INVALID_VIDEO_MESSAGE: &str = "Link de vídeo inválido. Use um link do YouTube, uma URL completa (http/https) ou um caminho começando com /.";
pub const INVALID_IMAGE_MESSAGE: &str =
    "Imagem inválida. Use uma URL completa (http/https) ou um caminho começando com /.";

pub fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("O campo {field} é obrigatório.")));
    }
    Ok(trimmed.to_string())
}

pub fn optional_required_text(
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, AppError> {
    value.map(|v| required_text(field, &v)).transpose()
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn image_reference(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if !is_valid_image_reference(trimmed) {
        return Err(AppError::BadRequest(INVALID_IMAGE_MESSAGE.to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn optional_image_reference(value: Option<String>) -> Result<Option<String>, AppError> {
    value.map(|v| image_reference(&v)).transpose()
}

/// Normalizes a submitted video link and rejects it when the normalized form
/// is still not a usable reference.
pub fn video_reference(raw: &str) -> Result<VideoReference, AppError> {
    let reference = VideoReference::from_raw(raw);
    if !reference.is_valid() {
        tracing::info!("Rejected video reference {:?}", raw);
        return Err(AppError::BadRequest(INVALID_VIDEO_MESSAGE.to_string()));
    }
    Ok(reference)
}

pub fn optional_video_reference(raw: Option<String>) -> Result<Option<VideoReference>, AppError> {
    raw.map(|v| video_reference(&v)).transpose()
}

/// Edit to a nullable column: `None` keeps the stored value, `Some(None)`
/// clears it.
pub type Clearable<T> = Option<Option<T>>;

pub fn clearable_text(value: Option<String>) -> Clearable<String> {
    value.map(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

pub fn clearable_image_reference(value: Option<String>) -> Result<Clearable<String>, AppError> {
    value
        .map(|v| match v.trim() {
            "" => Ok(None),
            trimmed => image_reference(trimmed).map(Some),
        })
        .transpose()
}

pub fn clearable_video_reference(
    raw: Option<String>,
) -> Result<Clearable<VideoReference>, AppError> {
    raw.map(|v| match v.trim() {
        "" => Ok(None),
        trimmed => video_reference(trimmed).map(Some),
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::VideoKind;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(message) => message,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn blank_required_text_is_rejected() {
        assert_eq!(required_text("título", "  Gala  ").unwrap(), "Gala");
        let err = required_text("título", "   ").unwrap_err();
        assert_eq!(message(err), "O campo título é obrigatório.");
    }

    #[test]
    fn absent_optional_fields_pass() {
        assert!(optional_required_text("nome", None).unwrap().is_none());
        assert!(optional_image_reference(None).unwrap().is_none());
        assert!(optional_video_reference(None).unwrap().is_none());
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(optional_text(Some(" Palco ".to_string())).as_deref(), Some("Palco"));
        assert!(optional_text(Some("  ".to_string())).is_none());
        assert!(optional_text(None).is_none());
    }

    #[test]
    fn image_must_be_path_or_http_url() {
        assert_eq!(image_reference(" /images/a.jpg ").unwrap(), "/images/a.jpg");
        assert!(image_reference("https://cdn.example.com/a.jpg").is_ok());
        let err = image_reference("a.jpg").unwrap_err();
        assert_eq!(message(err), INVALID_IMAGE_MESSAGE);
    }

    #[test]
    fn video_is_normalized_before_validation() {
        let reference = video_reference("youtu.be/gly8Le3_BZw").unwrap();
        assert_eq!(reference.href(), "https://www.youtube.com/embed/gly8Le3_BZw");
        assert_eq!(reference.kind(), VideoKind::YouTube);

        let reference = video_reference("/videos/video_show_case_1.mp4").unwrap();
        assert_eq!(reference.kind(), VideoKind::Video);
    }

    #[test]
    fn blank_clearable_fields_mean_clear() {
        assert_eq!(clearable_text(None), None);
        assert_eq!(clearable_text(Some("   ".to_string())), Some(None));
        assert_eq!(
            clearable_text(Some(" Palco ".to_string())),
            Some(Some("Palco".to_string()))
        );

        assert_eq!(clearable_image_reference(None).unwrap(), None);
        assert_eq!(clearable_image_reference(Some(String::new())).unwrap(), Some(None));
        assert_eq!(
            clearable_image_reference(Some(" /images/a.jpg ".to_string())).unwrap(),
            Some(Some("/images/a.jpg".to_string()))
        );

        assert!(clearable_video_reference(None).unwrap().is_none());
        assert!(matches!(
            clearable_video_reference(Some("  ".to_string())).unwrap(),
            Some(None)
        ));
    }

    #[test]
    fn non_blank_clearable_fields_are_still_validated() {
        let err = clearable_image_reference(Some("a.jpg".to_string())).unwrap_err();
        assert_eq!(message(err), INVALID_IMAGE_MESSAGE);

        let err = clearable_video_reference(Some("youtu.be/abc".to_string())).unwrap_err();
        assert_eq!(message(err), INVALID_VIDEO_MESSAGE);

        let reference = clearable_video_reference(Some("youtu.be/gly8Le3_BZw".to_string()))
            .unwrap()
            .flatten()
            .unwrap();
        assert_eq!(reference.href(), "https://www.youtube.com/embed/gly8Le3_BZw");
    }

    #[test]
    fn unusable_video_is_rejected() {
        for raw in ["", "not a url at all", "youtu.be/abc"] {
            let err = video_reference(raw).unwrap_err();
            assert_eq!(message(err), INVALID_VIDEO_MESSAGE, "{raw}");
        }
    }
}
