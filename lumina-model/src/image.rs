use std::fmt;

use url::Url;

use crate::ids::UserId;

/// Derivative sizes produced by the image-resizing pipeline.
///
/// The pipeline writes a webp next to every original upload for each size
/// token; this module only computes the resulting URL, it performs no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    /// Small square for listing grids
    Thumb,
    /// Large rendition for detail pages
    Detail,
}

impl ImageVariant {
    /// Size token embedded in the derivative file name
    pub fn size_token(&self) -> &'static str {
        match self {
            ImageVariant::Thumb => "200x200",
            ImageVariant::Detail => "1000x1000",
        }
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size_token())
    }
}

/// Top-level object-store folder an original was uploaded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFolder {
    Designs,
    Logos,
}

impl ImageFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFolder::Designs => "designs",
            ImageFolder::Logos => "logos",
        }
    }
}

const DERIVATIVE_EXT: &str = "webp";

/// Compute the derivative URL for an uploaded image.
///
/// Layout is `{base}/{folder}/{user_id}/{basename}_{size}.webp`: the
/// original extension is dropped, a name without a dot is used whole.
/// Pure function; the derivative is assumed to exist.
pub fn derivative_url(
    base: &Url,
    folder: ImageFolder,
    user_id: UserId,
    file_name: &str,
    variant: ImageVariant,
) -> Url {
    let basename = match file_name.rfind('.') {
        Some(index) => &file_name[..index],
        None => file_name,
    };
    let derivative = format!(
        "{basename}_{size}.{DERIVATIVE_EXT}",
        size = variant.size_token()
    );
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(folder.as_str())
            .push(&user_id.to_string())
            .push(&derivative);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn base() -> Url {
        Url::parse("https://storage.example.com/lumina-app").unwrap()
    }

    fn user() -> UserId {
        UserId(Uuid::nil())
    }

    #[test]
    fn extension_is_replaced_by_size_suffix() {
        let url = derivative_url(
            &base(),
            ImageFolder::Designs,
            user(),
            "my-design.png",
            ImageVariant::Thumb,
        );
        assert_eq!(
            url.as_str(),
            format!(
                "https://storage.example.com/lumina-app/designs/{}/my-design_200x200.webp",
                Uuid::nil()
            )
        );
    }

    #[test]
    fn name_without_extension_is_used_whole() {
        let url = derivative_url(
            &base(),
            ImageFolder::Logos,
            user(),
            "logo",
            ImageVariant::Detail,
        );
        assert!(url.as_str().ends_with("/logos/00000000-0000-0000-0000-000000000000/logo_1000x1000.webp"));
    }

    #[test]
    fn only_last_extension_is_dropped() {
        let url = derivative_url(
            &base(),
            ImageFolder::Designs,
            user(),
            "archive.tar.gz",
            ImageVariant::Thumb,
        );
        assert!(url.path().ends_with("/archive.tar_200x200.webp"));
    }
}
