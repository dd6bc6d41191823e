use crate::config::{Config, SizeLimit};

/// The two renditions produced for every source object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeKind {
    Thumbnail,
    Web,
}

impl DerivativeKind {
    /// Generation order for one source object.
    pub const ALL: [DerivativeKind; 2] = [DerivativeKind::Thumbnail, DerivativeKind::Web];

    pub fn key_prefix(self) -> &'static str {
        match self {
            DerivativeKind::Thumbnail => "thumbnails",
            DerivativeKind::Web => "web",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DerivativeKind::Thumbnail => "thumbnail",
            DerivativeKind::Web => "web version",
        }
    }

    pub fn size_limit(self, config: &Config) -> SizeLimit {
        match self {
            DerivativeKind::Thumbnail => config.thumbnail_size,
            DerivativeKind::Web => config.web_size,
        }
    }
}

/// Destination key for a derivative: the kind's prefix plus the source key's
/// base filename. Deterministic, so reprocessing a source key overwrites the
/// derivatives it produced last time.
pub fn derived_key(kind: DerivativeKind, source_key: &str) -> String {
    let basename = source_key
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(source_key);
    format!("{}/{}", kind.key_prefix(), basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_path_prefix() {
        assert_eq!(
            derived_key(DerivativeKind::Thumbnail, "photos/dog.png"),
            "thumbnails/dog.png"
        );
        assert_eq!(derived_key(DerivativeKind::Web, "photos/dog.png"), "web/dog.png");
        assert_eq!(
            derived_key(DerivativeKind::Thumbnail, "a/b/c/cat.jpg"),
            "thumbnails/cat.jpg"
        );
    }

    #[test]
    fn bare_keys_pass_through() {
        assert_eq!(
            derived_key(DerivativeKind::Thumbnail, "dog.png"),
            "thumbnails/dog.png"
        );
        assert_eq!(derived_key(DerivativeKind::Web, "dog.png"), "web/dog.png");
    }
}
