/// Bounding box for a derivative. Never used to upscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimit {
    pub width: u32,
    pub height: u32,
}

impl SizeLimit {
    /// Parse a "width,height" pair such as "150,150".
    pub fn parse(value: &str) -> Option<Self> {
        let (w, h) = value.split_once(',')?;
        let width: u32 = w.trim().parse().ok()?;
        let height: u32 = h.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }
}

const DEFAULT_THUMBNAIL_SIZE: SizeLimit = SizeLimit {
    width: 150,
    height: 150,
};
const DEFAULT_WEB_SIZE: SizeLimit = SizeLimit {
    width: 800,
    height: 600,
};

/// Process-wide configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket receiving the derivatives. There is no default; without it
    /// every write fails at upload time rather than at startup.
    pub destination_bucket: Option<String>,
    pub thumbnail_size: SizeLimit,
    pub web_size: SizeLimit,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            destination_bucket: std::env::var("DESTINATION_BUCKET").ok(),
            thumbnail_size: size_from_env("THUMBNAIL_SIZE", DEFAULT_THUMBNAIL_SIZE),
            web_size: size_from_env("WEB_SIZE", DEFAULT_WEB_SIZE),
        }
    }
}

fn size_from_env(var: &str, default: SizeLimit) -> SizeLimit {
    match std::env::var(var) {
        Ok(raw) => SizeLimit::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(
                "{} has unparseable value {:?}, using {}x{}",
                var,
                raw,
                default.width,
                default.height
            );
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_height_pair() {
        assert_eq!(
            SizeLimit::parse("150,150"),
            Some(SizeLimit {
                width: 150,
                height: 150
            })
        );
        assert_eq!(
            SizeLimit::parse("800, 600"),
            Some(SizeLimit {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert_eq!(SizeLimit::parse(""), None);
        assert_eq!(SizeLimit::parse("150"), None);
        assert_eq!(SizeLimit::parse("150,"), None);
        assert_eq!(SizeLimit::parse("wide,tall"), None);
        assert_eq!(SizeLimit::parse("0,150"), None);
    }

    #[test]
    fn unset_env_value_falls_back_to_default() {
        assert_eq!(
            size_from_env("PHOTOFLOW_TEST_SIZE_UNSET", DEFAULT_WEB_SIZE),
            DEFAULT_WEB_SIZE
        );
    }

    #[test]
    fn unparseable_env_value_falls_back_to_default() {
        std::env::set_var("PHOTOFLOW_TEST_SIZE_GARBAGE", "not-a-size");
        assert_eq!(
            size_from_env("PHOTOFLOW_TEST_SIZE_GARBAGE", DEFAULT_THUMBNAIL_SIZE),
            DEFAULT_THUMBNAIL_SIZE
        );
    }
}
