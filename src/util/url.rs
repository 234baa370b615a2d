use crate::error::{Error, Result};
use url::Url;

/// Parse and canonicalize a configured base URL.
///
/// Jenkins base URLs are commonly written without a trailing slash; segment
/// joining below needs one.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut base = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: format!("invalid baseUrl `{raw}`").into(),
        source: Some(Box::new(err)),
    })?;

    if base.cannot_be_a_base() {
        return Err(Error::InvalidConfig {
            message: format!("baseUrl `{raw}` is not a hierarchical URL").into(),
            source: None,
        });
    }

    if base.query().is_some() || base.fragment().is_some() {
        return Err(Error::InvalidConfig {
            message: "baseUrl must not include query or fragment".into(),
            source: None,
        });
    }

    let path = base.path();
    if !path.ends_with('/') {
        base.set_path(&format!("{path}/"));
    }
    Ok(base)
}

/// Join percent-encoded path segments onto a normalized base.
pub(crate) fn join_segments<'a, I>(base: &Url, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| Error::InvalidConfig {
            message: "baseUrl must be a hierarchical URL".into(),
            source: None,
        })?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_trailing_slash() {
        let base = normalize_base_url("https://ci.example.com/jenkins").unwrap();
        assert_eq!(base.as_str(), "https://ci.example.com/jenkins/");
    }

    #[test]
    fn normalize_rejects_query_and_fragment() {
        assert!(normalize_base_url("https://ci.example.com/?x=1").is_err());
        assert!(normalize_base_url("https://ci.example.com/#frag").is_err());
    }

    #[test]
    fn join_segments_percent_encodes() {
        let base = normalize_base_url("https://ci.example.com").unwrap();
        let url = join_segments(&base, ["job", "my job", "buildWithParameters"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ci.example.com/job/my%20job/buildWithParameters"
        );
    }

    #[test]
    fn join_segments_keeps_base_path() {
        let base = normalize_base_url("https://ci.example.com/jenkins").unwrap();
        let url = join_segments(&base, ["job", "demo"]).unwrap();
        assert_eq!(url.as_str(), "https://ci.example.com/jenkins/job/demo");
    }
}
