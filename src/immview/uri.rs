use crate::error::LaunchError;
use crate::strategy::Platform;
use std::path::Path;
use url::Url;

/// Builds a `file://` URI for `path`, percent-encoding the path.
///
/// Windows paths have their separators turned into `/` and gain the extra
/// leading slash (`file:///C:/...`). `page`, when given, becomes a `#page=N`
/// fragment.
pub fn file_uri(path: &Path, platform: Platform, page: Option<u64>) -> Result<String, LaunchError> {
    let mut raw = path.to_string_lossy().into_owned();
    if platform == Platform::Windows {
        raw = raw.replace('\\', "/");
    }
    if !raw.starts_with('/') {
        raw.insert(0, '/');
    }
    // set_path treats '%' as an existing escape
    let raw = raw.replace('%', "%25");

    let mut url = Url::parse("file:///").map_err(LaunchError::InvalidUri)?;
    url.set_path(&raw);
    if let Some(page) = page {
        url.set_fragment(Some(&format!("page={page}")));
    }
    Ok(url.into())
}
