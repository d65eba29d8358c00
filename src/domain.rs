/// URL helpers: host extraction, favicon links and import names
use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Extract the hostname of an absolute URL
///
/// Fails when the string does not parse or has no host
/// (e.g. `mailto:` links).
pub fn hostname(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url.trim())?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or(url::ParseError::EmptyHost)
}

/// Favicon link for a host, 64px
pub fn favicon_url(domain: &str) -> String {
    let domain: String = url::form_urlencoded::byte_serialize(domain.as_bytes()).collect();
    format!("{}?domain={}&sz=64", FAVICON_SERVICE, domain)
}

/// Display name derived from a host: `www.unicorn.studio` → `unicorn.studio`
pub fn name_from_host(host: &str) -> String {
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Domain and display name for a bulk-imported URL
///
/// Never fails: when the URL cannot be parsed the raw input is used for
/// both.
pub fn import_identity(url: &str) -> (String, String) {
    match hostname(url) {
        Ok(host) => {
            let name = name_from_host(&host);
            (host, name)
        }
        Err(e) => {
            log::warn!("Could not parse {}: {}", url, e);
            (url.to_string(), url.to_string())
        }
    }
}

/// True for lines that look like web links
pub fn is_web_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}
