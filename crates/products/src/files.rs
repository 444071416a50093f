//! File URL resolution.

/// Turns a stored file name into a fetchable URL.
///
/// Files are scoped to the collection and record that own them, so the same
/// file name on two records resolves to two different URLs.
pub trait FileUrlResolver {
    fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String;
}

impl<T: FileUrlResolver + ?Sized> FileUrlResolver for &T {
    fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String {
        (**self).file_url(collection, record_id, filename)
    }
}

/// Resolver for the store's file endpoint:
/// `{base_url}/api/files/{collection}/{record_id}/{filename}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketBaseFiles {
    base_url: String,
}

impl PocketBaseFiles {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FileUrlResolver for PocketBaseFiles {
    fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String {
        format!(
            "{}/api/files/{}/{}/{}",
            self.base_url,
            encode_segment(collection),
            encode_segment(record_id),
            encode_segment(filename)
        )
    }
}

/// Percent-encode one path segment (everything but RFC 3986 unreserved
/// characters).
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_file_endpoint_urls() {
        let files = PocketBaseFiles::new("https://shop.example.com/");
        assert_eq!(files.base_url(), "https://shop.example.com");
        assert_eq!(
            files.file_url("products", "abc123", "tee_x1y2.jpg"),
            "https://shop.example.com/api/files/products/abc123/tee_x1y2.jpg"
        );
    }

    #[test]
    fn encodes_unsafe_characters() {
        let files = PocketBaseFiles::new("http://127.0.0.1:8090");
        assert_eq!(
            files.file_url("categories", "c1", "summer sale/ü.png"),
            "http://127.0.0.1:8090/api/files/categories/c1/summer%20sale%2F%C3%BC.png"
        );
    }

    #[test]
    fn references_resolve_like_the_owner() {
        let files = PocketBaseFiles::new("http://x");
        let by_ref: &dyn FileUrlResolver = &files;
        assert_eq!(
            (&by_ref).file_url("a", "b", "c"),
            files.file_url("a", "b", "c")
        );
    }
}
