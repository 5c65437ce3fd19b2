use std::path::Path;

/// 按扩展名推断上传附件的 MIME 类型，未知类型回退 octet-stream
///
/// 生成服务按 MIME 类型解读附件，这里只做尽力而为的推断，不做内容嗅探。
pub fn mime_type_for_filename(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_type_for_filename("unit3.pdf"), "application/pdf");
        assert_eq!(mime_type_for_filename("notes.txt"), "text/plain");
        assert_eq!(mime_type_for_filename("roster.csv"), "text/csv");
        assert_eq!(mime_type_for_filename("UPPER.PDF"), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_defaults() {
        assert_eq!(
            mime_type_for_filename("mystery.xyz"),
            "application/octet-stream"
        );
        assert_eq!(
            mime_type_for_filename("no_extension"),
            "application/octet-stream"
        );
    }
}
