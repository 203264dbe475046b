//! Output filename synthesis.

/// Synthesize the output filename for one extracted image.
///
/// `page` and `index` are 1-based. The base name is taken verbatim; no
/// sanitization is performed, so a base name with path separators or
/// characters illegal on the target filesystem fails at write time instead
/// of being corrected. Pure and deterministic.
pub fn synthesize_filename(page: u32, index: u32, base_name: &str) -> String {
    format!("page_{}_img_{}_{}", page, index, base_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_shape() {
        assert_eq!(synthesize_filename(1, 1, "im0.jpeg"), "page_1_img_1_im0.jpeg");
        assert_eq!(synthesize_filename(2, 1, "im0.jpeg"), "page_2_img_1_im0.jpeg");
        assert_eq!(synthesize_filename(12, 34, "x"), "page_12_img_34_x");
    }

    #[test]
    fn test_filename_deterministic() {
        let a = synthesize_filename(3, 7, "Im2.png");
        let b = synthesize_filename(3, 7, "Im2.png");
        assert_eq!(a, b);
    }

    #[test]
    fn test_filename_no_sanitization() {
        // Separators and empty names pass through untouched
        assert_eq!(synthesize_filename(1, 1, "a/b"), "page_1_img_1_a/b");
        assert_eq!(synthesize_filename(1, 1, ""), "page_1_img_1_");
    }
}
