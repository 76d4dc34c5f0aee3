//! Image file name helpers

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static SPACE_BEFORE_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\.").expect("valid regex"));

/// Collapse whitespace runs to one space, drop whitespace in front of a
/// `.`, trim the ends.
pub fn clean_image_file_name(file_name: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(file_name, " ");
    SPACE_BEFORE_DOT.replace_all(&collapsed, ".").trim().to_string()
}

/// Cleaned file name joined onto the image directory.
pub fn image_path(image_dir: &str, file_name: &str) -> String {
    let cleaned = clean_image_file_name(file_name);
    let dir = image_dir.trim().trim_end_matches('/');
    if dir.is_empty() {
        cleaned
    } else {
        format!("{}/{}", dir, cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean_image_file_name("Dudhnoi   mural_2.jpg"), "Dudhnoi mural_2.jpg");
        assert_eq!(clean_image_file_name("Bt campus,\tGuwahati uni.png"), "Bt campus, Guwahati uni.png");
    }

    #[test]
    fn test_clean_space_before_extension() {
        assert_eq!(clean_image_file_name("Morigaon mural .jpg"), "Morigaon mural.jpg");
        assert_eq!(clean_image_file_name("  jorhat stadium  .jpg  "), "jorhat stadium.jpg");
    }

    #[test]
    fn test_clean_keeps_inner_spaces() {
        assert_eq!(clean_image_file_name("Lakhimpur_Girls_ College.png"), "Lakhimpur_Girls_ College.png");
        assert_eq!(clean_image_file_name("Gandhi park.jpg"), "Gandhi park.jpg");
    }

    #[test]
    fn test_image_path() {
        assert_eq!(image_path("Images", "RKB_hostel.jpg"), "Images/RKB_hostel.jpg");
        assert_eq!(image_path("https://cdn.example/img/", "a  b .png"), "https://cdn.example/img/a b.png");
        assert_eq!(image_path("", "x.jpg"), "x.jpg");
    }
}
