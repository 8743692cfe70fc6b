//! Name normalization shared by the rule engine, path resolver and render context

/// Normalize a user-entered name into a filename-safe slug
///
/// Lower-cases, collapses every run of characters that are not alphanumeric
/// into a single `-`, and trims `-` from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Upper camel case identifier for generated class names (`my page` -> `MyPage`)
pub fn classify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Page"), "my-page");
        assert_eq!(slugify("Main"), "main");
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
        assert_eq!(slugify("user_profile card"), "user-profile-card");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_slugify_without_alphanumerics_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("my page"), "MyPage");
        assert_eq!(classify("user-profile"), "UserProfile");
        assert_eq!(classify("userService"), "UserService");
    }
}
