/// Percent-encode a string the way `encodeURIComponent` does.
///
/// `urlencoding` already leaves `A-Z a-z 0-9 - _ . ~` alone; the component
/// encoder additionally keeps `! ' ( ) *` literal, so those escapes are
/// undone afterwards.
pub fn encode_uri_component(input: &str) -> String {
    let encoded = urlencoding::encode(input);
    if !encoded.contains('%') {
        return encoded.into_owned();
    }

    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(encode_uri_component("SpringMeetup-2024_v1.0~"), "SpringMeetup-2024_v1.0~");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(encode_uri_component("a b&c=d/e?f#g"), "a%20b%26c%3Dd%2Fe%3Ff%23g");
        assert_eq!(encode_uri_component("1+1,2"), "1%2B1%2C2");
    }

    #[test]
    fn test_component_safe_marks_stay_literal() {
        assert_eq!(encode_uri_component("Don't (really)!*"), "Don't%20(really)!*");
    }

    #[test]
    fn test_utf8_multibyte() {
        assert_eq!(encode_uri_component("Café"), "Caf%C3%A9");
    }
}
