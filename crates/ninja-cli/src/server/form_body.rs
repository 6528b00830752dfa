use std::borrow::Cow;

/// Decode an `application/x-www-form-urlencoded` body (or query string)
/// into pairs, keeping order and repeats.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Percent-decode one component; `+` is a space. Invalid UTF-8 is kept raw.
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(
            parse_form("question=Grip+socks%3F&answer=Yes%2C+always"),
            owned(&[("question", "Grip socks?"), ("answer", "Yes, always")])
        );
    }

    #[test]
    fn keeps_empty_values_and_bare_keys() {
        assert_eq!(parse_form("a=&b&&c=1"), owned(&[("a", ""), ("b", ""), ("c", "1")]));
    }

    #[test]
    fn keeps_multiline_text() {
        assert_eq!(parse_form("tags=one%0D%0Atwo"), owned(&[("tags", "one\r\ntwo")]));
    }

    #[test]
    fn invalid_utf8_is_left_as_is() {
        assert_eq!(decode_component("%FF"), "%FF");
    }
}
