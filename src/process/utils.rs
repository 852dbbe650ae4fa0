/// Width of an OUI prefix in hex characters.
pub const OUI_LEN: usize = 6;

/// Reduce a MAC-like string to its OUI prefix.
///
/// Every non-hex character is dropped (separators and junk alike), the rest is
/// upper-cased and cut to six characters. Fewer than six hex digits come back
/// as-is, so they simply miss the table.
pub fn normalize_mac(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_hexdigit)
        .take(OUI_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Copy `fields` into a new row at least `min_width` long, padded with empty strings.
pub fn pad_row<S: AsRef<str>>(fields: &[S], min_width: usize) -> Vec<String> {
    let mut row: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
    if row.len() < min_width {
        row.resize(min_width, String::new());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_notations() {
        assert_eq!(normalize_mac("AA:BB:CC:DD:EE:FF"), "AABBCC");
        assert_eq!(normalize_mac("aa-bb-cc"), "AABBCC");
        assert_eq!(normalize_mac("aabbcc.ddeeff"), "AABBCC");
        assert_eq!(normalize_mac("aabb.ccdd.eeff"), "AABBCC");
        assert_eq!(normalize_mac(" 00 1a 2b 3c 4d 5e "), "001A2B");
    }

    #[test]
    fn short_input_returned_as_is() {
        assert_eq!(normalize_mac("12"), "12");
        assert_eq!(normalize_mac("a:b"), "AB");
        assert_eq!(normalize_mac(""), "");
        assert_eq!(normalize_mac("zz:xx:--"), "");
    }

    #[test]
    fn drops_non_hex_junk() {
        assert_eq!(normalize_mac("GG12:34:56:78"), "123456");
        assert_eq!(normalize_mac("ｆｆ:11:22:33"), "112233");
        assert_eq!(normalize_mac("mac=aa.bb.cc"), "ACAABB");
    }

    #[test]
    fn output_is_short_uppercase_hex() {
        let inputs = [
            "0123456789abcdef",
            "fe:dc:ba:98",
            "a-b-c-d-e-f-0-1",
            "1.2.3",
            "::::",
            "AbCdEf",
        ];
        for s in inputs {
            let out = normalize_mac(s);
            assert!(out.len() <= OUI_LEN, "{s} -> {out}");
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
                "{s} -> {out}"
            );
        }
    }

    #[test]
    fn pad_row_grows_without_touching_input() {
        let one = vec!["AA:BB:CC".to_string()];
        let padded = pad_row(&one, 2);
        assert_eq!(padded, vec!["AA:BB:CC".to_string(), String::new()]);
        assert_eq!(one.len(), 1);

        let empty: Vec<&str> = Vec::new();
        assert_eq!(pad_row(&empty, 2), vec![String::new(), String::new()]);
    }

    #[test]
    fn pad_row_keeps_wide_rows() {
        let wide = ["a", "b", "c", "d"];
        assert_eq!(pad_row(&wide, 2), vec!["a", "b", "c", "d"]);
    }
}
