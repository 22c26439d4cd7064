/// Shifts each letter by the alphabetic index of the key character at the
/// same running position. Non-letter text characters pass through unchanged
/// but still advance the key, and non-letter key characters shift by nothing.
pub fn encrypt(text: &str, key: &str) -> String {
    apply_shifts(text, &key_shifts(key))
}

pub fn decrypt(text: &str, key: &str) -> String {
    let inverted: Vec<u8> = key_shifts(key).iter().map(|shift| (26 - shift) % 26).collect();
    apply_shifts(text, &inverted)
}

fn key_shifts(key: &str) -> Vec<u8> {
    key.chars()
        .map(|c| match c {
            'a'..='z' => c as u8 - b'a',
            'A'..='Z' => c as u8 - b'A',
            _ => 0,
        })
        .collect()
}

fn apply_shifts(text: &str, shifts: &[u8]) -> String {
    if shifts.is_empty() {
        return text.to_string();
    }

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let base = match c {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return c,
            };
            ((c as u8 - base + shifts[i % shifts.len()]) % 26 + base) as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_tableau_example() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON"), "LXFOPVEFRNHR");
        assert_eq!(decrypt("LXFOPVEFRNHR", "LEMON"), "ATTACKATDAWN");
    }

    #[test]
    fn test_spaces_advance_the_key() {
        assert_eq!(encrypt("attack at dawn", "lemon"), "lxfopv mh oeib");
        assert_eq!(decrypt("lxfopv mh oeib", "lemon"), "attack at dawn");
    }

    #[test]
    fn test_key_case_does_not_matter() {
        assert_eq!(encrypt("attack", "LeMoN"), encrypt("attack", "lemon"));
    }

    #[test]
    fn test_round_trip() {
        let text = "In cryptography, a substitution cipher is a method of encrypting!";
        assert_eq!(decrypt(&encrypt(text, "Secret Key"), "Secret Key"), text);
    }

    #[test]
    fn test_empty_key_is_the_identity() {
        assert_eq!(encrypt("attack at dawn", ""), "attack at dawn");
        assert_eq!(decrypt("attack at dawn", ""), "attack at dawn");
    }
}
